//! # 汉字 → 拼音
//!
//! 进程级只读索引：首次使用时由内置区间表构建一次（`OnceLock` 保证并发首调也只构建一次），
//! 之后任意线程直接查询，无需加锁。

use std::sync::OnceLock;

use log::error;

use crate::data::{BUILTIN_CHAIN, BUILTIN_CHAIN_HEAD, BUILTIN_TRIPLES};
use crate::error::TableError;
use crate::range::CodeSpan;
use crate::table::{RangeIndex, Strictness};

static INDEX: OnceLock<RangeIndex> = OnceLock::new();

/// 由内置区间表构建索引
pub fn build_builtin(strictness: Strictness, span: CodeSpan) -> Result<RangeIndex, TableError> {
    let mut builder = RangeIndex::builder(strictness).span(span);
    for &(pinyin, start, end) in BUILTIN_TRIPLES {
        builder.register(pinyin, start, end)?;
    }
    builder.register_chain(BUILTIN_CHAIN_HEAD, BUILTIN_CHAIN)?;
    Ok(builder.build())
}

pub fn global_index() -> &'static RangeIndex {
    INDEX.get_or_init(|| {
        match build_builtin(Strictness::Lenient, CodeSpan::default()) {
            Ok(index) => index,
            Err(e) => {
                error!("[Pinyin] builtin table failed: {}", e);
                RangeIndex::default()
            }
        }
    })
}

/// 取单个汉字（GBK 双字节）的拼音，查不到返回 None
pub fn get_pinyin(word: &str) -> Option<&'static str> {
    global_index().get_pinyin(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_chars() {
        assert_eq!(get_pinyin("啊"), Some("a"));
        assert_eq!(get_pinyin("爱"), Some("ai"));
        assert_eq!(get_pinyin("安"), Some("an"));
        assert_eq!(get_pinyin("八"), Some("ba"));
        assert_eq!(get_pinyin("国"), Some("guo"));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(get_pinyin(""), None);
        assert_eq!(get_pinyin("A"), None);
        assert_eq!(get_pinyin("1"), None);
        // 0xD6D0，超出内置表收录范围
        assert_eq!(get_pinyin("中"), None);
    }

    #[test]
    fn test_builtin_strict_reports_chuan() {
        let err = build_builtin(Strictness::Strict, CodeSpan::default()).err();
        assert_eq!(err, Some(TableError::InvertedRange {
            pinyin: "chuan".into(), start: 0xB4A8, end: 0xB4A3,
        }));
    }

    #[test]
    fn test_global_index_built_once() {
        let a = global_index() as *const RangeIndex;
        let b = global_index() as *const RangeIndex;
        assert_eq!(a, b);
        assert_eq!(global_index().len(), 15 + 1 + 127 - 1);
        assert_eq!(global_index().defects().len(), 1);
    }
}
