//! # 拼音区间索引
//!
//! 所有区间按登记顺序存入一个扁平数组，再按高位字节分桶：
//! 跨越多个高位的区间只存一份，每个桶里记录它在数组中的下标。
//!
//! ## 查询
//! - 码位区检查（高位/低位）
//! - 取高位桶，按登记顺序找第一个包含该码位的区间

use std::collections::HashMap;

use log::{info, warn};

use crate::codec::decode_codepoint;
use crate::error::TableError;
use crate::range::{CodeSpan, Codepoint, PinyinRange};

/// 倒置区间的处理方式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strictness {
    /// 拒绝构建
    Strict,
    /// 记录警告并跳过该区间
    #[default]
    Lenient,
}

// ============================================================
// RangeIndex
// ============================================================

/// 只读的拼音区间索引，构建后不再修改
#[derive(Debug, Clone, Default)]
pub struct RangeIndex {
    /// 已索引的区间，按登记顺序
    ranges: Vec<PinyinRange>,
    /// 高位字节 -> 区间下标（按登记顺序）
    buckets: HashMap<u8, Vec<usize>>,
    /// 宽松模式下被跳过的倒置区间
    defects: Vec<PinyinRange>,
    span: CodeSpan,
}

impl RangeIndex {
    pub fn builder(strictness: Strictness) -> RangeIndexBuilder {
        RangeIndexBuilder::new(strictness)
    }

    /// 按码位查拼音
    pub fn lookup(&self, cp: Codepoint) -> Option<&str> {
        if !self.span.contains(cp) {
            return None;
        }
        let code = cp.value();
        self.buckets
            .get(&cp.high)?
            .iter()
            .map(|&i| &self.ranges[i])
            .find(|r| r.contains(code))
            .map(|r| r.pinyin())
    }

    pub fn lookup_code(&self, code: u16) -> Option<&str> {
        self.lookup(Codepoint::from(code))
    }

    /// 取单个汉字的拼音；空串、ASCII、非 GBK 字符及未收录的码位都返回 None
    pub fn get_pinyin(&self, word: &str) -> Option<&str> {
        decode_codepoint(word).and_then(|cp| self.lookup(cp))
    }

    pub fn len(&self) -> usize { self.ranges.len() }
    pub fn is_empty(&self) -> bool { self.ranges.is_empty() }
    pub fn ranges(&self) -> &[PinyinRange] { &self.ranges }
    pub fn defects(&self) -> &[PinyinRange] { &self.defects }
    pub fn span(&self) -> &CodeSpan { &self.span }

    /// 已建立的高位桶数
    pub fn buckets(&self) -> usize { self.buckets.len() }

    /// 某个高位桶里的区间，按登记顺序
    pub fn bucket(&self, high: u8) -> Vec<&PinyinRange> {
        match self.buckets.get(&high) {
            Some(indices) => indices.iter().map(|&i| &self.ranges[i]).collect(),
            None => vec![],
        }
    }
}

// ============================================================
// 构建
// ============================================================

pub struct RangeIndexBuilder {
    index: RangeIndex,
    strictness: Strictness,
    /// 上一次登记的终点，链式登记从它 + 1 开始
    last_end: Option<u16>,
}

impl RangeIndexBuilder {
    pub fn new(strictness: Strictness) -> Self {
        Self { index: RangeIndex::default(), strictness, last_end: None }
    }

    pub fn span(mut self, span: CodeSpan) -> Self {
        self.index.span = span;
        self
    }

    /// 登记一个区间，追加到它跨越的每一个高位桶末尾
    pub fn register(&mut self, pinyin: &str, start: u16, end: u16) -> Result<&mut Self, TableError> {
        self.last_end = Some(end);
        let range = PinyinRange::new(pinyin, start, end);

        if range.is_inverted() {
            match self.strictness {
                Strictness::Strict => {
                    return Err(TableError::InvertedRange { pinyin: pinyin.to_string(), start, end });
                }
                Strictness::Lenient => {
                    warn!("[Table] inverted range skipped: {}", range);
                    self.index.defects.push(range);
                    return Ok(self);
                }
            }
        }

        let pos = self.index.ranges.len();
        for high in range.high_span() {
            self.index.buckets.entry(high).or_default().push(pos);
        }
        self.index.ranges.push(range);
        Ok(self)
    }

    /// 接着上一个区间登记：起点 = 上一段终点 + 1
    pub fn continue_chain(&mut self, pinyin: &str, end: u16) -> Result<&mut Self, TableError> {
        let prev = self.last_end
            .ok_or_else(|| TableError::DanglingSegment { pinyin: pinyin.to_string() })?;
        let start = prev
            .checked_add(1)
            .ok_or_else(|| TableError::ChainOverflow { pinyin: pinyin.to_string() })?;
        self.register(pinyin, start, end)
    }

    /// 链式登记：首段给出完整的 (拼音, 起点, 终点)，后续每段只给 (拼音, 终点)
    pub fn register_chain(
        &mut self,
        head: (&str, u16, u16),
        rest: &[(&str, u16)],
    ) -> Result<&mut Self, TableError> {
        let (pinyin, start, end) = head;
        self.register(pinyin, start, end)?;
        for &(pinyin, end) in rest {
            self.continue_chain(pinyin, end)?;
        }
        Ok(self)
    }

    pub fn build(self) -> RangeIndex {
        let index = self.index;
        info!("[Table] {} ranges, {} buckets, {} defects",
            index.ranges.len(), index.buckets.len(), index.defects.len());
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_index() -> RangeIndex {
        let mut b = RangeIndex::builder(Strictness::Strict);
        b.register("a", 0xB0A1, 0xB0A2).unwrap();
        b.register_chain(("bao", 0xB0FA, 0xB1AC), &[("bei", 0xB1BB), ("ben", 0xB1BF)]).unwrap();
        b.build()
    }

    #[test]
    fn test_register_shares_range_across_buckets() {
        let index = small_index();
        assert_eq!(index.len(), 4);
        assert_eq!(index.buckets(), 2);

        let b0: Vec<&str> = index.bucket(0xB0).iter().map(|r| r.pinyin()).collect();
        let b1: Vec<&str> = index.bucket(0xB1).iter().map(|r| r.pinyin()).collect();
        assert_eq!(b0, vec!["a", "bao"]);
        assert_eq!(b1, vec!["bao", "bei", "ben"]);
        assert!(index.bucket(0xB2).is_empty());
    }

    #[test]
    fn test_chain_synthesizes_starts() {
        let index = small_index();
        let bei = &index.ranges()[2];
        assert_eq!((bei.start(), bei.end()), (0xB1AD, 0xB1BB));
        let ben = &index.ranges()[3];
        assert_eq!((ben.start(), ben.end()), (0xB1BC, 0xB1BF));
    }

    #[test]
    fn test_lookup_boundaries() {
        let index = small_index();
        assert_eq!(index.lookup_code(0xB0A1), Some("a"));
        assert_eq!(index.lookup_code(0xB0A2), Some("a"));
        assert_eq!(index.lookup_code(0xB0A3), None);
        assert_eq!(index.lookup_code(0xB0FA), Some("bao"));
        assert_eq!(index.lookup_code(0xB1A1), Some("bao"));
        assert_eq!(index.lookup_code(0xB1AC), Some("bao"));
        assert_eq!(index.lookup_code(0xB1AD), Some("bei"));
        assert_eq!(index.lookup_code(0xB1BB), Some("bei"));
        assert_eq!(index.lookup_code(0xB1BC), Some("ben"));
        assert_eq!(index.lookup_code(0xB1C0), None);
    }

    #[test]
    fn test_span_guard() {
        let index = small_index();
        // "bao" 覆盖 0xB140，但低位 0x40 不在汉字区
        assert_eq!(index.lookup_code(0xB140), None);
        assert_eq!(index.lookup_code(0xB0FF), None);
        assert_eq!(index.lookup_code(0xFFFF), None);
    }

    #[test]
    fn test_first_registered_wins() {
        let mut b = RangeIndex::builder(Strictness::Strict);
        b.register("ban", 0xB0DF, 0xB0ED).unwrap();
        b.register("bang", 0xB0EC, 0xB0F9).unwrap();
        let index = b.build();
        assert_eq!(index.lookup_code(0xB0EC), Some("ban"));
        assert_eq!(index.lookup_code(0xB0ED), Some("ban"));
        assert_eq!(index.lookup_code(0xB0EE), Some("bang"));
    }

    #[test]
    fn test_strict_rejects_inverted() {
        let mut b = RangeIndex::builder(Strictness::Strict);
        let err = b
            .register_chain(("chu", 0xB4A0, 0xB4A6), &[("chuai", 0xB4A7), ("chuan", 0xB4A3)])
            .err();
        assert_eq!(err, Some(TableError::InvertedRange {
            pinyin: "chuan".into(), start: 0xB4A8, end: 0xB4A3,
        }));
    }

    #[test]
    fn test_lenient_skips_inverted() {
        let mut b = RangeIndex::builder(Strictness::Lenient);
        b.register_chain(
            ("chu", 0xB4A0, 0xB4A6),
            &[("chuai", 0xB4A7), ("chuan", 0xB4A3), ("chuang", 0xB4B4)],
        ).unwrap();
        let index = b.build();

        assert_eq!(index.len(), 3);
        assert_eq!(index.defects().len(), 1);
        assert_eq!(index.defects()[0].pinyin(), "chuan");
        // 后续段仍从倒置段的终点 + 1 开始
        assert_eq!(index.lookup_code(0xB4A4), Some("chu"));
        assert_eq!(index.lookup_code(0xB4A8), Some("chuang"));
    }

    #[test]
    fn test_chain_errors() {
        let mut b = RangeIndex::builder(Strictness::Lenient);
        assert_eq!(
            b.continue_chain("a", 0xB0A2).err(),
            Some(TableError::DanglingSegment { pinyin: "a".into() }),
        );
        b.register("z", 0xFFF0, 0xFFFF).unwrap();
        assert_eq!(
            b.continue_chain("zz", 0xFFFF).err(),
            Some(TableError::ChainOverflow { pinyin: "zz".into() }),
        );
    }

    #[test]
    fn test_custom_span() {
        let mut b = RangeIndex::builder(Strictness::Strict)
            .span(CodeSpan::new(0x81..=0xFE, 0x40..=0xFE));
        b.register("x", 0x8140, 0x8150).unwrap();
        let index = b.build();
        assert_eq!(index.lookup_code(0x8145), Some("x"));
    }
}
