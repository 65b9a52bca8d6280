//! # 外部区间表
//!
//! 文本格式，每行一段，`#` 开头为注释：
//!
//! ```text
//! a,0xb0a1,0xb0a2     # 三项: 拼音,起点,终点 —— 开始新的一条链
//! ai,0xb0af           # 两项: 拼音,终点 —— 起点 = 上一段终点 + 1
//! ```
//!
//! 数字可写十六进制（`0x` 前缀）或十进制。

use log::info;

use crate::error::TableError;
use crate::range::CodeSpan;
use crate::table::{RangeIndex, Strictness};

/// 解析区间表文本并构建索引
pub fn load_table(text: &str, strictness: Strictness, span: CodeSpan) -> Result<RangeIndex, TableError> {
    let mut builder = RangeIndex::builder(strictness).span(span);
    let mut has_head = false;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        }.trim();
        if line.is_empty() { continue; }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        let pinyin = parts[0];
        if pinyin.is_empty() || !pinyin.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(parse_error(line_no, format!("bad pinyin `{}`", pinyin)));
        }

        match parts.len() {
            3 => {
                let start = parse_code(parts[1], line_no)?;
                let end = parse_code(parts[2], line_no)?;
                builder.register(pinyin, start, end).map_err(|e| at_line(line_no, e))?;
                has_head = true;
            }
            2 => {
                if !has_head {
                    return Err(parse_error(line_no, format!("`{}` has no leading range", pinyin)));
                }
                let end = parse_code(parts[1], line_no)?;
                builder.continue_chain(pinyin, end).map_err(|e| at_line(line_no, e))?;
            }
            n => return Err(parse_error(line_no, format!("expected 2 or 3 fields, got {}", n))),
        }
    }

    let index = builder.build();
    info!("[Loader] {} ranges loaded", index.len());
    Ok(index)
}

fn parse_code(s: &str, line: usize) -> Result<u16, TableError> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse::<u16>(),
    };
    parsed.map_err(|e| parse_error(line, format!("bad codepoint `{}`: {}", s, e)))
}

fn at_line(line: usize, source: TableError) -> TableError {
    TableError::AtLine { line, source: Box::new(source) }
}

fn parse_error(line: usize, reason: String) -> TableError {
    TableError::Parse { line, reason }
}
