//! # 拼音区间与 GBK 码位
//!
//! 一个拼音区间 = 一段连续的 GBK 双字节码位，共享同一个拼音。
//! 码位 = 高位字节 << 8 | 低位字节。

use std::fmt;
use std::ops::RangeInclusive;

// ============================================================
// 码位
// ============================================================

/// GBK 双字节码位
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codepoint {
    pub high: u8,
    pub low: u8,
}

impl Codepoint {
    pub const fn new(high: u8, low: u8) -> Self {
        Self { high, low }
    }

    /// 16 位无符号码位值
    pub const fn value(self) -> u16 {
        ((self.high as u16) << 8) | self.low as u16
    }
}

impl From<u16> for Codepoint {
    fn from(code: u16) -> Self {
        Self { high: (code >> 8) as u8, low: (code & 0xFF) as u8 }
    }
}

impl From<Codepoint> for u16 {
    fn from(cp: Codepoint) -> Self { cp.value() }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.value())
    }
}

// ============================================================
// 支持的码位区
// ============================================================

/// 查询前的码位区检查：高位与低位都必须落在区内
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeSpan {
    pub high: RangeInclusive<u8>,
    pub low: RangeInclusive<u8>,
}

/// GB2312 一、二级汉字区的高位（0xB0 行是首个汉字行）
pub const DEFAULT_HIGH: RangeInclusive<u8> = 0xB0..=0xD7;
/// GB2312 汉字区的低位
pub const DEFAULT_LOW: RangeInclusive<u8> = 0xA1..=0xFE;

impl Default for CodeSpan {
    fn default() -> Self {
        Self { high: DEFAULT_HIGH, low: DEFAULT_LOW }
    }
}

impl CodeSpan {
    pub fn new(high: RangeInclusive<u8>, low: RangeInclusive<u8>) -> Self {
        Self { high, low }
    }

    pub fn contains(&self, cp: Codepoint) -> bool {
        self.high.contains(&cp.high) && self.low.contains(&cp.low)
    }
}

// ============================================================
// 拼音区间
// ============================================================

/// 闭区间 `[start, end]` 内的所有码位读作同一个拼音
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinyinRange {
    pinyin: String,
    start: u16,
    end: u16,
}

impl PinyinRange {
    pub fn new(pinyin: &str, start: u16, end: u16) -> Self {
        Self { pinyin: pinyin.to_string(), start, end }
    }

    pub fn pinyin(&self) -> &str { &self.pinyin }
    pub fn start(&self) -> u16 { self.start }
    pub fn end(&self) -> u16 { self.end }

    /// `end < start` 的区间永远匹配不到任何码位
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, code: u16) -> bool {
        self.start <= code && code <= self.end
    }

    /// 区间跨越的高位桶: high(start)..=high(end)
    ///
    /// 倒置区间得到空集。
    pub fn high_span(&self) -> RangeInclusive<u8> {
        ((self.start >> 8) as u8)..=((self.end >> 8) as u8)
    }
}

impl fmt::Display for PinyinRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [0x{:04X}, 0x{:04X}]", self.pinyin, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoint_value() {
        let cp = Codepoint::new(0xB0, 0xA1);
        assert_eq!(cp.value(), 0xB0A1);
        assert_eq!(Codepoint::from(0xD7F9), Codepoint::new(0xD7, 0xF9));
        assert_eq!(cp.to_string(), "0xB0A1");
    }

    #[test]
    fn test_high_span() {
        let bao = PinyinRange::new("bao", 0xB0FA, 0xB1AC);
        assert_eq!(bao.high_span(), 0xB0..=0xB1);

        let a = PinyinRange::new("a", 0xB0A1, 0xB0A2);
        assert_eq!(a.high_span().count(), 1);
    }

    #[test]
    fn test_inverted_range() {
        let r = PinyinRange::new("chuan", 0xB4A8, 0xB4A3);
        assert!(r.is_inverted());
        assert!(!r.contains(0xB4A8));
        assert!(!r.contains(0xB4A3));
    }

    #[test]
    fn test_span() {
        let span = CodeSpan::default();
        assert!(span.contains(Codepoint::new(0xB0, 0xA1)));
        assert!(span.contains(Codepoint::new(0xD7, 0xFE)));
        assert!(!span.contains(Codepoint::new(0xB1, 0x40)));
        assert!(!span.contains(Codepoint::new(0xD8, 0xA1)));
        assert!(!span.contains(Codepoint::from(0xFFFF)));
    }
}
