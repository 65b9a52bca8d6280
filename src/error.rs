// 区间表构建错误

use thiserror::Error;

/// 区间表构建时的编写错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// 区间终点在起点之前（链式登记时前后边界写反）
    #[error("inverted range `{pinyin}`: end 0x{end:04X} < start 0x{start:04X}")]
    InvertedRange { pinyin: String, start: u16, end: u16 },

    /// 上一段终点已是 0xFFFF，下一段起点无法推算
    #[error("chain overflow after 0xFFFF at `{pinyin}`")]
    ChainOverflow { pinyin: String },

    /// 链式登记的后续段之前没有首段
    #[error("chain segment `{pinyin}` has no leading range")]
    DanglingSegment { pinyin: String },

    /// 外部区间表中某一行登记失败
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<TableError>,
    },

    /// 外部区间表文本格式错误
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
