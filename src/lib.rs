//! # gbk-pinyin — GBK 汉字拼音查询
//!
//! 将单个汉字的 GBK 双字节码位映射为拼音。
//!
//! ## 结构
//! - 区间表：每个拼音占一段连续码位，按高位字节分桶索引
//! - 查询：字符 → GBK 码位 → 码位区检查 → 桶内顺序扫描
//!
//! ```
//! assert_eq!(gbk_pinyin::get_pinyin("啊"), Some("a"));
//! assert_eq!(gbk_pinyin::get_pinyin("A"), None);
//! ```

pub mod codec;
pub mod config;
pub mod data;
pub mod error;
pub mod loader;
pub mod pinyin;
pub mod range;
pub mod table;

pub use codec::{decode_char, decode_codepoint, encode_codepoint};
pub use config::Config;
pub use error::TableError;
pub use loader::load_table;
pub use pinyin::{build_builtin, get_pinyin, global_index};
pub use range::{CodeSpan, Codepoint, PinyinRange};
pub use table::{RangeIndex, RangeIndexBuilder, Strictness};
