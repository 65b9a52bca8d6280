//! # 字符 ⇄ GBK 码位
//!
//! 只处理 GBK 双字节字符。单字节（ASCII）和 GBK 无法表示的字符一律视为查不到。

use encoding_rs::GBK;

use crate::range::Codepoint;

/// 取输入的第一个字符，转为 GBK 双字节码位
pub fn decode_codepoint(word: &str) -> Option<Codepoint> {
    word.chars().next().and_then(decode_char)
}

pub fn decode_char(ch: char) -> Option<Codepoint> {
    let mut buf = [0u8; 4];
    let (bytes, _, had_errors) = GBK.encode(ch.encode_utf8(&mut buf));
    // 无法映射的字符会被替换成 "&#NNNN;"
    if had_errors {
        return None;
    }
    match &*bytes {
        [high, low] => Some(Codepoint::new(*high, *low)),
        _ => None,
    }
}

/// 码位 → 字符；不是合法 GBK 双字节序列时返回 None
pub fn encode_codepoint(cp: Codepoint) -> Option<char> {
    let bytes = [cp.high, cp.low];
    let (text, had_errors) = GBK.decode_without_bom_handling(&bytes);
    if had_errors {
        return None;
    }
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
