//! # 内置拼音区间表
//!
//! GB2312 一级汉字按拼音排序，所以每个拼音占据一段连续码位。
//! 表中只需写出每段的终点，起点由上一段终点 + 1 推出。
//!
//! 数据逐字照录原表，其中已知的编写问题保持原样：
//! - "ao" 重复登记了两次（无影响，先登记者命中）
//! - "ban" 与 "bang" 在 0xB0EC..=0xB0ED 重叠（"ban" 命中）
//! - "chuan" 的终点 0xB4A3 小于推算出的起点 0xB4A8，是一个倒置区间
//!
//! 收录范围止于 "kao"（0xBFBF），其后的码位查不到拼音。

/// 独立登记的区间 (拼音, 起点, 终点)
pub const BUILTIN_TRIPLES: &[(&str, u16, u16)] = &[
    ("a", 0xB0A1, 0xB0A2),
    ("ai", 0xB0A3, 0xB0AF),
    ("an", 0xB0B0, 0xB0B8),
    ("ang", 0xB0B9, 0xB0BB),
    ("ao", 0xB0BC, 0xB0C4),
    ("ao", 0xB0BC, 0xB0C4),
    ("ba", 0xB0C5, 0xB0D6),
    ("bai", 0xB0D7, 0xB0DE),
    ("ban", 0xB0DF, 0xB0ED),
    ("bang", 0xB0EC, 0xB0F9),
    ("bao", 0xB0FA, 0xB1AC),
    ("bei", 0xB1AD, 0xB1BB),
    ("ben", 0xB1BC, 0xB1BF),
    ("beng", 0xB1C0, 0xB1C5),
    ("bi", 0xB1C6, 0xB1DD),
];

/// 链式登记的首段
pub const BUILTIN_CHAIN_HEAD: (&str, u16, u16) = ("bian", 0xB1DE, 0xB1E9);

/// 链式登记的后续段 (拼音, 终点)
pub const BUILTIN_CHAIN: &[(&str, u16)] = &[
    ("biao", 0xB1ED), ("bie", 0xB1F1), ("bin", 0xB1F7), ("bing", 0xB2A2),
    ("bo", 0xB2B5), ("bu", 0xB2C0), ("ca", 0xB2C1), ("cai", 0xB2CC),
    ("can", 0xB2D3), ("cang", 0xB2D9), ("cao", 0xB2DD), ("ce", 0xB2E2),
    ("ceng", 0xB2E4), ("cha", 0xB2EF), ("chai", 0xB2F2), ("chan", 0xB2FC),
    ("chang", 0xB3AB), ("chao", 0xB3B4), ("che", 0xB3BA), ("chen", 0xB3C4),
    ("cheng", 0xB3D3), ("chi", 0xB3E3), ("chong", 0xB3E8), ("chou", 0xB3F4),
    ("chu", 0xB4A6), ("chuai", 0xB4A7), ("chuan", 0xB4A3), ("chuang", 0xB4B4),
    ("chui", 0xB4B9), ("chun", 0xB4C0), ("chuo", 0xB4C2), ("ci", 0xB4CE),
    ("cong", 0xB4D4), ("cou", 0xB4D9), ("cuan", 0xB4DC), ("cui", 0xB4E4),
    ("cun", 0xB4E7), ("cuo", 0xB4ED), ("da", 0xB4F3), ("dai", 0xB5A2),
    ("dan", 0xB5B0), ("dang", 0xB5B5), ("dao", 0xB5C1), ("de", 0xB5C4),
    ("deng", 0xB5CB), ("di", 0xB5DE), ("dian", 0xB5EE), ("diao", 0xB5F7),
    ("die", 0xB5FE), ("ding", 0xB6A9), ("diu", 0xB6AA), ("dong", 0xB6B4),
    ("dou", 0xB6BC), ("du", 0xB6CA), ("duan", 0xB6D0), ("dui", 0xB6D4),
    ("dun", 0xB6DD), ("duo", 0xB6E9), ("e", 0xB6F6), ("en", 0xB6F7),
    ("er", 0xB7A1), ("fa", 0xB7A9), ("fan", 0xB7BA), ("fang", 0xB7C5),
    ("fei", 0xB7D1), ("fen", 0xB7E0), ("feng", 0xB7EF), ("fo", 0xB7F0),
    ("fou", 0xB7F1), ("fu", 0xB8C0), ("ga", 0xB8C2), ("gai", 0xB8C8),
    ("gan", 0xB8D3), ("gang", 0xB8DC), ("gao", 0xB8E6), ("ge", 0xB8F7),
    ("gei", 0xB8F8), ("gen", 0xB8FA), ("geng", 0xB9A3), ("gong", 0xB9B2),
    ("gou", 0xB9BB), ("gu", 0xB9CD), ("gua", 0xB9D3), ("guai", 0xB9D7),
    ("guan", 0xB9E1), ("guang", 0xB9E4), ("gui", 0xB9F4), ("gun", 0xB9F7),
    ("guo", 0xB9FD), ("ha", 0xB9FE), ("hai", 0xBAA7), ("han", 0xBABA),
    ("hang", 0xBABD), ("hao", 0xBAC6), ("he", 0xBAD8), ("hei", 0xBADA),
    ("hen", 0xBADE), ("heng", 0xBAE3), ("hong", 0xBAEC), ("hou", 0xBAF3),
    ("hu", 0xBBA7), ("hua", 0xBBB0), ("huai", 0xBBB5), ("huan", 0xBBC3),
    ("huang", 0xBBD1), ("hui", 0xBBE6), ("hun", 0xBBEC), ("huo", 0xBBF6),
    ("ji", 0xBCCD), ("jia", 0xBCDE), ("jian", 0xBDA8), ("jiang", 0xBDB5),
    ("jiao", 0xBDD1), ("jie", 0xBDEC), ("jin", 0xBEA3), ("jing", 0xBEBB),
    ("jiong", 0xBEBD), ("jiu", 0xBECE), ("ju", 0xBEE7), ("juan", 0xBEEE),
    ("jue", 0xBEF8), ("jun", 0xBFA5), ("ka", 0xBFA9), ("kai", 0xBFAE),
    ("kan", 0xBFB4), ("kang", 0xBFBB), ("kao", 0xBFBF),
];
