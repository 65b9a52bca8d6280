//! # gbk-pinyin 命令行
//!
//! ```text
//! gbk-pinyin [--config FILE] [--code HEX]... [TEXT]...
//! ```
//!
//! 每个字符输出一行 `字<TAB>拼音`，查不到时拼音为 `-`。

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::info;

use gbk_pinyin::{encode_codepoint, Codepoint, Config, RangeIndex};

const USAGE: &str = "usage: gbk-pinyin [--config FILE] [--code HEX]... [TEXT]...";

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    codes: Vec<u16>,
    texts: Vec<String>,
    help: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(raw: I) -> Result<Args> {
    let mut args = Args::default();
    let mut it = raw.into_iter();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => {
                let path = it.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--code" => {
                let raw = it.next().context("--code needs a hex codepoint")?;
                args.codes.push(parse_hex_code(&raw)?);
            }
            "-h" | "--help" => args.help = true,
            s if s.starts_with("--") => bail!("unknown option `{}`", s),
            _ => args.texts.push(arg),
        }
    }
    Ok(args)
}

/// "B0A1" / "0xB0A1" / "0XB0A1"
fn parse_hex_code(raw: &str) -> Result<u16> {
    let hex = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")).unwrap_or(raw);
    u16::from_str_radix(hex, 16).with_context(|| format!("bad codepoint `{}`", raw))
}

/// 显式指定的配置必须存在；默认位置的配置不存在时用默认值
fn load_config(explicit: Option<&PathBuf>) -> Result<Config> {
    match explicit {
        Some(path) => Config::try_load(path)?
            .with_context(|| format!("config {:?} not found", path)),
        None => Ok(Config::try_load(&Config::default_path())?.unwrap_or_default()),
    }
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = load_config(args.config.as_ref())?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log.level.as_str())
    ).init();
    info!("[Main] strict={}, table={:?}", config.table.strict, config.table.path);

    let index = config.build_index()?;
    for line in lookup_lines(&index, &args) {
        println!("{}", line);
    }
    Ok(())
}

/// 每个查询一行 `字<TAB>拼音`，查不到时为 `-`
fn lookup_lines(index: &RangeIndex, args: &Args) -> Vec<String> {
    let mut lines = Vec::new();

    for &code in &args.codes {
        let cp = Codepoint::from(code);
        let shown = encode_codepoint(cp).map(String::from).unwrap_or_else(|| cp.to_string());
        lines.push(format!("{}\t{}", shown, index.lookup(cp).unwrap_or("-")));
    }

    for text in &args.texts {
        for ch in text.chars() {
            let mut buf = [0u8; 4];
            let pinyin = index.get_pinyin(ch.encode_utf8(&mut buf)).unwrap_or("-");
            lines.push(format!("{}\t{}", ch, pinyin));
        }
    }
    lines
}
