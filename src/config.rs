//! # 配置管理
//!
//! 从 `config.toml` 加载配置（默认在 exe 同目录）。
//! 文件不存在时使用默认值。

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::loader::load_table;
use crate::pinyin::build_builtin;
use crate::range::{CodeSpan, DEFAULT_HIGH, DEFAULT_LOW};
use crate::table::{RangeIndex, Strictness};

/// 顶层配置
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub span: SpanConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 区间表配置
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TableConfig {
    /// 遇到倒置区间时拒绝构建
    #[serde(default)]
    pub strict: bool,
    /// 外部区间表，不填则用内置表
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// 支持的码位区 [起, 止]
#[derive(Debug, Deserialize, Clone)]
pub struct SpanConfig {
    #[serde(default = "default_high")]
    pub high: [u8; 2],
    #[serde(default = "default_low")]
    pub low: [u8; 2],
}

fn default_high() -> [u8; 2] { [*DEFAULT_HIGH.start(), *DEFAULT_HIGH.end()] }
fn default_low() -> [u8; 2] { [*DEFAULT_LOW.start(), *DEFAULT_LOW.end()] }

impl Default for SpanConfig {
    fn default() -> Self {
        Self { high: default_high(), low: default_low() }
    }
}

impl SpanConfig {
    pub fn to_span(&self) -> CodeSpan {
        CodeSpan::new(self.high[0]..=self.high[1], self.low[0]..=self.low[1])
    }
}

/// 日志配置
#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String { "warn".to_string() }

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

impl Config {
    /// 读取配置文件：文件不存在返回 Ok(None)，读取或解析失败返回 Err
    pub fn try_load(path: &Path) -> Result<Option<Self>> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("reading {:?}", path)),
        };
        let cfg = Self::from_toml(&text).with_context(|| format!("parsing {:?}", path))?;
        info!("[Config] loaded {:?}: strict={}, table={:?}", path, cfg.table.strict, cfg.table.path);
        Ok(Some(cfg))
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(text)
    }

    /// exe 同目录的 config.toml
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join("config.toml")))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    pub fn strictness(&self) -> Strictness {
        if self.table.strict { Strictness::Strict } else { Strictness::Lenient }
    }

    /// 按配置构建索引
    pub fn build_index(&self) -> Result<RangeIndex> {
        let span = self.span.to_span();
        match &self.table.path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading table {:?}", path))?;
                load_table(&text, self.strictness(), span)
                    .with_context(|| format!("loading table {:?}", path))
            }
            None => build_builtin(self.strictness(), span).context("building builtin table"),
        }
    }
}
