use anyhow::{Context, Result};
use bankstmt_core::BankType;
use bankstmt_ingest::CodeTable;
use bankstmt_report::{ConvertOptions, ExportFormat, DEFAULT_MAX_INPUT_BYTES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_bankstmt_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertSection,
    /// SCB transaction codes; extend `debit` when a new outflow code shows up
    #[serde(default)]
    pub codes: CodeTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertSection {
    pub bank: BankType,
    pub format: ExportFormat,
    pub max_input_bytes: usize,
}

impl Default for ConvertSection {
    fn default() -> Self {
        Self {
            bank: BankType::Scb,
            format: ExportFormat::Csv,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl Config {
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            max_input_bytes: self.convert.max_input_bytes,
            codes: self.codes.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_bankstmt_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
