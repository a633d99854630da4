use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub fn bankstmt_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".bankstmt"))
}

pub fn ensure_bankstmt_home() -> Result<PathBuf> {
    let dir = bankstmt_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// `-` (or no path) means stdin.
pub fn read_statement_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("read {}", p.display()))
        }
        _ => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s).context("read stdin")?;
            Ok(s)
        }
    }
}
