//! Calculator configuration read from `ssgs-calc.toml`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "ssgs-calc.toml";
/// Environment variable that overrides the config path.
pub const CONFIG_PATH_ENV: &str = "SSGS_CALC_CONFIG";

/// Calculator configuration (TOML).
///
/// Every field is optional. An empty or missing file reproduces the
/// interactive defaults: prompts retry until the user types something valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CalcConfig {
    /// Cap on attempts per prompt. Unset means retry indefinitely.
    pub max_attempts: Option<u32>,
}

impl CalcConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == Some(0) {
            return Err(anyhow!("max_attempts must be > 0 when set"));
        }
        Ok(())
    }
}

/// Resolve the config path: `SSGS_CALC_CONFIG` if set, otherwise
/// `ssgs-calc.toml` under `cwd`.
pub fn config_path(cwd: &Path) -> PathBuf {
    match env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => cwd.join(CONFIG_FILE_NAME),
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CalcConfig::default()`.
pub fn load_config(path: &Path) -> Result<CalcConfig> {
    if !path.exists() {
        return Ok(CalcConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CalcConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
