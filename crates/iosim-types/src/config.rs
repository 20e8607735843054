//! Simulator startup configuration, loaded from TOML.
//!
//! ```toml
//! hostname = "R1"
//! banner = true
//! software_version = "15.1"
//! show_password_prompt = false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::device::DEFAULT_HOSTNAME;
use crate::error::{Result, SimError};
use crate::validate::is_valid_hostname;

/// Environment variable naming a config file when no CLI argument is given.
pub const CONFIG_ENV_VAR: &str = "IOSIM_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Hostname the device boots with; `no hostname` restores it.
    pub hostname: String,
    /// Print the startup banner.
    pub banner: bool,
    /// Version string reported by `show version` and `show running-config`.
    pub software_version: String,
    /// Print a simulated password prompt after `enable`.
    pub show_password_prompt: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            banner: true,
            software_version: "15.1".to_string(),
            show_password_prompt: false,
        }
    }
}

impl SimConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: SimConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if !is_valid_hostname(&self.hostname) {
            return Err(SimError::Config(format!(
                "invalid hostname: {}",
                self.hostname
            )));
        }
        if self.software_version.trim().is_empty() {
            return Err(SimError::Config(
                "software_version must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
