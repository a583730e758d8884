//! User configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::store::get_app_dir;
use crate::task::Category;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_profile")]
    pub default_profile: String,

    /// Category used by `add` when none is given.
    #[serde(default)]
    pub default_category: Category,

    #[serde(default)]
    pub sms: SmsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: default_profile(),
            default_category: Category::default(),
            sms: SmsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsConfig {
    /// Simulated inbox number shown by `wl sms --number`.
    #[serde(default = "default_phone_number")]
    pub phone_number: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            phone_number: default_phone_number(),
        }
    }
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_phone_number() -> String {
    "+1 (555) 123-TODO".to_string()
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
