use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_language")]
    pub default_language: String,

    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|e| anyhow!("Invalid or missing environmental variable: {}", e))?;

        if config.default_language.trim().is_empty() {
            return Err(anyhow!("DEFAULT_LANGUAGE cannot be empty"));
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
