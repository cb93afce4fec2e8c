// src/core/config_manager.rs
//! Portal configuration: defaults, then the YAML profile, then environment variables

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::environment::ProfileConfig;
use crate::logging::LogLevel;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_COMPANY_ID: i64 = 1;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub api: ApiConfig,
    pub log_level: LogLevel,
    pub log_file: Option<PathBuf>,
    pub company_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_seconds: u64,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

impl ConfigManager {
    /// Load all configuration layers
    pub fn load(config_path: &Path) -> Result<Self> {
        let profile = ProfileConfig::load(config_path)?;
        Self::resolve(profile, |key| std::env::var(key).ok())
    }

    /// Merge a profile with environment overrides looked up through `env`
    pub fn resolve<F>(profile: ProfileConfig, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = env("PORTAL_API_URL")
            .or(profile.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api_key = env("PORTAL_API_KEY").or(profile.api_key).unwrap_or_default();

        let timeout_seconds = match env("PORTAL_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("PORTAL_TIMEOUT_SECS must be a whole number of seconds")?,
            None => profile.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let company_id = match env("PORTAL_COMPANY_ID") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .context("PORTAL_COMPANY_ID must be an integer")?,
            None => profile.company_id.unwrap_or(DEFAULT_COMPANY_ID),
        };

        let log_level = env("PORTAL_LOG_LEVEL")
            .or(profile.log_level)
            .map(|raw| LogLevel::parse(&raw))
            .unwrap_or_default();

        let log_file = env("PORTAL_LOG_FILE")
            .map(PathBuf::from)
            .or(profile.log_file);

        Ok(Self {
            api: ApiConfig::new(base_url, api_key).with_timeout(timeout_seconds),
            log_level,
            log_file,
            company_id,
        })
    }
}
