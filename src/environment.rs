// src/environment.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One profile section of the portal YAML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfileConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub log_level: Option<String>,
    pub company_id: Option<i64>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: ProfileConfig,
    #[serde(default)]
    production: ProfileConfig,
}

impl ProfileConfig {
    /// Load the profile for the current environment; a missing file yields an empty profile
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let environment = Self::get_environment();
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_yaml(&content, &environment)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile = serde_yaml::from_str(content)?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    /// `PORTAL_ENV`, then `ENVIRONMENT`, else `local`
    pub fn get_environment() -> String {
        Self::environment_from(|key| std::env::var(key).ok())
    }

    fn environment_from<F>(env: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        env("PORTAL_ENV")
            .or_else(|| env("ENVIRONMENT"))
            .unwrap_or_else(|| "local".to_string())
    }
}
