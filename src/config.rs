use crate::error::{KongError, Result};
use reqwest::header::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KongConfig {
    pub admin: AdminConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    // Sent on every request; per-call headers with the same name win
    pub default_headers: BTreeMap<String, String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            timeout_secs: 10,
            user_agent: format!("kong-admin/{}", env!("CARGO_PKG_VERSION")),
            default_headers: BTreeMap::new(),
        }
    }
}

impl Default for KongConfig {
    fn default() -> Self {
        Self {
            admin: AdminConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AdminConfig {
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(KongError::config_error(format!(
                "Admin base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(KongError::config_error("Admin timeout must be non-zero"));
        }
        HeaderValue::from_str(&self.user_agent).map_err(|_| {
            KongError::config_error(format!("Invalid user agent '{}'", self.user_agent))
        })?;
        for (name, value) in &self.default_headers {
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                KongError::config_error(format!("Invalid default header name '{}'", name))
            })?;
            HeaderValue::from_str(value).map_err(|_| {
                KongError::config_error(format!("Invalid value for default header '{}'", name))
            })?;
        }
        Ok(())
    }
}

impl KongConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        config.admin.validate()?;
        Ok(config)
    }

    // KONG_ADMIN_CONFIG names a TOML file to start from; env vars still win
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var("KONG_ADMIN_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        config.apply_env()?;
        config.admin.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("KONG_ADMIN_URL") {
            if !url.trim().is_empty() {
                self.admin.base_url = url.trim().to_string();
            }
        }

        if let Ok(timeout) = std::env::var("KONG_ADMIN_TIMEOUT_SECS") {
            self.admin.timeout_secs = timeout
                .trim()
                .parse()
                .map_err(|_| KongError::config_error("Invalid KONG_ADMIN_TIMEOUT_SECS"))?;
        }

        if let Ok(user_agent) = std::env::var("KONG_ADMIN_USER_AGENT") {
            if !user_agent.trim().is_empty() {
                self.admin.user_agent = user_agent;
            }
        }

        if let Ok(log_level) = std::env::var("KONG_ADMIN_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(key) = std::env::var("KONG_ADMIN_API_KEY") {
            if !key.trim().is_empty() {
                self.admin
                    .default_headers
                    .insert("apikey".to_string(), key.trim().to_string());
            }
        }

        Ok(())
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| KongError::config_error(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: KongConfig = toml::from_str(content)
            .map_err(|e| KongError::config_error(format!("Failed to parse config file: {}", e)))?;
        config.admin.validate()?;
        Ok(config)
    }
}
