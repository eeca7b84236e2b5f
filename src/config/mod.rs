#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{Result, WireError};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_proxy_url, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_TIMEOUT_SECONDS: u64 = 3600;

/// Bean configuration loaded from TOML. Every table and field is optional;
/// an empty file yields a default-configured HTTP client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireConfig {
    pub http_client: HttpClientConfig,
    pub greeting: GreetingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    pub timeout_seconds: Option<u64>,
    pub connect_timeout_seconds: Option<u64>,
    pub pool_max_idle_per_host: Option<usize>,
    pub user_agent: Option<String>,
    pub proxy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub default_name: Option<String>,
}

impl WireConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WireError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROXY_URL})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WireError::ConfigParseError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn default_name(&self) -> Option<&str> {
        self.greeting.default_name.as_deref()
    }
}

impl Validate for HttpClientConfig {
    fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout_seconds {
            validate_range(
                "http_client.timeout_seconds",
                timeout,
                1,
                MAX_TIMEOUT_SECONDS,
            )?;
        }

        if let Some(timeout) = self.connect_timeout_seconds {
            validate_range(
                "http_client.connect_timeout_seconds",
                timeout,
                1,
                MAX_TIMEOUT_SECONDS,
            )?;
        }

        if let Some(user_agent) = &self.user_agent {
            validate_non_empty_string("http_client.user_agent", user_agent)?;
        }

        if let Some(proxy) = &self.proxy {
            validate_proxy_url("http_client.proxy", proxy)?;
        }

        Ok(())
    }
}

impl Validate for WireConfig {
    fn validate(&self) -> Result<()> {
        self.http_client.validate()
    }
}
