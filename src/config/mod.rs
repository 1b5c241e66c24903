#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const BACKEND_URL_ENV: &str = "PORTFOLIO_BACKEND_URL";
pub const TIMEOUT_ENV: &str = "PORTFOLIO_TIMEOUT_SECONDS";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// API client 的連線設定，由呼叫端在啟動時建立後注入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// 從環境變數讀取；只應在程式啟動時呼叫一次
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 用任意 key → value 來源建立設定，`from_env` 以行程環境為來源
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BACKEND_URL_ENV).ok_or_else(|| {
            PortfolioError::config(
                BACKEND_URL_ENV,
                "environment variable is required",
            )
        })?;

        let timeout_seconds = match lookup(TIMEOUT_ENV) {
            Some(raw) => raw.trim().parse().map_err(|_| {
                PortfolioError::config(TIMEOUT_ENV, format!("not a number: {}", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self {
            base_url,
            timeout_seconds,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// `{base_url}/api`，去掉多餘的結尾斜線
    pub fn api_base(&self) -> String {
        format!("{}/api", self.base_url.trim_end_matches('/'))
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        validate_positive_number("api.timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
