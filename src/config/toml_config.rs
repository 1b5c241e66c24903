use crate::config::ApiConfig;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub api: ApiConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，`${VAR}` 由行程環境取值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// 同 `from_toml_str`，但 `${VAR}` 的值由 `lookup` 提供
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_vars(content, lookup)?;

        toml::from_str(&processed_content).map_err(|e| {
            PortfolioError::config("toml_parsing", format!("TOML parsing error: {}", e))
        })
    }

    /// 替換 ${NAME} 佔位符，找不到的保留原樣
    fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| PortfolioError::config("toml_parsing", e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.api.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[api]
base_url = "https://api.example.com"
timeout_seconds = 4

[logging]
verbose = true
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.timeout_seconds, 4);
        assert!(config.verbose());
        assert!(!config.json_logs());
    }

    #[test]
    fn test_timeout_defaults_to_ten_seconds() {
        let config = SiteConfig::from_toml_str(
            r#"
[api]
base_url = "https://api.example.com"
"#,
        )
        .unwrap();

        assert_eq!(config.api.timeout_seconds, 10);
        assert!(config.logging.is_none());
        assert!(!config.verbose());
    }

    #[test]
    fn test_env_var_substitution() {
        let toml_content = r#"
[api]
base_url = "${TEST_PORTFOLIO_BACKEND}"
"#;

        let config = SiteConfig::from_toml_str_with(toml_content, |name| {
            (name == "TEST_PORTFOLIO_BACKEND").then(|| "https://backend.test".to_string())
        })
        .unwrap();
        assert_eq!(config.api.base_url, "https://backend.test");
    }

    #[test]
    fn test_unknown_env_var_left_verbatim() {
        let toml_content = r#"
[api]
base_url = "${TEST_PORTFOLIO_UNSET_VARIABLE}"
"#;

        let config = SiteConfig::from_toml_str_with(toml_content, |_| None).unwrap();
        assert_eq!(config.api.base_url, "${TEST_PORTFOLIO_UNSET_VARIABLE}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let config = SiteConfig::from_toml_str(
            r#"
[api]
base_url = "invalid-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_api_section_is_error() {
        assert!(SiteConfig::from_toml_str("[logging]\nverbose = true\n").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[api]
base_url = "http://localhost:8001"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8001");
    }
}
