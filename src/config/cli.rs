use crate::config::toml_config::SiteConfig;
use crate::config::ApiConfig;
use crate::utils::error::{PortfolioError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio")]
#[command(about = "Talk to the portfolio backend: projects, contact form, health")]
pub struct CliConfig {
    #[arg(long, env = "PORTFOLIO_BACKEND_URL", help = "Backend base URL (without /api)")]
    pub base_url: Option<String>,

    #[arg(long, help = "TOML config file with an [api] section")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Per-request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON log lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check that the backend is reachable
    Health,
    /// List projects, falling back to the bundled samples
    Projects {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, help = "Print the projects as JSON")]
        json: bool,
    },
    /// Validate and send a contact message
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// Print the bundled profile summary
    Profile,
}

impl CliConfig {
    /// 讀取 `--config` 指定的檔案；沒給路徑時回傳 `None`
    pub fn load_site_config(&self) -> Result<Option<SiteConfig>> {
        self.config.as_ref().map(SiteConfig::from_file).transpose()
    }

    /// 決定 API 設定：設定檔優先，其次 `--base-url`／環境變數
    pub fn resolve_api_config(&self, site: Option<&SiteConfig>) -> Result<ApiConfig> {
        let mut api = match (site, &self.base_url) {
            (Some(site), _) => site.api.clone(),
            (None, Some(base_url)) => ApiConfig::new(base_url.clone()),
            (None, None) => {
                return Err(PortfolioError::config(
                    "base_url",
                    "pass --base-url, --config, or set PORTFOLIO_BACKEND_URL",
                ))
            }
        };

        if let Some(timeout) = self.timeout {
            api.timeout_seconds = timeout;
        }

        Ok(api)
    }
}
