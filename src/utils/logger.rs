use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 終端機閱讀用
    Compact,
    /// 一行一個 JSON 物件，給日誌平台
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// `RUST_LOG` 未設定時使用。verbose 會一併打開 reqwest 的請求紀錄
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "portfolio_site=debug,reqwest=debug,warn"
    } else {
        "portfolio_site=info,warn"
    }
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // verbose 時顯示 target，分得出是 ApiClient 還是 reqwest 在說話
    let layer = fmt::layer()
        .with_target(verbose)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}
