use thiserror::Error;

pub const GENERIC_SERVER_MESSAGE: &str = "An error occurred";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error - please check your connection";
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Request error: {message}")]
    Request { message: String },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("A submission is already in progress")]
    InProgress,

    #[error("Configuration error in {field}: {reason}")]
    Config { field: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Network,
    Server,
    Client,
    Configuration,
}

impl PortfolioError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 顯示給使用者的訊息（表單內嵌錯誤區）
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Transport { message }
            | Self::Server { message, .. }
            | Self::Request { message } => message.clone(),
            Self::Cancelled => "Request was cancelled".to_string(),
            Self::InProgress => "Your message is still being sent".to_string(),
            Self::Config { field, reason } => format!("Invalid configuration for {}: {}", field, reason),
            Self::Io(e) => e.to_string(),
            Self::Serialization(_) => REQUEST_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::Transport { .. } => ErrorCategory::Network,
            Self::Server { .. } => ErrorCategory::Server,
            Self::Request { .. } | Self::Cancelled | Self::InProgress | Self::Serialization(_) => {
                ErrorCategory::Client
            }
            Self::Config { .. } | Self::Io(_) => ErrorCategory::Configuration,
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
