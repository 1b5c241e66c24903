pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::http::ApiClient;
pub use crate::config::{toml_config::SiteConfig, ApiConfig};
pub use crate::core::{
    contact_form::{ContactForm, Field, SubmissionStatus},
    projects::{CategoryFilter, ProjectCatalog, ProjectSource},
};
pub use crate::utils::error::{PortfolioError, Result};
