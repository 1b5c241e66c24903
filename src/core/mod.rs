pub mod contact_form;
pub mod projects;

pub use crate::domain::model::{ContactRecord, ContactSubmission, Project, ProjectCategory};
pub use crate::domain::ports::PortfolioApi;
pub use crate::utils::error::Result;
