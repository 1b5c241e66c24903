use crate::domain::model::{
    ContactRecord, ContactSubmission, DeleteConfirmation, HealthStatus, Project, ProjectCategory,
    ProjectDraft, ProjectUpdate,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 後端 `/api` 的所有操作。表單與專案清單只透過這個 trait 存取網路
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<ContactRecord>;
    async fn list_contacts(&self) -> Result<Vec<ContactRecord>>;
    async fn get_contact(&self, id: &str) -> Result<ContactRecord>;

    async fn list_projects(&self) -> Result<Vec<Project>>;
    async fn get_project(&self, id: &str) -> Result<Project>;
    async fn list_projects_by_category(&self, category: &ProjectCategory) -> Result<Vec<Project>>;
    async fn create_project(&self, draft: &ProjectDraft) -> Result<Project>;
    async fn update_project(&self, id: &str, update: &ProjectUpdate) -> Result<Project>;
    async fn delete_project(&self, id: &str) -> Result<DeleteConfirmation>;

    async fn health_check(&self) -> Result<HealthStatus>;
}
