use crate::domain::model::{Project, ProjectCategory};
use crate::domain::ports::PortfolioApi;
use crate::domain::sample::fallback_projects;
use crate::utils::error::{PortfolioError, Result};
use tokio_util::sync::CancellationToken;

pub const FALLBACK_NOTICE: &str = "Failed to load projects. Using sample data.";

/// 專案區塊上方的篩選按鈕
pub const FILTER_LABELS: [&str; 5] = [
    "All",
    "Web Development",
    "Programming",
    "Data Science",
    "Database",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(ProjectCategory::from(label.trim()))
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &project.category == category,
        }
    }
}

/// 專案清單：優先使用遠端資料，空清單或失敗時改用內建範例
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
    source: Option<ProjectSource>,
    notice: Option<String>,
}

impl ProjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn source(&self) -> Option<ProjectSource> {
        self.source
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }

    /// 讀取遠端清單。`cancel` 在請求前或請求中被取消時回傳 `Cancelled`，且不修改目前狀態
    pub async fn load<A>(&mut self, api: &A, cancel: &CancellationToken) -> Result<ProjectSource>
    where
        A: PortfolioApi + ?Sized,
    {
        if cancel.is_cancelled() {
            return Err(PortfolioError::Cancelled);
        }

        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Project load cancelled while in flight");
                return Err(PortfolioError::Cancelled);
            }
            result = api.list_projects() => result,
        };

        if cancel.is_cancelled() {
            return Err(PortfolioError::Cancelled);
        }

        let (projects, source, notice) = match fetched {
            Ok(projects) if !projects.is_empty() => {
                tracing::info!("📂 Loaded {} projects from API", projects.len());
                (projects, ProjectSource::Remote, None)
            }
            Ok(_) => {
                tracing::warn!("No projects from API, using sample data");
                (fallback_projects(), ProjectSource::Fallback, None)
            }
            Err(e) => {
                tracing::warn!("Error loading projects, using sample data: {}", e);
                (
                    fallback_projects(),
                    ProjectSource::Fallback,
                    Some(FALLBACK_NOTICE.to_string()),
                )
            }
        };

        self.projects = projects;
        self.source = Some(source);
        self.notice = notice;
        Ok(source)
    }
}
