use crate::config::ApiConfig;
use crate::domain::model::{
    ContactRecord, ContactSubmission, DeleteConfirmation, HealthStatus, Project, ProjectCategory,
    ProjectDraft, ProjectUpdate,
};
use crate::domain::ports::PortfolioApi;
use crate::utils::error::{
    PortfolioError, Result, GENERIC_SERVER_MESSAGE, NETWORK_ERROR_MESSAGE, REQUEST_FAILED_MESSAGE,
};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

/// 對後端 `/api` 的唯一出口。base URL 在建構時決定，之後不再讀取環境
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    api_base: Url,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let api_base = Url::parse(&config.api_base())
            .map_err(|e| PortfolioError::config("api.base_url", e.to_string()))?;
        if api_base.cannot_be_a_base() {
            return Err(PortfolioError::config(
                "api.base_url",
                "URL cannot be used as a base",
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| PortfolioError::config("api", format!("HTTP client setup failed: {}", e)))?;

        tracing::debug!("API client ready: {} (timeout {:?})", api_base, config.timeout());

        Ok(Self {
            client,
            api_base,
            config,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `{base}/api/{segments...}`，每個片段都會做 percent-encoding
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| request_failed())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        Ok(self.client.request(method, url))
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder.build().map_err(|e| {
            tracing::error!("❌ Could not build request: {}", e);
            request_failed()
        })?;

        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!("📡 {} {}", method, url);

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                let err = normalize_send_error(&e);
                tracing::error!("❌ {} {} failed: {} ({})", method, url, err, e);
                return Err(err);
            }
        };

        let status = response.status();
        tracing::debug!("📡 {} {} -> {}", method, url, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = PortfolioError::Server {
                status: status.as_u16(),
                message: server_error_message(&body),
            };
            tracing::error!("❌ {} {} failed: {}", method, url, err);
            return Err(err);
        }

        response.json::<T>().await.map_err(|e| {
            let err = normalize_body_error(&e);
            tracing::error!("❌ {} {} returned an unreadable body: {} ({})", method, url, err, e);
            err
        })
    }
}

fn request_failed() -> PortfolioError {
    PortfolioError::Request {
        message: REQUEST_FAILED_MESSAGE.to_string(),
    }
}

fn network_error() -> PortfolioError {
    PortfolioError::Transport {
        message: NETWORK_ERROR_MESSAGE.to_string(),
    }
}

/// 建構失敗 → Request；已送出但沒有回應（逾時、連線失敗）→ Transport
fn normalize_send_error(e: &reqwest::Error) -> PortfolioError {
    if e.is_builder() {
        request_failed()
    } else {
        network_error()
    }
}

fn normalize_body_error(e: &reqwest::Error) -> PortfolioError {
    if e.is_timeout() {
        network_error()
    } else {
        request_failed()
    }
}

/// 取錯誤回應中的 `detail` 字串，沒有就用通用訊息
pub fn server_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .filter(|detail| !detail.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string())
}

#[async_trait]
impl PortfolioApi for ApiClient {
    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<ContactRecord> {
        let builder = self.request(Method::POST, &["contact"])?.json(submission);
        self.execute(builder).await
    }

    async fn list_contacts(&self) -> Result<Vec<ContactRecord>> {
        self.execute(self.request(Method::GET, &["contact"])?).await
    }

    async fn get_contact(&self, id: &str) -> Result<ContactRecord> {
        self.execute(self.request(Method::GET, &["contact", id])?).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.execute(self.request(Method::GET, &["projects"])?).await
    }

    async fn get_project(&self, id: &str) -> Result<Project> {
        self.execute(self.request(Method::GET, &["projects", id])?).await
    }

    async fn list_projects_by_category(&self, category: &ProjectCategory) -> Result<Vec<Project>> {
        let builder = self.request(Method::GET, &["projects", "category", category.as_str()])?;
        self.execute(builder).await
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<Project> {
        let builder = self.request(Method::POST, &["projects"])?.json(draft);
        self.execute(builder).await
    }

    async fn update_project(&self, id: &str, update: &ProjectUpdate) -> Result<Project> {
        let builder = self.request(Method::PUT, &["projects", id])?.json(update);
        self.execute(builder).await
    }

    async fn delete_project(&self, id: &str) -> Result<DeleteConfirmation> {
        self.execute(self.request(Method::DELETE, &["projects", id])?).await
    }

    async fn health_check(&self) -> Result<HealthStatus> {
        // 等同 `{base}/api/`
        self.execute(self.request(Method::GET, &[""])?).await
    }
}
