use crate::domain::model::{ContactRecord, ContactSubmission};
use crate::domain::ports::PortfolioApi;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::Validate;
use std::time::Duration;
use tokio::time::Instant;

/// 成功訊息顯示多久後自動回到 Idle
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(5);
pub const GENERIC_SUBMIT_ERROR: &str = "Failed to send message. Please try again.";
pub const SUCCESS_MESSAGE: &str = "Message Sent! Thank you for reaching out. I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// 聯絡表單的狀態機
///
/// ```text
/// Idle --submit (valid)--> Submitting --ok--> Success --5s--> Idle
///                          Submitting --err--> Error --edit--> Idle
/// Idle/Error --submit (invalid)--> Error
/// ```
///
/// `submit` 會在等待網路回應期間持有 `&mut self`。事件驅動的 UI 若需要在請求
/// 進行中讀取狀態，可改用 `begin_submit` / `finish_submit` 自行呼叫 API。
pub struct ContactForm<A: PortfolioApi> {
    api: A,
    fields: ContactSubmission,
    status: SubmissionStatus,
    error_message: Option<String>,
    success_at: Option<Instant>,
    last_submission: Option<ContactRecord>,
}

/// `submit` 的 future 若在等待中被丟棄，把狀態還原成 Idle
struct InFlight<'a> {
    status: &'a mut SubmissionStatus,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed && *self.status == SubmissionStatus::Submitting {
            tracing::debug!("Contact submission dropped while in flight");
            *self.status = SubmissionStatus::Idle;
        }
    }
}

impl<A: PortfolioApi> ContactForm<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            fields: ContactSubmission::default(),
            status: SubmissionStatus::Idle,
            error_message: None,
            success_at: None,
            last_submission: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// 目前應顯示的狀態。成功訊息逾時後即視為 Idle，不需要等 `tick`
    pub fn status(&self) -> SubmissionStatus {
        self.status_at(Instant::now())
    }

    /// 不改變狀態，回傳在 `now` 時應顯示的狀態（考慮成功訊息逾時）
    pub fn status_at(&self, now: Instant) -> SubmissionStatus {
        match (self.status, self.success_at) {
            (SubmissionStatus::Success, Some(at)) if now.duration_since(at) >= SUCCESS_RESET_DELAY => {
                SubmissionStatus::Idle
            }
            (status, _) => status,
        }
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Subject => &self.fields.subject,
            Field::Message => &self.fields.message,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        (self.status() == SubmissionStatus::Success).then_some(SUCCESS_MESSAGE)
    }

    pub fn last_submission(&self) -> Option<&ContactRecord> {
        self.last_submission.as_ref()
    }

    pub fn inputs_enabled(&self) -> bool {
        self.status() != SubmissionStatus::Submitting
    }

    pub fn can_submit(&self) -> bool {
        self.inputs_enabled()
    }

    /// 更新欄位。送出中時輸入被停用，回傳 `false`；Error 狀態下編輯會清掉錯誤
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if !self.inputs_enabled() {
            return false;
        }

        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Subject => self.fields.subject = value,
            Field::Message => self.fields.message = value,
        }

        if self.status == SubmissionStatus::Error {
            self.status = SubmissionStatus::Idle;
            self.error_message = None;
        }
        true
    }

    /// 成功訊息超過 `SUCCESS_RESET_DELAY` 後回到 Idle
    pub fn tick(&mut self, now: Instant) {
        if self.status_at(now) != self.status {
            tracing::debug!("Contact form success message expired");
            self.status = SubmissionStatus::Idle;
            self.success_at = None;
        }
    }

    /// 等到成功訊息逾時（若目前是 Success）
    pub async fn settle(&mut self) {
        if let (SubmissionStatus::Success, Some(at)) = (self.status, self.success_at) {
            tokio::time::sleep_until(at + SUCCESS_RESET_DELAY).await;
            self.tick(Instant::now());
        }
    }

    /// 驗證目前欄位並進入 Submitting；回傳要送出的內容。驗證失敗時不會觸及網路
    pub fn begin_submit(&mut self) -> Result<ContactSubmission> {
        self.tick(Instant::now());

        if self.status == SubmissionStatus::Submitting {
            return Err(PortfolioError::InProgress);
        }

        if let Err(e) = self.fields.validate() {
            tracing::debug!("Contact form rejected locally: {}", e);
            self.status = SubmissionStatus::Error;
            self.error_message = Some(e.user_message());
            self.success_at = None;
            return Err(e);
        }

        self.status = SubmissionStatus::Submitting;
        self.error_message = None;
        self.success_at = None;
        Ok(self.fields.clone())
    }

    /// 套用 API 結果。只有在 Submitting 時才會改變狀態
    pub fn finish_submit(&mut self, outcome: Result<ContactRecord>) -> Result<ContactRecord> {
        if self.status != SubmissionStatus::Submitting {
            tracing::warn!("Ignoring contact submission result: form is {:?}", self.status);
            return outcome;
        }

        match outcome {
            Ok(record) => {
                tracing::info!("✅ Contact message {} sent", record.id);
                self.fields = ContactSubmission::default();
                self.status = SubmissionStatus::Success;
                self.success_at = Some(Instant::now());
                self.last_submission = Some(record.clone());
                Ok(record)
            }
            Err(e) => {
                tracing::warn!("Contact message failed: {}", e);
                let message = e.user_message();
                self.error_message = Some(if message.trim().is_empty() {
                    GENERIC_SUBMIT_ERROR.to_string()
                } else {
                    message
                });
                self.status = SubmissionStatus::Error;
                Err(e)
            }
        }
    }

    pub async fn submit(&mut self) -> Result<ContactRecord> {
        let submission = self.begin_submit()?;

        let mut guard = InFlight {
            status: &mut self.status,
            armed: true,
        };
        let outcome = self.api.submit_contact(&submission).await;
        guard.armed = false;
        drop(guard);

        self.finish_submit(outcome)
    }
}
