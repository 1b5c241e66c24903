use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{is_valid_email, validate_min_trimmed_length, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NAME_TOO_SHORT: &str = "name too short";
pub const INVALID_EMAIL: &str = "invalid email";
pub const SUBJECT_TOO_SHORT: &str = "subject too short";
pub const MESSAGE_TOO_SHORT: &str = "message too short";

/// 聯絡表單送出的內容；只存在於單次送出期間
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl Validate for ContactSubmission {
    /// 依序檢查 name → email → subject → message，遇到第一個錯誤就停
    fn validate(&self) -> Result<()> {
        validate_min_trimmed_length(&self.name, 2, NAME_TOO_SHORT)?;
        if !is_valid_email(&self.email) {
            return Err(PortfolioError::validation(INVALID_EMAIL));
        }
        validate_min_trimmed_length(&self.subject, 5, SUBJECT_TOO_SHORT)?;
        validate_min_trimmed_length(&self.message, 10, MESSAGE_TOO_SHORT)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default = "default_contact_status")]
    pub status: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

fn default_contact_status() -> String {
    "new".to_string()
}

/// 後端用字串 id，內建範例資料用數字，兩者都接受
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Number(n) => write!(f, "{}", n),
            ProjectId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProjectId {
    fn from(value: u64) -> Self {
        ProjectId::Number(value)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        ProjectId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectCategory {
    WebDevelopment,
    Programming,
    DataScience,
    Database,
    /// 後端可能回傳新分類；保留原字串而不是讓整份清單解析失敗
    Other(String),
}

impl ProjectCategory {
    pub const KNOWN: [ProjectCategory; 4] = [
        ProjectCategory::WebDevelopment,
        ProjectCategory::Programming,
        ProjectCategory::DataScience,
        ProjectCategory::Database,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ProjectCategory::WebDevelopment => "Web Development",
            ProjectCategory::Programming => "Programming",
            ProjectCategory::DataScience => "Data Science",
            ProjectCategory::Database => "Database",
            ProjectCategory::Other(name) => name,
        }
    }
}

impl From<String> for ProjectCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Web Development" => ProjectCategory::WebDevelopment,
            "Programming" => ProjectCategory::Programming,
            "Data Science" => ProjectCategory::DataScience,
            "Database" => ProjectCategory::Database,
            _ => ProjectCategory::Other(value),
        }
    }
}

impl From<&str> for ProjectCategory {
    fn from(value: &str) -> Self {
        ProjectCategory::from(value.to_string())
    }
}

impl From<ProjectCategory> for String {
    fn from(value: ProjectCategory) -> Self {
        match value {
            ProjectCategory::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

/// 卡片顏色 token（Tailwind class 名稱）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    #[serde(default = "default_bg_color")]
    pub bg_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
}

fn default_bg_color() -> String {
    "bg-blue-100".to_string()
}

fn default_text_color() -> String {
    "text-blue-900".to_string()
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            bg_color: default_bg_color(),
            text_color: default_text_color(),
        }
    }
}

impl Presentation {
    pub fn new(bg_color: impl Into<String>, text_color: impl Into<String>) -> Self {
        Self {
            bg_color: bg_color.into(),
            text_color: text_color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    #[serde(flatten)]
    pub links: ProjectLinks,
    #[serde(flatten)]
    pub presentation: Presentation,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    #[serde(flatten)]
    pub links: ProjectLinks,
    #[serde(flatten)]
    pub presentation: Presentation,
    #[serde(default)]
    pub featured: bool,
}

/// 部分更新；`None` 的欄位不會出現在 JSON 中
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProjectCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

/// 後端時間戳可能不帶時區（naive UTC），也可能是 RFC 3339
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => super::parse(&raw)
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw))),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn valid_submission() -> ContactSubmission {
        ContactSubmission::new("Al", "a@b.co", "Hello there", "This is a message")
    }

    fn validation_message(submission: &ContactSubmission) -> Option<String> {
        submission.validate().err().map(|e| e.user_message())
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(valid_submission().validate().is_ok());
    }

    #[test]
    fn test_name_rule() {
        for name in ["", " ", "A", "  B  "] {
            let submission = ContactSubmission {
                name: name.to_string(),
                ..valid_submission()
            };
            assert_eq!(validation_message(&submission).as_deref(), Some(NAME_TOO_SHORT));
        }
    }

    #[test]
    fn test_email_rule() {
        for email in ["", "plainaddress", "user@domain", "user@@", "us er@b.co"] {
            let submission = ContactSubmission {
                email: email.to_string(),
                ..valid_submission()
            };
            assert_eq!(
                validation_message(&submission).as_deref(),
                Some(INVALID_EMAIL),
                "email {:?} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_subject_and_message_rules() {
        let short_subject = ContactSubmission {
            subject: " Hey ".to_string(),
            ..valid_submission()
        };
        assert_eq!(validation_message(&short_subject).as_deref(), Some(SUBJECT_TOO_SHORT));

        let short_message = ContactSubmission {
            message: "Too short".to_string(),
            ..valid_submission()
        };
        assert_eq!(validation_message(&short_message).as_deref(), Some(MESSAGE_TOO_SHORT));
    }

    #[test]
    fn test_rules_checked_in_order() {
        // every field invalid: name wins
        let submission = ContactSubmission::new("", "bad", "x", "y");
        assert_eq!(validation_message(&submission).as_deref(), Some(NAME_TOO_SHORT));

        // name fixed: email is next
        let submission = ContactSubmission::new("Alice", "bad", "x", "y");
        assert_eq!(validation_message(&submission).as_deref(), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_submission_serializes_four_fields() {
        let json = serde_json::to_value(valid_submission()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Al",
                "email": "a@b.co",
                "subject": "Hello there",
                "message": "This is a message"
            })
        );
    }

    #[test]
    fn test_contact_record_accepts_naive_timestamp() {
        let record: ContactRecord = serde_json::from_value(serde_json::json!({
            "id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "name": "Al",
            "email": "a@b.co",
            "subject": "Hello there",
            "message": "This is a message",
            "createdAt": "2024-03-05T10:20:30.123456"
        }))
        .unwrap();

        assert_eq!(record.status, "new");
        assert_eq!(record.created_at.year(), 2024);
        assert_eq!(record.created_at.hour(), 10);
    }

    #[test]
    fn test_project_wire_format() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": "abc123",
            "title": "Portfolio",
            "description": "A responsive portfolio site",
            "technologies": ["HTML", "CSS"],
            "category": "Web Development",
            "bgColor": "bg-green-100",
            "textColor": "text-green-900",
            "githubUrl": "https://github.com/example/portfolio",
            "featured": true,
            "createdAt": "2024-03-05T10:20:30Z",
            "updatedAt": "2024-03-06T10:20:30"
        }))
        .unwrap();

        assert_eq!(project.id, ProjectId::from("abc123"));
        assert_eq!(project.category, ProjectCategory::WebDevelopment);
        assert_eq!(
            project.links.github_url.as_deref(),
            Some("https://github.com/example/portfolio")
        );
        assert_eq!(project.links.live_url, None);
        assert_eq!(project.presentation.bg_color, "bg-green-100");
        assert!(project.featured);
        assert!(project.updated_at.is_some());
    }

    #[test]
    fn test_project_defaults_and_unknown_category() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Robot",
            "description": "Line follower",
            "category": "Robotics"
        }))
        .unwrap();

        assert_eq!(project.id, ProjectId::Number(7));
        assert_eq!(project.category, ProjectCategory::Other("Robotics".to_string()));
        assert_eq!(project.presentation, Presentation::default());
        assert!(project.technologies.is_empty());
        assert!(!project.featured);
    }

    #[test]
    fn test_project_update_omits_unset_fields() {
        let update = ProjectUpdate {
            title: Some("New title".to_string()),
            featured: Some(true),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(update).unwrap(),
            serde_json::json!({"title": "New title", "featured": true})
        );
    }

    #[test]
    fn test_category_round_trips_display_name() {
        for category in ProjectCategory::KNOWN {
            let name = category.to_string();
            assert_eq!(ProjectCategory::from(name.as_str()), category);
        }
    }
}
