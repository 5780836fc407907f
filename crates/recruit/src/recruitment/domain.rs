use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Human-shareable identifier handed to the applicant at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Store-assigned internal identifier. Admin status updates key on this,
/// not on the application ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

/// Review status tracked for every applicant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Parse an admin-supplied status value. Only the three exact labels
    /// are accepted; anything else is rejected before touching the store.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Pending" => Some(ApplicationStatus::Pending),
            "Accepted" => Some(ApplicationStatus::Accepted),
            "Rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }
}

/// Raw submission exactly as received from the recruitment form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

pub const MESSAGE_MAX_LEN: usize = 1000;

/// An applicant as persisted: normalized fields plus lifecycle metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub application_id: ApplicationId,
    pub name: String,
    pub email: String,
    pub department: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub role: String,
    pub message: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

impl Applicant {
    /// Validate and normalize a raw form into a persistable applicant.
    ///
    /// `name` and `email` must be non-empty after trimming; `email` is
    /// lowercased; `skills`/`interests` are split on commas with empty
    /// entries dropped. The application ID and `applied_at` are fixed
    /// here and never change afterwards.
    pub fn from_form(
        form: SubmissionForm,
        application_id: ApplicationId,
        applied_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = form.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let email = form.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }

        let message = form.message.unwrap_or_default();
        if message.chars().count() > MESSAGE_MAX_LEN {
            return Err(ValidationError::MessageTooLong {
                limit: MESSAGE_MAX_LEN,
                length: message.chars().count(),
            });
        }

        Ok(Self {
            application_id,
            name,
            email,
            department: form.department.unwrap_or_default(),
            skills: split_list(form.skills.as_deref().unwrap_or_default()),
            interests: split_list(form.interests.as_deref().unwrap_or_default()),
            role: form.role.unwrap_or_default(),
            message,
            status: ApplicationStatus::Pending,
            applied_at,
        })
    }
}

/// Split a comma-separated field into trimmed, non-empty entries,
/// preserving input order.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rejections raised before a submission reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("message exceeds {limit} characters (got {length})")]
    MessageTooLong { limit: usize, length: usize },
}
