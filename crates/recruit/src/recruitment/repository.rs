use serde::{Deserialize, Serialize};

use super::domain::{Applicant, ApplicationId, ApplicationStatus, RecordId};

/// A stored applicant together with its store-assigned record id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub id: RecordId,
    pub applicant: Applicant,
}

/// Outcome of a status update: the store reports whether anything matched
/// so the service can treat a missing record as a logged no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusUpdate {
    Applied,
    NoSuchRecord,
}

/// Storage abstraction so the service and router can be exercised in
/// isolation. Uniqueness of `email` and `application_id` is enforced
/// here; the service performs no locking of its own.
pub trait ApplicantStore: Send + Sync {
    /// Persist a new applicant, assigning its record id.
    /// Returns `Conflict` when the email or application ID is already taken.
    fn insert(&self, applicant: Applicant) -> Result<ApplicantRecord, RepositoryError>;

    /// Exact-match lookup by application ID.
    fn find_by_application_id(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<ApplicantRecord>, RepositoryError>;

    /// All records ordered by `applied_at` descending (most recent first).
    fn list_all(&self) -> Result<Vec<ApplicantRecord>, RepositoryError>;

    /// Set the status of the record with the given internal id.
    fn update_status(
        &self,
        id: &RecordId,
        status: ApplicationStatus,
    ) -> Result<StatusUpdate, RepositoryError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record conflicts with an existing applicant")]
    Conflict,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
