use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::domain::{
    Applicant, ApplicationId, ApplicationStatus, RecordId, SubmissionForm, ValidationError,
};
use super::repository::{ApplicantRecord, ApplicantStore, RepositoryError, StatusUpdate};

/// Service composing validation, ID generation, and the applicant store.
pub struct RecruitmentService<S> {
    store: Arc<S>,
}

/// Result of a status check. A miss is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusLookup {
    Found(ApplicantRecord),
    NotFound,
}

impl<S> RecruitmentService<S>
where
    S: ApplicantStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate and persist a new submission, returning the generated
    /// application ID. The record is created with status `Pending`; the
    /// ID is assigned exactly once and never regenerated.
    pub fn submit(
        &self,
        form: SubmissionForm,
    ) -> Result<ApplicationId, RecruitmentServiceError> {
        let applicant = Applicant::from_form(form, ApplicationId::generate(), Utc::now())?;
        let record = self
            .store
            .insert(applicant)
            .map_err(RecruitmentServiceError::Submission)?;
        Ok(record.applicant.application_id)
    }

    /// Look up an applicant by the ID issued at submission time. Input is
    /// trimmed; an unknown or malformed ID yields `NotFound` rather than
    /// an error.
    pub fn check_status(&self, raw_id: &str) -> Result<StatusLookup, RecruitmentServiceError> {
        let id = ApplicationId(raw_id.trim().to_string());
        let record = self
            .store
            .find_by_application_id(&id)
            .map_err(RecruitmentServiceError::Lookup)?;
        Ok(match record {
            Some(record) => StatusLookup::Found(record),
            None => StatusLookup::NotFound,
        })
    }

    /// All applicants, most recent first. No pagination or filtering.
    pub fn list_applicants(&self) -> Result<Vec<ApplicantRecord>, RecruitmentServiceError> {
        self.store
            .list_all()
            .map_err(RecruitmentServiceError::Listing)
    }

    /// Admin action: set the status of a record by its internal id.
    /// A value outside the three known statuses is rejected without
    /// touching the store; an unknown record id is a no-op.
    pub fn update_status(
        &self,
        id: &RecordId,
        raw_status: &str,
    ) -> Result<(), RecruitmentServiceError> {
        let status = ApplicationStatus::parse(raw_status)
            .ok_or_else(|| RecruitmentServiceError::InvalidStatus(raw_status.to_string()))?;

        match self
            .store
            .update_status(id, status)
            .map_err(RecruitmentServiceError::Update)?
        {
            StatusUpdate::Applied => {}
            StatusUpdate::NoSuchRecord => {
                warn!(record_id = id.0, "status update matched no record");
            }
        }
        Ok(())
    }
}

/// Error raised by the recruitment service.
#[derive(Debug, thiserror::Error)]
pub enum RecruitmentServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("submission failed: {0}")]
    Submission(#[source] RepositoryError),
    #[error("status lookup failed: {0}")]
    Lookup(#[source] RepositoryError),
    #[error("applicant listing failed: {0}")]
    Listing(#[source] RepositoryError),
    #[error("invalid status value: {0}")]
    InvalidStatus(String),
    #[error("status update failed: {0}")]
    Update(#[source] RepositoryError),
}
