//! Applicant intake, status lookup, and admin review.
//!
//! The distinctive logic lives in `id` (application-ID generation) and
//! `service` (the applicant lifecycle); `router` and `views` are thin glue
//! over whatever [`repository::ApplicantStore`] the caller wires in.

pub mod domain;
mod id;
pub mod repository;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    split_list, Applicant, ApplicationId, ApplicationStatus, RecordId, SubmissionForm,
    ValidationError, MESSAGE_MAX_LEN,
};
pub use id::ID_PREFIX;
pub use repository::{ApplicantRecord, ApplicantStore, RepositoryError, StatusUpdate};
pub use router::recruitment_router;
pub use service::{RecruitmentService, RecruitmentServiceError, StatusLookup};
