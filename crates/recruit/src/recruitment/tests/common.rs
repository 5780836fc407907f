use std::sync::{Arc, Mutex};

use axum::response::Response;

use crate::recruitment::domain::{
    Applicant, ApplicationId, ApplicationStatus, RecordId, SubmissionForm,
};
use crate::recruitment::repository::{
    ApplicantRecord, ApplicantStore, RepositoryError, StatusUpdate,
};
use crate::recruitment::router::recruitment_router;
use crate::recruitment::service::RecruitmentService;

pub(super) fn submission(name: &str, email: &str) -> SubmissionForm {
    SubmissionForm {
        name: name.to_string(),
        email: email.to_string(),
        department: Some("Research".to_string()),
        skills: Some("rust, distributed systems".to_string()),
        interests: Some("compilers".to_string()),
        role: Some("Engineer".to_string()),
        message: Some("Looking forward to hearing from you.".to_string()),
    }
}

pub(super) fn build_service() -> (RecruitmentService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = RecruitmentService::new(store.clone());
    (service, store)
}

pub(super) fn router_with_store(store: Arc<MemoryStore>) -> axum::Router {
    recruitment_router(Arc::new(RecruitmentService::new(store)))
}

#[derive(Default)]
pub(super) struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

#[derive(Default)]
struct MemoryStoreInner {
    next_id: u64,
    records: Vec<ApplicantRecord>,
}

impl ApplicantStore for MemoryStore {
    fn insert(&self, applicant: Applicant) -> Result<ApplicantRecord, RepositoryError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let taken = inner.records.iter().any(|record| {
            record.applicant.email == applicant.email
                || record.applicant.application_id == applicant.application_id
        });
        if taken {
            return Err(RepositoryError::Conflict);
        }
        inner.next_id += 1;
        let record = ApplicantRecord {
            id: RecordId(inner.next_id),
            applicant,
        };
        inner.records.push(record.clone());
        Ok(record)
    }

    fn find_by_application_id(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<ApplicantRecord>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner
            .records
            .iter()
            .find(|record| &record.applicant.application_id == id)
            .cloned())
    }

    fn list_all(&self) -> Result<Vec<ApplicantRecord>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        let mut records = inner.records.clone();
        records.sort_by(|a, b| {
            (b.applicant.applied_at, b.id).cmp(&(a.applicant.applied_at, a.id))
        });
        Ok(records)
    }

    fn update_status(
        &self,
        id: &RecordId,
        status: ApplicationStatus,
    ) -> Result<StatusUpdate, RepositoryError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        match inner.records.iter_mut().find(|record| &record.id == id) {
            Some(record) => {
                record.applicant.status = status;
                Ok(StatusUpdate::Applied)
            }
            None => Ok(StatusUpdate::NoSuchRecord),
        }
    }
}

/// Store stand-in for an unreachable backing database.
pub(super) struct UnavailableStore;

impl ApplicantStore for UnavailableStore {
    fn insert(&self, _applicant: Applicant) -> Result<ApplicantRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_application_id(
        &self,
        _id: &ApplicationId,
    ) -> Result<Option<ApplicantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_all(&self) -> Result<Vec<ApplicantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_status(
        &self,
        _id: &RecordId,
        _status: ApplicationStatus,
    ) -> Result<StatusUpdate, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_html_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) fn form_request(path: &str, body: String) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(path)
        .header(
            axum::http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(axum::body::Body::from(body))
        .expect("request builds")
}
