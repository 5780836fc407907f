use metrics_exporter_prometheus::PrometheusHandle;
use recruit::recruitment::{
    Applicant, ApplicantRecord, ApplicantStore, ApplicationId, ApplicationStatus, RecordId,
    RepositoryError, StatusUpdate,
};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local applicant store. Uniqueness of email and application ID is
/// enforced at insert; record ids are assigned monotonically, standing in
/// for a document database's own identifiers.
#[derive(Default)]
pub(crate) struct InMemoryApplicantStore {
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    next_id: u64,
    records: Vec<ApplicantRecord>,
}

impl ApplicantStore for InMemoryApplicantStore {
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
