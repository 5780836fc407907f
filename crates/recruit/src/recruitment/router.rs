use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tracing::{error, warn};

use super::domain::{RecordId, SubmissionForm};
use super::repository::ApplicantStore;
use super::service::{RecruitmentService, RecruitmentServiceError, StatusLookup};
use super::views::{self, StatusPage};

/// Router builder exposing the full recruitment HTTP surface: the public
/// submission and status-check pages plus the (unauthenticated) admin list
/// and status-update endpoints.
pub fn recruitment_router<S>(service: Arc<RecruitmentService<S>>) -> Router
where
    S: ApplicantStore + 'static,
{
    Router::new()
        .route("/", get(landing_handler))
        .route("/recruitment/apply", get(apply_form_handler))
        .route("/recruitment", post(submit_handler::<S>))
        .route(
            "/check-status",
            get(check_status_form_handler).post(check_status_handler::<S>),
        )
        .route("/recruitment/applicants", get(public_list_handler::<S>))
        .route("/admin/applicants", get(admin_list_handler::<S>))
        .route(
            "/admin/update-status/:id",
            post(update_status_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusCheckForm {
    #[serde(default)]
    pub(crate) application_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdateForm {
    #[serde(default)]
    pub(crate) status: String,
}

pub(crate) async fn landing_handler() -> Html<String> {
    Html(views::landing())
}

pub(crate) async fn apply_form_handler() -> Html<String> {
    Html(views::apply_form())
}

pub(crate) async fn check_status_form_handler() -> Html<String> {
    Html(views::check_status(StatusPage::Empty))
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<RecruitmentService<S>>>,
    Form(form): Form<SubmissionForm>,
) -> Response
where
    S: ApplicantStore + 'static,
{
    match service.submit(form) {
        Ok(application_id) => Html(views::submission_success(&application_id)).into_response(),
        Err(RecruitmentServiceError::Validation(error)) => {
            warn!(%error, "submission rejected");
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
        Err(error) => {
            error!(%error, "submission failed");
            (
                StatusCode::BAD_REQUEST,
                "Error submitting application. Maybe email already used.",
            )
                .into_response()
        }
    }
}

pub(crate) async fn check_status_handler<S>(
    State(service): State<Arc<RecruitmentService<S>>>,
    Form(form): Form<StatusCheckForm>,
) -> Html<String>
where
    S: ApplicantStore + 'static,
{
    // Misses and store failures both render inline on the same page; the
    // applicant never sees an HTTP error here.
    match service.check_status(&form.application_id) {
        Ok(StatusLookup::Found(record)) => Html(views::check_status(StatusPage::Found(&record))),
        Ok(StatusLookup::NotFound) => Html(views::check_status(StatusPage::InvalidId)),
        Err(error) => {
            error!(%error, "status check failed");
            Html(views::check_status(StatusPage::Failed))
        }
    }
}

pub(crate) async fn public_list_handler<S>(
    State(service): State<Arc<RecruitmentService<S>>>,
) -> Response
where
    S: ApplicantStore + 'static,
{
    render_list(&service, false)
}

pub(crate) async fn admin_list_handler<S>(
    State(service): State<Arc<RecruitmentService<S>>>,
) -> Response
where
    S: ApplicantStore + 'static,
{
    render_list(&service, true)
}

fn render_list<S>(service: &RecruitmentService<S>, admin: bool) -> Response
where
    S: ApplicantStore + 'static,
{
    match service.list_applicants() {
        Ok(records) => Html(views::applicant_list(&records, admin)).into_response(),
        Err(error) => {
            error!(%error, "applicant listing failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub(crate) async fn update_status_handler<S>(
    State(service): State<Arc<RecruitmentService<S>>>,
    Path(record_id): Path<u64>,
    Form(form): Form<StatusUpdateForm>,
) -> Response
where
    S: ApplicantStore + 'static,
{
    match service.update_status(&RecordId(record_id), &form.status) {
        Ok(()) => Redirect::to("/admin/applicants").into_response(),
        Err(RecruitmentServiceError::InvalidStatus(value)) => {
            warn!(value, "rejected status update");
            (StatusCode::BAD_REQUEST, "Invalid status").into_response()
        }
        Err(error) => {
            error!(%error, "status update failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
