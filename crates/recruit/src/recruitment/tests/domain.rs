use chrono::Utc;

use super::common::submission;
use crate::recruitment::domain::{
    split_list, Applicant, ApplicationId, ApplicationStatus, SubmissionForm, ValidationError,
    MESSAGE_MAX_LEN,
};

fn normalize(form: SubmissionForm) -> Result<Applicant, ValidationError> {
    Applicant::from_form(form, ApplicationId("MLRN00000000000".to_string()), Utc::now())
}

#[test]
fn from_form_normalizes_name_and_email() {
    let mut form = submission("  Ada Lovelace  ", "  Ada@X.COM ");
    form.department = None;
    form.role = None;

    let applicant = normalize(form).expect("valid submission");
    assert_eq!(applicant.name, "Ada Lovelace");
    assert_eq!(applicant.email, "ada@x.com");
    assert_eq!(applicant.department, "");
    assert_eq!(applicant.role, "");
    assert_eq!(applicant.status, ApplicationStatus::Pending);
}

#[test]
fn from_form_splits_skills_and_interests() {
    let mut form = submission("Ada", "ada@x.com");
    form.skills = Some(" rust ,, distributed systems , ".to_string());
    form.interests = Some(",".to_string());

    let applicant = normalize(form).expect("valid submission");
    assert_eq!(applicant.skills, vec!["rust", "distributed systems"]);
    assert!(applicant.interests.is_empty());
}

#[test]
fn from_form_requires_name_and_email() {
    let mut form = submission("   ", "ada@x.com");
    assert_eq!(normalize(form).unwrap_err(), ValidationError::MissingName);

    form = submission("Ada", "   ");
    assert_eq!(normalize(form).unwrap_err(), ValidationError::MissingEmail);
}

#[test]
fn from_form_enforces_message_length() {
    let mut form = submission("Ada", "ada@x.com");
    form.message = Some("x".repeat(MESSAGE_MAX_LEN));
    assert!(normalize(form.clone()).is_ok());

    form.message = Some("x".repeat(MESSAGE_MAX_LEN + 1));
    match normalize(form) {
        Err(ValidationError::MessageTooLong { limit, length }) => {
            assert_eq!(limit, MESSAGE_MAX_LEN);
            assert_eq!(length, MESSAGE_MAX_LEN + 1);
        }
        other => panic!("expected message length rejection, got {other:?}"),
    }
}

#[test]
fn split_list_preserves_order() {
    assert_eq!(split_list("a, c, b"), vec!["a", "c", "b"]);
    assert!(split_list("").is_empty());
    assert!(split_list(" , ,").is_empty());
}

#[test]
fn status_parse_accepts_only_exact_labels() {
    assert_eq!(
        ApplicationStatus::parse("Accepted"),
        Some(ApplicationStatus::Accepted)
    );
    assert_eq!(
        ApplicationStatus::parse("Rejected"),
        Some(ApplicationStatus::Rejected)
    );
    assert_eq!(
        ApplicationStatus::parse("Pending"),
        Some(ApplicationStatus::Pending)
    );
    assert_eq!(ApplicationStatus::parse("accepted"), None);
    assert_eq!(ApplicationStatus::parse("Withdrawn"), None);
    assert_eq!(ApplicationStatus::parse(""), None);
}

#[test]
fn status_labels_round_trip() {
    for status in [
        ApplicationStatus::Pending,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ] {
        assert_eq!(ApplicationStatus::parse(status.label()), Some(status));
    }
}
