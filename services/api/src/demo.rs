use crate::infra::InMemoryApplicantStore;
use clap::Args;
use recruit::error::AppError;
use recruit::recruitment::{RecruitmentService, StatusLookup, SubmissionForm};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Applicant name used for the walkthrough submission
    #[arg(long, default_value = "Ada Lovelace")]
    pub(crate) name: String,
    /// Applicant email used for the walkthrough submission
    #[arg(long, default_value = "ada@example.com")]
    pub(crate) email: String,
}

/// Walk the full applicant lifecycle against an in-memory store: submit,
/// check status, accept, check again, and print the admin listing.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryApplicantStore::default());
    let service = RecruitmentService::new(store);

    println!("Recruitment portal demo");

    let form = SubmissionForm {
        name: args.name,
        email: args.email,
        department: Some("Engineering".to_string()),
        skills: Some("rust, async, databases".to_string()),
        interests: Some("developer tooling".to_string()),
        role: Some("Backend Engineer".to_string()),
        message: Some("Submitted via the CLI walkthrough.".to_string()),
    };

    let application_id = match service.submit(form) {
        Ok(id) => id,
        Err(err) => {
            println!("  Submission rejected: {err}");
            return Ok(());
        }
    };
    println!("- Issued application ID {}", application_id.0);

    report_status(&service, &application_id.0);

    let record_id = match service.check_status(&application_id.0) {
        Ok(StatusLookup::Found(record)) => record.id,
        _ => {
            println!("  Submitted record went missing; aborting walkthrough");
            return Ok(());
        }
    };

    match service.update_status(&record_id, "Accepted") {
        Ok(()) => println!("- Admin accepted record {}", record_id.0),
        Err(err) => {
            println!("  Status update failed: {err}");
            return Ok(());
        }
    }

    report_status(&service, &application_id.0);

    match service.list_applicants() {
        Ok(records) => {
            println!("- Admin listing ({} applicant(s), newest first):", records.len());
            for record in records {
                println!(
                    "    {} | {} | {} | {}",
                    record.applicant.application_id.0,
                    record.applicant.name,
                    record.applicant.email,
                    record.applicant.status.label()
                );
            }
        }
        Err(err) => println!("  Listing failed: {err}"),
    }

    Ok(())
}

fn report_status(service: &RecruitmentService<InMemoryApplicantStore>, raw_id: &str) {
    match service.check_status(raw_id) {
        Ok(StatusLookup::Found(record)) => {
            println!(
                "- Status check for {}: {}",
                record.applicant.application_id.0,
                record.applicant.status.label()
            );
        }
        Ok(StatusLookup::NotFound) => println!("- Status check: invalid application ID"),
        Err(err) => println!("  Status check failed: {err}"),
    }
}
