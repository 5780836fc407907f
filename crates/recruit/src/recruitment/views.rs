//! Minimal server-rendered pages. No template engine; the presentation is
//! deliberately thin and every user-supplied value is escaped before it is
//! interpolated into markup.

use super::domain::ApplicationId;
use super::repository::ApplicantRecord;

/// Escape a value for interpolation into HTML text or attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

pub fn landing() -> String {
    page(
        "Recruitment Portal",
        "<h1>Recruitment Portal</h1>\
         <p><a href=\"/recruitment/apply\">Apply</a> | \
         <a href=\"/check-status\">Check application status</a></p>",
    )
}

pub fn apply_form() -> String {
    page(
        "Apply",
        "<h1>Apply</h1>\
         <form method=\"post\" action=\"/recruitment\">\
         <label>Name <input name=\"name\" required></label><br>\
         <label>Email <input name=\"email\" type=\"email\" required></label><br>\
         <label>Department <input name=\"department\"></label><br>\
         <label>Role <input name=\"role\"></label><br>\
         <label>Skills (comma separated) <input name=\"skills\"></label><br>\
         <label>Interests (comma separated) <input name=\"interests\"></label><br>\
         <label>Message <textarea name=\"message\" maxlength=\"1000\"></textarea></label><br>\
         <button type=\"submit\">Submit</button>\
         </form>",
    )
}

pub fn submission_success(application_id: &ApplicationId) -> String {
    let id = escape(&application_id.0);
    page(
        "Application Submitted",
        &format!(
            "<h1>Application submitted</h1>\
             <p>Your application ID is <strong>{id}</strong>. \
             Keep it to check your status later.</p>\
             <p><a href=\"/check-status\">Check status</a></p>"
        ),
    )
}

/// What the status-check page has to say this time around.
pub enum StatusPage<'a> {
    Empty,
    Found(&'a ApplicantRecord),
    InvalidId,
    Failed,
}

pub fn check_status(outcome: StatusPage<'_>) -> String {
    let mut body = String::from(
        "<h1>Check application status</h1>\
         <form method=\"post\" action=\"/check-status\">\
         <label>Application ID <input name=\"application_id\" required></label>\
         <button type=\"submit\">Check</button>\
         </form>",
    );

    match outcome {
        StatusPage::Empty => {}
        StatusPage::Found(record) => {
            let applicant = &record.applicant;
            body.push_str(&format!(
                "<p>Application <strong>{}</strong> ({}) is <strong>{}</strong>.</p>",
                escape(&applicant.application_id.0),
                escape(&applicant.name),
                applicant.status.label(),
            ));
        }
        StatusPage::InvalidId => {
            body.push_str("<p>Invalid Application ID</p>");
        }
        StatusPage::Failed => {
            body.push_str("<p>Something went wrong</p>");
        }
    }

    page("Check Status", &body)
}

/// Applicant table shared by the admin and public lists; only the admin
/// variant carries the status-update controls.
pub fn applicant_list(records: &[ApplicantRecord], admin: bool) -> String {
    let mut rows = String::new();
    for record in records {
        let applicant = &record.applicant;
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
            escape(&applicant.application_id.0),
            escape(&applicant.name),
            escape(&applicant.email),
            escape(&applicant.department),
            applicant.status.label(),
            applicant.applied_at.format("%Y-%m-%d %H:%M"),
        ));
        if admin {
            rows.push_str(&format!(
                "<td><form method=\"post\" action=\"/admin/update-status/{}\">\
                 <select name=\"status\">\
                 <option>Pending</option><option>Accepted</option><option>Rejected</option>\
                 </select>\
                 <button type=\"submit\">Update</button>\
                 </form></td>",
                record.id.0
            ));
        }
        rows.push_str("</tr>");
    }

    let heading = if admin { "Applicants (admin)" } else { "Applicants" };
    let actions = if admin { "<th>Actions</th>" } else { "" };
    page(
        heading,
        &format!(
            "<h1>{heading}</h1>\
             <table>\
             <tr><th>Application ID</th><th>Name</th><th>Email</th>\
             <th>Department</th><th>Status</th><th>Applied</th>{actions}</tr>\
             {rows}\
             </table>"
        ),
    )
}
