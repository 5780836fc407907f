//! Recruitment portal domain library.
//!
//! Applicants submit a recruitment form, receive a generated application ID,
//! and can look up their status later; administrators list applicants and
//! move them between `Pending`, `Accepted`, and `Rejected`. The HTTP router
//! lives here too so the API shell only has to wire a store and serve it.

pub mod config;
pub mod error;
pub mod recruitment;
pub mod telemetry;
