//! Report generation: fetch, filter against the skip list, enrich (forms
//! only) and write one CSV per report. The two reports run independently;
//! the user report completes before the form report starts.

pub mod forms;
pub mod users;

use crate::client::WufooClient;
use crate::handler::error::ReportError;
use std::path::PathBuf;

/// File locations for one run: the two control files read and the two
/// report files overwritten.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub users_skip: PathBuf,
    pub forms_skip: PathBuf,
    pub users_out: PathBuf,
    pub forms_out: PathBuf,
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self {
            users_skip: PathBuf::from("Users-Done.csv"),
            forms_skip: PathBuf::from("Forms-Done.csv"),
            users_out: PathBuf::from("users.csv"),
            forms_out: PathBuf::from("forms.csv"),
        }
    }
}

/// Runs both reports in order. The first fatal error aborts the run; a
/// failed form report leaves an already-written `users.csv` in place.
pub fn run(client: &WufooClient, paths: &ReportPaths) -> Result<(), ReportError> {
    let retained = users::generate_user_report(client, paths)?;
    log::info!("User report done: {} rows", retained);
    let retained = forms::generate_form_report(client, paths)?;
    log::info!("Form report done: {} rows", retained);
    Ok(())
}
