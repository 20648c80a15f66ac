//! Skip lists sourced from the local "Done" control files.
//!
//! Each control file is a CSV with a header row, maintained outside this
//! program by whoever reviews a previous run's report. A row whose `Action`
//! column is `Keep` marks a record that was already retained in that earlier
//! cycle, so it is excluded from the new report. This inversion is the
//! intended business rule, not a bug.

use crate::handler::error::ReportError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const ACTION_KEEP: &str = "Keep";

/// Natural keys of records to exclude from a report.
pub type SkipSet = HashSet<(String, String)>;

#[derive(Debug, Deserialize)]
struct UserSkipRow {
    #[serde(rename = "User")]
    user: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Action")]
    action: String,
}

#[derive(Debug, Deserialize)]
struct FormSkipRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "DateCreated")]
    date_created: String,
    #[serde(rename = "Action")]
    action: String,
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, ReportError> {
    csv::Reader::from_path(path).map_err(|source| ReportError::SkipFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the users control file and returns the (User, Email) keys marked
/// `Keep`. The file must exist; extra columns are ignored.
pub fn load_user_skips(path: &Path) -> Result<SkipSet, ReportError> {
    let mut skips = SkipSet::new();
    let mut reader = open_reader(path)?;
    for row in reader.deserialize() {
        let row: UserSkipRow = row?;
        if row.action == ACTION_KEEP {
            skips.insert((row.user, row.email));
        }
    }
    log::info!("Loaded {} user skip keys from {}", skips.len(), path.display());
    Ok(skips)
}

/// Reads the forms control file and returns the (Name, DateCreated) keys
/// marked `Keep`. The `DateCreated` column is expected to hold the date
/// portion only and is used verbatim. A duplicate key is logged and the
/// file keeps being processed.
pub fn load_form_skips(path: &Path) -> Result<SkipSet, ReportError> {
    let mut skips = SkipSet::new();
    let mut reader = open_reader(path)?;
    for row in reader.deserialize() {
        let row: FormSkipRow = row?;
        if row.action == ACTION_KEEP {
            let key = (row.name, row.date_created);
            if !skips.insert(key.clone()) {
                log::warn!("Forms skip key collision: ({}, {})", key.0, key.1);
            }
        }
    }
    log::info!("Loaded {} form skip keys from {}", skips.len(), path.display());
    Ok(skips)
}
