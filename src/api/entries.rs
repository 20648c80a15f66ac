//! Per-form entry statistics.
//!
//! Three independent lookups per form, issued sequentially: the entry count,
//! the oldest entry and the newest entry. The count endpoint without an
//! `EntryCount` key and an `Entries` page without exactly one element both
//! fall back to defaults; only transport-level failures abort the run.

use crate::client::WufooClient;
use crate::handler::error::ReportError;
use serde::Deserialize;

/// Sentinel written when a form has no first/last entry to report.
pub const NO_ENTRY: &str = "n/a";

/// Sort order for `entries.json` pages, keyed on `EntryId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EntryCountResponse {
    #[serde(rename = "EntryCount")]
    pub entry_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryRecord {
    #[serde(rename = "DateCreated")]
    pub date_created: String,
}

#[derive(Debug, Deserialize)]
pub struct EntriesResponse {
    #[serde(rename = "Entries")]
    pub entries: Option<Vec<EntryRecord>>,
}

impl EntriesResponse {
    /// The single entry's creation timestamp, when the page holds exactly
    /// one entry.
    fn sole_entry_date(self) -> Option<String> {
        let mut entries = self.entries?;
        if entries.len() == 1 {
            Some(entries.remove(0).date_created)
        } else {
            None
        }
    }
}

/// Entry statistics attached to each reported form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStats {
    pub entry_count: u64,
    pub first_entry: String,
    pub last_entry: String,
}

impl Default for EntryStats {
    fn default() -> Self {
        Self {
            entry_count: 0,
            first_entry: NO_ENTRY.to_string(),
            last_entry: NO_ENTRY.to_string(),
        }
    }
}

/// Fetches the three entry statistics for the form addressed by `hash`.
///
/// # Errors
/// Propagates any transport or parse failure from the three calls; a missing
/// top-level key in an otherwise valid response keeps the default value.
pub fn fetch_entry_stats(client: &WufooClient, hash: &str) -> Result<EntryStats, ReportError> {
    let mut stats = EntryStats::default();

    if let Some(count) = client.entry_count(hash)?.entry_count {
        stats.entry_count = count;
    }

    if let Some(date) = client
        .entries_page(hash, SortDirection::Ascending)?
        .sole_entry_date()
    {
        stats.first_entry = date;
    }

    if let Some(date) = client
        .entries_page(hash, SortDirection::Descending)?
        .sole_entry_date()
    {
        stats.last_entry = date;
    }

    log::debug!(
        "Entry stats for {}: count={} first={} last={}",
        hash,
        stats.entry_count,
        stats.first_entry,
        stats.last_entry
    );
    Ok(stats)
}
