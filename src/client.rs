//! Authenticated client for the Wufoo REST API.
//!
//! This module provides the [`WufooClient`] struct, the single HTTP entry
//! point for the reporting workflow:
//! - Fetching the account's user list (`users.json`).
//! - Fetching the account's form list (`forms.json`).
//! - Fetching per-form entry statistics (`entries/count.json` and
//!   single-entry `entries.json` pages).
//!
//! The client is built once from an [`EnvConfig`] and passed explicitly to
//! each report generator; there is no process-global connection state. Every
//! request carries HTTP Basic credentials with an empty username and the API
//! key as password.

use crate::api::entries::{EntriesResponse, EntryCountResponse, SortDirection};
use crate::api::forms::FormsResponse;
use crate::api::users::UsersResponse;
use crate::handler::env::EnvConfig;
use crate::handler::error::ReportError;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the subset of the Wufoo API this program consumes.
pub struct WufooClient {
    client: Client,
    config: EnvConfig,
}

impl WufooClient {
    /// Creates a client from loaded configuration.
    ///
    /// # Errors
    /// Returns [`ReportError`] if the underlying HTTP client cannot be built.
    pub fn new(config: EnvConfig) -> Result<Self, ReportError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                log::error!("Failed to build HTTP client: {}", e);
                ReportError::from(e)
            })?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Issues `GET base_url + path` with Basic auth and parses the JSON body.
    ///
    /// A non-2xx status is [`ReportError::Status`]; a body that is not valid
    /// JSON for `T` is [`ReportError::Json`]. Both abort the in-progress
    /// report, there are no retries.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ReportError> {
        let url = self.config.endpoint_url(path);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .basic_auth("", Some(&self.config.api_key))
            .send()
            .map_err(|e| {
                log::error!("Request to {} failed: {}", url, e);
                ReportError::from(e)
            })?;
        let status = response.status();
        if !status.is_success() {
            log::error!("HTTP {} for {}", status, url);
            return Err(ReportError::Status { status, url });
        }
        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| {
            log::error!("Malformed JSON from {}: {}", url, e);
            ReportError::from(e)
        })
    }

    /// `GET users.json` — the account's user list.
    pub fn users(&self) -> Result<UsersResponse, ReportError> {
        self.get("users.json")
    }

    /// `GET forms.json` — the account's form list.
    pub fn forms(&self) -> Result<FormsResponse, ReportError> {
        self.get("forms.json")
    }

    /// `GET forms/{hash}/entries/count.json` — total entry count for a form.
    pub fn entry_count(&self, hash: &str) -> Result<EntryCountResponse, ReportError> {
        self.get(&format!("forms/{}/entries/count.json", hash))
    }

    /// Fetches a single-entry page of a form's entries, sorted by `EntryId`
    /// in the given direction. Ascending yields the oldest entry, descending
    /// the newest.
    pub fn entries_page(
        &self,
        hash: &str,
        direction: SortDirection,
    ) -> Result<EntriesResponse, ReportError> {
        self.get(&format!(
            "forms/{}/entries.json?pageStart=0&pageSize=1&sort=EntryId&sortDirection={}",
            hash,
            direction.as_str()
        ))
    }
}
