pub mod api;
pub mod client;
pub mod handler;
pub mod report;
pub mod skiplist;
pub use crate::api::entries::{EntryStats, SortDirection, fetch_entry_stats};
pub use crate::api::forms::{FORM_COLS, FormRecord, FormsResponse};
pub use crate::api::users::{USER_COLS, UserRecord, UsersResponse};
pub use client::WufooClient;
pub use handler::env::EnvConfig;
pub use handler::error::ReportError;
pub use report::ReportPaths;
pub use skiplist::SkipSet;
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
pub fn name() -> &'static str {
    env!("CARGO_PKG_NAME")
}
