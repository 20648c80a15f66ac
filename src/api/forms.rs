use serde::Deserialize;

/// Column order for `forms.csv`.
pub const FORM_COLS: [&str; 9] = [
    "Name",
    "Email",
    "Description",
    "IsPublic",
    "DateCreated",
    "DateUpdated",
    "EntryCount",
    "FirstEntry",
    "LastEntry",
];

/// One form as returned by `forms.json`. `hash` addresses the per-form entry
/// endpoints and is not emitted to the report.
#[derive(Debug, Clone, Deserialize)]
pub struct FormRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Hash")]
    pub hash: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "IsPublic")]
    pub is_public: String,
    #[serde(rename = "DateCreated")]
    pub date_created: String,
    #[serde(rename = "DateUpdated")]
    pub date_updated: String,
}

impl FormRecord {
    /// The date portion of `DateCreated`: its first 10 characters, or the
    /// whole value when shorter.
    pub fn date_created_date(&self) -> &str {
        self.date_created.get(..10).unwrap_or(&self.date_created)
    }

    /// Identity key used for skip-matching: name plus creation date.
    pub fn skip_key(&self) -> (String, String) {
        (self.name.clone(), self.date_created_date().to_string())
    }
}

/// Top level of the `forms.json` response. A missing `Forms` key means
/// "nothing to report", not an error.
#[derive(Debug, Deserialize)]
pub struct FormsResponse {
    #[serde(rename = "Forms")]
    pub forms: Option<Vec<FormRecord>>,
}
