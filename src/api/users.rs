use serde::Deserialize;

/// Column order for `users.csv`.
pub const USER_COLS: [&str; 4] = ["User", "Email", "AdminAccess", "IsAccountOwner"];

/// One user as returned by `users.json`. Flags are carried in the API's own
/// string encoding ("0"/"1") and written to the report verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "AdminAccess")]
    pub admin_access: String,
    #[serde(rename = "IsAccountOwner")]
    pub is_account_owner: String,
}

impl UserRecord {
    /// Identity key used for skip-matching.
    pub fn skip_key(&self) -> (String, String) {
        (self.user.clone(), self.email.clone())
    }
}

/// Top level of the `users.json` response. A missing `Users` key means
/// "nothing to report", not an error.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    #[serde(rename = "Users")]
    pub users: Option<Vec<UserRecord>>,
}
