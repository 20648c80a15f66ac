use crate::api::users::USER_COLS;
use crate::client::WufooClient;
use crate::handler::error::ReportError;
use crate::report::ReportPaths;
use crate::skiplist;

/// Generates `users.csv`: header plus one row per user not marked `Keep` in
/// the users control file, in API response order. Returns the number of
/// retained rows.
pub fn generate_user_report(
    client: &WufooClient,
    paths: &ReportPaths,
) -> Result<usize, ReportError> {
    let skips = skiplist::load_user_skips(&paths.users_skip)?;

    log::info!("Fetching user list");
    let response = client.users()?;
    let users = response.users.unwrap_or_default();

    let mut writer = csv::Writer::from_path(&paths.users_out)?;
    writer.write_record(USER_COLS)?;

    let mut retained = 0;
    for user in users {
        if skips.contains(&user.skip_key()) {
            log::debug!("Skipping user ({}, {})", user.user, user.email);
            continue;
        }
        writer.write_record([
            &user.user,
            &user.email,
            &user.admin_access,
            &user.is_account_owner,
        ])?;
        retained += 1;
    }
    writer.flush()?;
    Ok(retained)
}
