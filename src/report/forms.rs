use crate::api::entries;
use crate::api::forms::FORM_COLS;
use crate::client::WufooClient;
use crate::handler::error::ReportError;
use crate::report::ReportPaths;
use crate::skiplist;

/// Generates `forms.csv`: header plus one enriched row per form not marked
/// `Keep` in the forms control file, in API response order. Skipped forms
/// trigger no entry-statistics calls at all. Returns the number of retained
/// rows.
pub fn generate_form_report(
    client: &WufooClient,
    paths: &ReportPaths,
) -> Result<usize, ReportError> {
    let skips = skiplist::load_form_skips(&paths.forms_skip)?;

    log::info!("Fetching form list");
    let response = client.forms()?;
    let forms = response.forms.unwrap_or_default();

    let mut writer = csv::Writer::from_path(&paths.forms_out)?;
    writer.write_record(FORM_COLS)?;

    let mut retained = 0;
    for form in forms {
        let key = form.skip_key();
        if skips.contains(&key) {
            log::debug!("Skipping form ({}, {})", key.0, key.1);
            continue;
        }

        let stats = entries::fetch_entry_stats(client, &form.hash)?;
        let entry_count = stats.entry_count.to_string();
        writer.write_record([
            form.name.as_str(),
            form.email.as_str(),
            form.description.as_str(),
            form.is_public.as_str(),
            form.date_created.as_str(),
            form.date_updated.as_str(),
            entry_count.as_str(),
            stats.first_entry.as_str(),
            stats.last_entry.as_str(),
        ])?;
        retained += 1;
    }
    writer.flush()?;
    Ok(retained)
}
