use crate::application::services::account::AccountHealthService;
use crate::domain::entities::location::LocationAlertSet;
use crate::presentation::cli::formatters::alert_fmt;
use crate::presentation::cli::formatters::summary_fmt::print_section_header;

/// Prints the typed alert set of one location.
///
/// # Errors
///
/// Returns an error if the location is unknown, its history cannot be read,
/// or JSON serialization fails.
pub fn run_alerts(
    service: &AccountHealthService<'_>,
    location_id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let set = service.location_alerts(location_id)?;

    if json {
        print_alerts_json(&set)?;
    } else {
        print_section_header("🔍 Listing alerts");
        alert_fmt::format_alert_set(&set);
    }

    Ok(())
}

fn print_alerts_json(set: &LocationAlertSet) -> anyhow::Result<()> {
    let output = serde_json::to_string_pretty(set)?;
    println!("{output}");
    Ok(())
}
