use colored::Colorize;

use crate::application::services::account::{AccountHealthReport, AccountHealthService};
use crate::presentation::cli::formatters::alert_fmt;
use crate::presentation::cli::formatters::summary_fmt::{
    format_summary, format_unavailable, print_section_header,
};

/// Evaluates every location of an account and prints the health summary.
///
/// # Errors
///
/// Returns an error if the account's locations cannot be listed or JSON
/// serialization fails.
pub fn run_summary(
    service: &AccountHealthService<'_>,
    account_id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let report = service.evaluate_account(account_id)?;

    if json {
        print_report_json(&report)?;
    } else {
        print_report_human(&report);
    }

    Ok(())
}

fn print_report_json(report: &AccountHealthReport) -> anyhow::Result<()> {
    let output = serde_json::to_string_pretty(report)?;
    println!("{output}");
    Ok(())
}

fn print_report_human(report: &AccountHealthReport) {
    print_section_header(&format!(
        "📊 Account health: {}",
        alert_fmt::sanitize_terminal(&report.account_id)
    ));
    format_summary(&report.summary);
    format_unavailable(report);

    let with_alerts: Vec<_> = report.locations.iter().filter(|l| l.has_alerts()).collect();
    if with_alerts.is_empty() {
        println!("{}", "✅ Every location is healthy".green().bold());
        println!();
        return;
    }
    print_section_header("Locations needing attention");
    for set in with_alerts {
        alert_fmt::format_alert_set(set);
    }
}
