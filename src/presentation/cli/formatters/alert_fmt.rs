use colored::Colorize;

use crate::domain::entities::alert::Alert;
use crate::domain::entities::location::LocationAlertSet;
use crate::domain::entities::recommendation::Recommendation;
use crate::domain::value_objects::severity::Severity;

use super::summary_fmt::colorize_rating;

/// Strips ANSI/OSC escape sequences from a string to prevent terminal injection.
pub(crate) fn sanitize_terminal(input: &str) -> String {
    input.chars().filter(|c| *c != '\x1b').collect()
}

fn severity_badge(severity: Severity) -> String {
    let label = format!(" {severity} ");
    match severity {
        Severity::Urgent => format!("{}", label.on_red().white().bold()),
        Severity::Warning => format!("{}", label.on_yellow().black().bold()),
        Severity::Info => format!("{}", label.on_blue().white()),
    }
}

fn alert_line(alert: &Alert) -> String {
    let mut line = format!(
        "{} {} {}",
        severity_badge(alert.severity),
        alert.severity.emoji(),
        alert.message.bold()
    );
    if let Some(days) = alert.days_since {
        line.push_str(&format!(" {}", format!("({days}d)").dimmed()));
    }
    line
}

pub fn format_alert_set(set: &LocationAlertSet) {
    println!(
        "{} {} · {}",
        sanitize_terminal(&set.location_name).bold(),
        format!("[{}]", sanitize_terminal(&set.location_type)).dimmed(),
        colorize_rating(set.rating)
    );
    if set.alerts.is_empty() {
        println!("  {}", "no open alerts".green());
    }
    for alert in &set.alerts {
        println!("  {}", alert_line(alert));
    }
    println!();
}

pub fn format_recommendations(recommendations: &[Recommendation]) {
    println!();
    for (index, recommendation) in recommendations.iter().enumerate() {
        println!("{} {}", format!("{}.", index + 1).cyan(), recommendation);
    }
    println!();
}

pub fn print_no_recommendations() {
    println!();
    println!(
        "{}",
        "✅ Listing is up to date, nothing to recommend".green().bold()
    );
    println!();
}
