use colored::{ColoredString, Colorize};

use crate::application::services::account::AccountHealthReport;
use crate::domain::entities::health::HealthSummary;

#[must_use]
pub fn colorize_rating(rating: Option<f64>) -> ColoredString {
    match rating {
        None => "no rating".dimmed(),
        Some(value) => {
            let text = format!("★ {value:.1}");
            if value < 3.5 {
                text.red().bold()
            } else if value < 4.0 {
                text.yellow()
            } else {
                text.green()
            }
        }
    }
}

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}

fn summary_lines(summary: &HealthSummary) -> Vec<String> {
    let breakdown = &summary.alerts_breakdown;
    let average = if summary.avg_rating > 0.0 {
        colorize_rating(Some(summary.avg_rating))
    } else {
        colorize_rating(None)
    };
    vec![
        format!("Locations            {}", summary.locations_count),
        format!("Average rating       {average}"),
        format!("Total reviews        {}", summary.total_reviews),
        format!("Unanswered reviews   {}", summary.unanswered_reviews_count),
        format!(
            "Locations w/ alerts  {}/{}",
            summary.locations_with_alerts, summary.locations_count
        ),
        format!(
            "Alerts               unanswered {} · reviews {} · news {} · photos {} · rating {}",
            breakdown.unanswered_reviews,
            breakdown.stale_reviews,
            breakdown.stale_news,
            breakdown.stale_photos,
            breakdown.low_rating
        ),
    ]
}

pub fn format_summary(summary: &HealthSummary) {
    for line in summary_lines(summary) {
        println!("  {line}");
    }
    println!();
}

pub fn format_unavailable(report: &AccountHealthReport) {
    if report.unavailable.is_empty() {
        return;
    }
    println!(
        "{}",
        format!(
            "⚠️  Health unknown for {} location(s):",
            report.unavailable.len()
        )
        .yellow()
        .bold()
    );
    for location in &report.unavailable {
        println!(
            "  {} {}",
            super::alert_fmt::sanitize_terminal(&location.location_id),
            location.reason.dimmed()
        );
    }
    println!();
}
