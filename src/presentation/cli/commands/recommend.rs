use crate::application::services::account::AccountHealthService;
use crate::domain::entities::recommendation::Recommendation;
use crate::presentation::cli::formatters::alert_fmt;
use crate::presentation::cli::formatters::summary_fmt::print_section_header;

/// Prints the recommendations for one location.
///
/// # Errors
///
/// Returns an error if the location is unknown, its history cannot be read, or JSON
/// serialization fails.
pub fn run_recommend(
    service: &AccountHealthService<'_>,
    location_id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let recommendations = service.location_recommendations(location_id)?;

    if json {
        print_recommendations_json(&recommendations)?;
    } else {
        print_recommendations_human(location_id, &recommendations);
    }

    Ok(())
}

fn print_recommendations_json(recommendations: &[Recommendation]) -> anyhow::Result<()> {
    let output = serde_json::to_string_pretty(recommendations)?;
    println!("{output}");
    Ok(())
}

fn print_recommendations_human(location_id: &str, recommendations: &[Recommendation]) {
    print_section_header(&format!(
        "📋 Recommendations for {}",
        alert_fmt::sanitize_terminal(location_id)
    ));
    if recommendations.is_empty() {
        alert_fmt::print_no_recommendations();
    } else {
        alert_fmt::format_recommendations(recommendations);
    }
}
