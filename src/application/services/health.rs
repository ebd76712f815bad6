use std::collections::BTreeMap;

use crate::domain::entities::health::{AlertsBreakdown, HealthSummary};
use crate::domain::entities::location::LocationAlertSet;
use crate::domain::entities::snapshot::{newest_first, Snapshot};

/// Folds per-location alert sets and latest snapshots into one account summary.
///
/// * `locations_count` counts the alert sets given; the caller decides inclusion.
/// * `avg_rating` averages only locations whose latest snapshot has a rating,
///   and is `0` when none do.
/// * review totals sum the latest snapshots; locations without one add nothing.
/// * the breakdown counts every alert, so repeated types add up.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(
    location_alert_sets: &[LocationAlertSet],
    latest_snapshots: &BTreeMap<String, Snapshot>,
) -> HealthSummary {
    let mut alerts_breakdown = AlertsBreakdown::default();
    for alert in location_alert_sets.iter().flat_map(|set| &set.alerts) {
        alerts_breakdown.record(alert.alert_type);
    }

    let ratings: Vec<f64> = latest_snapshots.values().filter_map(|s| s.rating).collect();
    let avg_rating = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<f64>() / ratings.len() as f64
    };

    HealthSummary {
        locations_count: location_alert_sets.len(),
        avg_rating,
        total_reviews: saturating_total(latest_snapshots, |s| s.reviews_count),
        unanswered_reviews_count: saturating_total(latest_snapshots, |s| {
            s.unanswered_reviews_count
        }),
        locations_with_alerts: location_alert_sets
            .iter()
            .filter(|set| set.has_alerts())
            .count(),
        alerts_breakdown,
    }
}

// Counts are unvalidated; clamp instead of overflowing on malformed data
fn saturating_total(
    latest_snapshots: &BTreeMap<String, Snapshot>,
    metric: fn(&Snapshot) -> i64,
) -> i64 {
    latest_snapshots
        .values()
        .map(metric)
        .fold(0_i64, i64::saturating_add)
}

/// Picks the newest snapshot of each history, keyed by location id.
/// Empty histories are skipped.
#[must_use]
pub fn latest_snapshots<'a, I>(histories: I) -> BTreeMap<String, Snapshot>
where
    I: IntoIterator<Item = (&'a str, &'a [Snapshot])>,
{
    histories
        .into_iter()
        .filter_map(|(location_id, history)| {
            newest_first(history)
                .first()
                .map(|latest| (location_id.to_string(), (*latest).clone()))
        })
        .collect()
}
