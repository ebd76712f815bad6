use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// One measurement of a location's public listing metrics at a point in time.
///
/// Counts are cumulative totals as shown on the listing. They are kept signed and
/// unvalidated: whatever the collector recorded flows through the rules as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: String,
    pub location_id: String,
    pub captured_at: DateTime<Utc>,
    #[serde(default)]
    pub rating: Option<f64>,
    pub reviews_count: i64,
    pub unanswered_reviews_count: i64,
    pub news_count: i64,
    pub photos_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,
}

/// Whole days elapsed from `earlier` to `later`: `floor(Δt / 24h)`.
///
/// Captures 23h59m apart count as 0 days. A negative span (future-dated data)
/// floors towards negative infinity.
#[must_use]
pub fn elapsed_days(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later - earlier).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Returns the history ordered newest first. Equal timestamps keep their input order.
#[must_use]
pub fn newest_first(history: &[Snapshot]) -> Vec<&Snapshot> {
    let mut ordered: Vec<&Snapshot> = history.iter().collect();
    ordered.sort_by(|a, b| b.captured_at.cmp(&a.captured_at));
    ordered
}
