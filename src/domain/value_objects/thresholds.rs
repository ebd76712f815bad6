use serde::{Deserialize, Serialize};

/// Cadence and rating thresholds used by the listing rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// Reviews must grow at least once per this many days
    pub review_cadence_days: i64,
    /// Beyond this many days since the latest capture, review staleness is "very stale"
    pub review_stale_days: i64,
    /// News posts must grow at least once per this many days
    pub news_cadence_days: i64,
    /// Photos must grow at least once per this many days
    pub photo_cadence_days: i64,
    /// Ratings below this value raise a warning
    pub low_rating_warn: f64,
    /// Ratings below this value raise an urgent alert
    pub low_rating_urgent: f64,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            review_cadence_days: 7,
            review_stale_days: 14,
            news_cadence_days: 14,
            photo_cadence_days: 14,
            low_rating_warn: 4.0,
            low_rating_urgent: 3.5,
        }
    }
}
