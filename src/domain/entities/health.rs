use serde::{Deserialize, Serialize};

use super::alert::AlertType;

/// Alert counts per category, summed across locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsBreakdown {
    pub stale_news: usize,
    pub stale_photos: usize,
    pub unanswered_reviews: usize,
    pub low_rating: usize,
    pub stale_reviews: usize,
}

impl AlertsBreakdown {
    pub fn record(&mut self, alert_type: AlertType) {
        match alert_type {
            AlertType::StaleNews => self.stale_news += 1,
            AlertType::StalePhotos => self.stale_photos += 1,
            AlertType::UnansweredReviews => self.unanswered_reviews += 1,
            AlertType::LowRating => self.low_rating += 1,
            AlertType::StaleReviews => self.stale_reviews += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.stale_news
            + self.stale_photos
            + self.unanswered_reviews
            + self.low_rating
            + self.stale_reviews
    }
}

/// Account-level health aggregate over a set of locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSummary {
    pub locations_count: usize,
    pub avg_rating: f64,
    pub total_reviews: i64,
    pub unanswered_reviews_count: i64,
    pub locations_with_alerts: usize,
    pub alerts_breakdown: AlertsBreakdown,
}
