use serde::{Deserialize, Serialize};

use crate::domain::value_objects::severity::Severity;

/// Category of a listing alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertType {
    UnansweredReviews,
    StaleReviews,
    StaleNews,
    StalePhotos,
    LowRating,
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnansweredReviews => write!(f, "unanswered_reviews"),
            Self::StaleReviews => write!(f, "stale_reviews"),
            Self::StaleNews => write!(f, "stale_news"),
            Self::StalePhotos => write!(f, "stale_photos"),
            Self::LowRating => write!(f, "low_rating"),
        }
    }
}

/// Structured outcome of one rule firing for one location, before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub alert_type: AlertType,
    pub severity: Severity,
    /// Days of staleness behind a time-driven finding
    pub days_since: Option<i64>,
    /// Cadence threshold in days that was exceeded
    pub threshold: Option<i64>,
    pub count: Option<i64>,
    pub rating: Option<f64>,
    /// Data is old enough to warrant the stronger wording
    pub long_stale: bool,
}

impl Finding {
    #[must_use]
    pub const fn new(alert_type: AlertType, severity: Severity) -> Self {
        Self {
            alert_type,
            severity,
            days_since: None,
            threshold: None,
            count: None,
            rating: None,
            long_stale: false,
        }
    }

    /// Attaches a rendered message, producing the public alert record.
    #[must_use]
    pub fn into_alert(self, message: String) -> Alert {
        Alert {
            alert_type: self.alert_type,
            severity: self.severity,
            days_since: self.days_since,
            threshold: self.threshold,
            count: self.count,
            rating: self.rating,
            message,
        }
    }
}

/// A rendered alert as handed to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: Severity,
    /// Days measured by whichever clock triggered the alert: the gap between the two
    /// latest captures, or the age of the latest capture when there is no pair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_since: Option<i64>,
    /// Limit that `days_since` exceeded, on the same clock
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub message: String,
}
