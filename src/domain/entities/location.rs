use serde::{Deserialize, Serialize};

use super::alert::Alert;

/// Descriptive metadata for a location, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMeta {
    pub location_id: String,
    pub location_name: String,
    pub location_type: String,
}

impl LocationMeta {
    #[must_use]
    pub fn new(
        location_id: impl Into<String>,
        location_name: impl Into<String>,
        location_type: impl Into<String>,
    ) -> Self {
        Self {
            location_id: location_id.into(),
            location_name: location_name.into(),
            location_type: location_type.into(),
        }
    }
}

/// Alerts raised for one location in one evaluation cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationAlertSet {
    pub location_id: String,
    pub location_name: String,
    pub location_type: String,
    pub rating: Option<f64>,
    pub alerts: Vec<Alert>,
}

impl LocationAlertSet {
    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }
}
