pub mod alert;
pub mod health;
pub mod location;
pub mod recommendation;
pub mod snapshot;

pub use alert::{Alert, AlertType, Finding};
pub use health::{AlertsBreakdown, HealthSummary};
pub use location::{LocationAlertSet, LocationMeta};
pub use recommendation::Recommendation;
pub use snapshot::{elapsed_days, newest_first, Snapshot};
