pub mod locale;
pub mod severity;
pub mod thresholds;

pub use locale::{Locale, PluralForm};
pub use severity::Severity;
pub use thresholds::ThresholdSet;
