use crate::domain::entities::alert::{AlertType, Finding};
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::{stagnation_days, EvaluationContext, Rule};

pub struct PhotoCadenceRule;

impl Rule for PhotoCadenceRule {
    fn name(&self) -> &'static str {
        "photo_cadence"
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>, thresholds: &ThresholdSet) -> Option<Finding> {
        let days = stagnation_days(ctx, |s| s.photos_count, thresholds.photo_cadence_days)?;
        Some(Finding {
            days_since: Some(days),
            threshold: Some(thresholds.photo_cadence_days),
            ..Finding::new(AlertType::StalePhotos, Severity::Warning)
        })
    }
}
