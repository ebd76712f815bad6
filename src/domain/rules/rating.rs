use crate::domain::entities::alert::{AlertType, Finding};
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::{EvaluationContext, Rule};

/// Flags a latest rating below the configured floor. Listings without a rating are
/// left alone.
pub struct LowRatingRule;

impl Rule for LowRatingRule {
    fn name(&self) -> &'static str {
        "low_rating"
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>, thresholds: &ThresholdSet) -> Option<Finding> {
        let rating = ctx.latest.rating?;
        let severity = if rating < thresholds.low_rating_urgent {
            Severity::Urgent
        } else if rating < thresholds.low_rating_warn {
            Severity::Warning
        } else {
            return None;
        };
        Some(Finding {
            rating: Some(rating),
            ..Finding::new(AlertType::LowRating, severity)
        })
    }
}
