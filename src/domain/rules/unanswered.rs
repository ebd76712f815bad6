use crate::domain::entities::alert::{AlertType, Finding};
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::{EvaluationContext, Rule};

pub struct UnansweredReviewsRule;

impl Rule for UnansweredReviewsRule {
    fn name(&self) -> &'static str {
        "unanswered_reviews"
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>, _: &ThresholdSet) -> Option<Finding> {
        let pending = ctx.latest.unanswered_reviews_count;
        (pending > 0).then(|| Finding {
            count: Some(pending),
            ..Finding::new(AlertType::UnansweredReviews, Severity::Urgent)
        })
    }
}
