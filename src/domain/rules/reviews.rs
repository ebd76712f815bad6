use crate::domain::entities::alert::{AlertType, Finding};
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::{EvaluationContext, Rule};

/// Reviews must keep arriving.
///
/// Two clocks are involved. The trigger compares the latest pair of captures: no new
/// reviews across a gap longer than `review_cadence_days`. The wording (and typed
/// severity) escalates when the latest capture itself is older than
/// `review_stale_days` relative to now. With a single capture only the second clock
/// applies. Growth between the pair suppresses the rule however old the data is.
pub struct ReviewCadenceRule;

impl Rule for ReviewCadenceRule {
    fn name(&self) -> &'static str {
        "review_cadence"
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>, thresholds: &ThresholdSet) -> Option<Finding> {
        let age = ctx.days_since_latest();
        let long_stale = age > thresholds.review_stale_days;

        // `days_since` and `threshold` always come from the same clock
        let (days_since, threshold) = match (ctx.previous, ctx.days_between()) {
            (Some(previous), Some(gap)) => {
                if ctx.latest.reviews_count != previous.reviews_count
                    || gap <= thresholds.review_cadence_days
                {
                    return None;
                }
                (gap, thresholds.review_cadence_days)
            }
            _ if long_stale => (age, thresholds.review_stale_days),
            _ => return None,
        };

        let severity = if long_stale {
            Severity::Urgent
        } else {
            Severity::Warning
        };

        Some(Finding {
            days_since: Some(days_since),
            threshold: Some(threshold),
            long_stale,
            ..Finding::new(AlertType::StaleReviews, severity)
        })
    }
}
