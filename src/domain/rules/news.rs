use crate::domain::entities::alert::{AlertType, Finding};
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::{stagnation_days, EvaluationContext, Rule};

/// News posts should go out weekly; alert only after `news_cadence_days` of silence.
pub struct NewsCadenceRule;

impl Rule for NewsCadenceRule {
    fn name(&self) -> &'static str {
        "news_cadence"
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>, thresholds: &ThresholdSet) -> Option<Finding> {
        let days = stagnation_days(ctx, |s| s.news_count, thresholds.news_cadence_days)?;
        Some(Finding {
            days_since: Some(days),
            threshold: Some(thresholds.news_cadence_days),
            ..Finding::new(AlertType::StaleNews, Severity::Warning)
        })
    }
}
