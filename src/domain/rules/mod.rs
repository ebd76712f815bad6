pub mod messages;
pub mod news;
pub mod photos;
pub mod rating;
pub mod reviews;
pub mod unanswered;

use chrono::{DateTime, Utc};

use crate::domain::entities::alert::Finding;
use crate::domain::entities::snapshot::{elapsed_days, newest_first, Snapshot};
use crate::domain::value_objects::thresholds::ThresholdSet;

/// The two most recent snapshots of a location plus the evaluation instant.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    pub latest: &'a Snapshot,
    pub previous: Option<&'a Snapshot>,
    pub now: DateTime<Utc>,
}

impl<'a> EvaluationContext<'a> {
    /// Picks `latest` and `previous` from an unordered history.
    /// Returns `None` for an empty history.
    #[must_use]
    pub fn from_history(history: &'a [Snapshot], now: DateTime<Utc>) -> Option<Self> {
        let ordered = newest_first(history);
        let latest = *ordered.first()?;
        Some(Self {
            latest,
            previous: ordered.get(1).copied(),
            now,
        })
    }

    /// Whole days from the latest capture to `now`.
    #[must_use]
    pub fn days_since_latest(&self) -> i64 {
        elapsed_days(self.latest.captured_at, self.now)
    }

    /// Whole days between `previous` and `latest`, if there is a previous capture.
    #[must_use]
    pub fn days_between(&self) -> Option<i64> {
        self.previous
            .map(|previous| elapsed_days(previous.captured_at, self.latest.captured_at))
    }
}

/// A deterministic listing rule. Rules are pure: context + thresholds in, at most
/// one finding out. No I/O.
pub trait Rule: Send + Sync {
    /// Returns the unique name of this rule
    fn name(&self) -> &'static str;

    /// Evaluates the rule against the latest/previous pair
    fn evaluate(&self, ctx: &EvaluationContext<'_>, thresholds: &ThresholdSet) -> Option<Finding>;
}

/// Days a metric has gone without growth, if that exceeds `cadence_days`.
///
/// With a previous capture the gap between the pair is measured and the metric must be
/// unchanged. Without one, the age of the latest capture is measured instead.
pub(crate) fn stagnation_days(
    ctx: &EvaluationContext<'_>,
    metric: fn(&Snapshot) -> i64,
    cadence_days: i64,
) -> Option<i64> {
    match (ctx.previous, ctx.days_between()) {
        (Some(previous), Some(gap)) => {
            (metric(ctx.latest) == metric(previous) && gap > cadence_days).then_some(gap)
        }
        _ => {
            let age = ctx.days_since_latest();
            (age > cadence_days).then_some(age)
        }
    }
}

/// Rules behind plain-text recommendations, in output order
#[must_use]
pub fn recommendation_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(unanswered::UnansweredReviewsRule),
        Box::new(reviews::ReviewCadenceRule),
        Box::new(news::NewsCadenceRule),
        Box::new(photos::PhotoCadenceRule),
    ]
}

/// Rules behind typed alerts: the recommendation rules plus the rating check
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    let mut rules = recommendation_rules();
    rules.push(Box::new(rating::LowRatingRule));
    rules
}

/// Engine that runs a fixed, ordered collection of rules against a location's history
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Runs every rule over the history. Findings keep rule order; they are never
    /// re-sorted by severity. An empty history yields no findings.
    #[must_use]
    pub fn evaluate(
        &self,
        history: &[Snapshot],
        now: DateTime<Utc>,
        thresholds: &ThresholdSet,
    ) -> Vec<Finding> {
        let Some(ctx) = EvaluationContext::from_history(history, now) else {
            return Vec::new();
        };
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(&ctx, thresholds))
            .collect()
    }
}
