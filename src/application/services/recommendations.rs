use crate::domain::entities::recommendation::Recommendation;
use crate::domain::entities::snapshot::Snapshot;
use crate::domain::ports::clock::Clock;
use crate::domain::rules::messages::MessageCatalog;
use crate::domain::rules::{recommendation_rules, RuleEngine};
use crate::domain::value_objects::thresholds::ThresholdSet;

/// Turns a location's snapshot history into plain-text advice.
///
/// Runs the unanswered/review/news/photo rules in that order and renders each
/// finding through the message catalog. The rating rule is not part of this path.
pub struct RecommendationGenerator {
    rule_engine: RuleEngine,
    thresholds: ThresholdSet,
    catalog: MessageCatalog,
}

impl RecommendationGenerator {
    #[must_use]
    pub fn new(thresholds: ThresholdSet, catalog: MessageCatalog) -> Self {
        Self {
            rule_engine: RuleEngine::new(recommendation_rules()),
            thresholds,
            catalog,
        }
    }

    /// Generates recommendations for one location. History may be in any order;
    /// an empty history yields no recommendations.
    #[must_use]
    pub fn generate(&self, history: &[Snapshot], clock: &dyn Clock) -> Vec<Recommendation> {
        self.rule_engine
            .evaluate(history, clock.now(), &self.thresholds)
            .iter()
            .map(|finding| Recommendation {
                message: self.catalog.render(finding),
            })
            .collect()
    }
}
