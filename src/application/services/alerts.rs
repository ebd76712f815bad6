use crate::domain::entities::location::{LocationAlertSet, LocationMeta};
use crate::domain::entities::snapshot::{newest_first, Snapshot};
use crate::domain::ports::clock::Clock;
use crate::domain::rules::messages::MessageCatalog;
use crate::domain::rules::{default_rules, RuleEngine};
use crate::domain::value_objects::thresholds::ThresholdSet;

/// Evaluates one location into typed alerts, including the rating check.
pub struct AlertAggregator {
    rule_engine: RuleEngine,
    thresholds: ThresholdSet,
    catalog: MessageCatalog,
}

impl AlertAggregator {
    #[must_use]
    pub fn new(thresholds: ThresholdSet, catalog: MessageCatalog) -> Self {
        Self::with_engine(RuleEngine::new(default_rules()), thresholds, catalog)
    }

    #[must_use]
    pub const fn with_engine(
        rule_engine: RuleEngine,
        thresholds: ThresholdSet,
        catalog: MessageCatalog,
    ) -> Self {
        Self {
            rule_engine,
            thresholds,
            catalog,
        }
    }

    /// Builds the alert set for a location. Alerts keep rule order; callers sort by
    /// severity if they need to. An empty history gives an empty alert list.
    #[must_use]
    pub fn evaluate_location(
        &self,
        history: &[Snapshot],
        meta: &LocationMeta,
        clock: &dyn Clock,
    ) -> LocationAlertSet {
        let alerts: Vec<_> = self
            .rule_engine
            .evaluate(history, clock.now(), &self.thresholds)
            .into_iter()
            .map(|finding| {
                let message = self.catalog.render(&finding);
                finding.into_alert(message)
            })
            .collect();

        tracing::debug!(
            location = %meta.location_id,
            snapshots = history.len(),
            alerts = alerts.len(),
            "location evaluated"
        );

        LocationAlertSet {
            location_id: meta.location_id.clone(),
            location_name: meta.location_name.clone(),
            location_type: meta.location_type.clone(),
            rating: newest_first(history).first().and_then(|s| s.rating),
            alerts,
        }
    }
}
