use std::collections::BTreeMap;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::alerts::AlertAggregator;
use super::health::{latest_snapshots, summarize};
use super::recommendations::RecommendationGenerator;
use crate::domain::entities::health::HealthSummary;
use crate::domain::entities::location::LocationAlertSet;
use crate::domain::entities::recommendation::Recommendation;
use crate::domain::entities::snapshot::Snapshot;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::store::{LocationDirectory, SnapshotHistoryReader};

/// A location whose history could not be read during an account evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnavailableLocation {
    pub location_id: String,
    pub reason: String,
}

/// Result of evaluating every location of an account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHealthReport {
    pub account_id: String,
    pub generated_at: DateTime<Utc>,
    pub summary: HealthSummary,
    pub locations: Vec<LocationAlertSet>,
    /// Health unknown: these locations are not part of `summary`
    pub unavailable: Vec<UnavailableLocation>,
}

/// Wires the storage ports to the recommendation, alert and summary logic.
pub struct AccountHealthService<'a> {
    directory: &'a dyn LocationDirectory,
    history_reader: &'a dyn SnapshotHistoryReader,
    aggregator: &'a AlertAggregator,
    generator: &'a RecommendationGenerator,
    clock: &'a dyn Clock,
}

impl<'a> AccountHealthService<'a> {
    #[must_use]
    pub fn new(
        directory: &'a dyn LocationDirectory,
        history_reader: &'a dyn SnapshotHistoryReader,
        aggregator: &'a AlertAggregator,
        generator: &'a RecommendationGenerator,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            directory,
            history_reader,
            aggregator,
            generator,
            clock,
        }
    }

    /// Recommendations for a single location.
    ///
    /// # Errors
    ///
    /// Returns an error if the location is unknown or its history cannot be read.
    pub fn location_recommendations(&self, location_id: &str) -> anyhow::Result<Vec<Recommendation>> {
        self.directory
            .location(location_id)
            .with_context(|| format!("failed to look up location {location_id}"))?;
        let history = self
            .history_reader
            .history(location_id)
            .with_context(|| format!("failed to read history of location {location_id}"))?;
        Ok(self.generator.generate(&history, self.clock))
    }

    /// Typed alerts for a single location.
    ///
    /// # Errors
    ///
    /// Returns an error if the location is unknown or its history cannot be read.
    pub fn location_alerts(&self, location_id: &str) -> anyhow::Result<LocationAlertSet> {
        let meta = self
            .directory
            .location(location_id)
            .with_context(|| format!("failed to look up location {location_id}"))?;
        let history = self
            .history_reader
            .history(location_id)
            .with_context(|| format!("failed to read history of location {location_id}"))?;
        Ok(self.aggregator.evaluate_location(&history, &meta, self.clock))
    }

    /// Evaluates every location of an account and folds the results into a summary.
    ///
    /// Locations are processed in ascending id order so the fold is reproducible.
    /// A location whose history cannot be read is reported as unavailable and kept
    /// out of the summary rather than counted as healthy.
    ///
    /// # Errors
    ///
    /// Returns an error if the account's locations cannot be listed.
    pub fn evaluate_account(&self, account_id: &str) -> anyhow::Result<AccountHealthReport> {
        let metas: BTreeMap<String, _> = self
            .directory
            .locations_for_account(account_id)
            .with_context(|| format!("failed to list locations of account {account_id}"))?
            .into_iter()
            .map(|meta| (meta.location_id.clone(), meta))
            .collect();

        let mut histories: BTreeMap<String, Vec<Snapshot>> = BTreeMap::new();
        let mut unavailable = Vec::new();
        for location_id in metas.keys() {
            match self.history_reader.history(location_id) {
                Ok(history) => {
                    histories.insert(location_id.clone(), history);
                }
                Err(e) => {
                    tracing::warn!(location = %location_id, "history unavailable: {e}");
                    unavailable.push(UnavailableLocation {
                        location_id: location_id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let locations: Vec<LocationAlertSet> = histories
            .iter()
            .filter_map(|(location_id, history)| {
                metas
                    .get(location_id)
                    .map(|meta| self.aggregator.evaluate_location(history, meta, self.clock))
            })
            .collect();

        let latest = latest_snapshots(
            histories
                .iter()
                .map(|(location_id, history)| (location_id.as_str(), history.as_slice())),
        );
        let summary = summarize(&locations, &latest);

        tracing::info!(
            account = %account_id,
            locations = summary.locations_count,
            with_alerts = summary.locations_with_alerts,
            unavailable = unavailable.len(),
            "account evaluated"
        );

        Ok(AccountHealthReport {
            account_id: account_id.to_string(),
            generated_at: self.clock.now(),
            summary,
            locations,
            unavailable,
        })
    }
}
