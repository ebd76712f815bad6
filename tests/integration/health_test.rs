use std::collections::BTreeMap;

use listing_health::application::services::account::AccountHealthService;
use listing_health::application::services::alerts::AlertAggregator;
use listing_health::application::services::health::{latest_snapshots, summarize};
use listing_health::application::services::recommendations::RecommendationGenerator;
use listing_health::domain::entities::location::LocationMeta;
use listing_health::domain::entities::snapshot::Snapshot;
use listing_health::domain::ports::clock::FixedClock;
use listing_health::domain::rules::messages::MessageCatalog;
use listing_health::domain::value_objects::thresholds::ThresholdSet;
use listing_health::infrastructure::persistence::in_memory_store::InMemoryStore;

use crate::common::{days, load_fixture, t0};

fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    for (id, name, kind) in [
        ("loc-kiosk", "Kiosk", "kiosk"),
        ("loc-harbor", "Harbor", "restaurant"),
        ("loc-center", "Center", "cafe"),
    ] {
        store
            .insert_location("acme", LocationMeta::new(id, name, kind))
            .expect("insert location");
    }
    for fixture in [
        "stale_location.json",
        "active_location.json",
        "unrated_location.json",
    ] {
        for snapshot in load_fixture(fixture) {
            store.insert_snapshot(snapshot).expect("insert snapshot");
        }
    }
    store
}

fn services() -> (AlertAggregator, RecommendationGenerator) {
    (
        AlertAggregator::new(ThresholdSet::default(), MessageCatalog::default()),
        RecommendationGenerator::new(ThresholdSet::default(), MessageCatalog::default()),
    )
}

#[test]
fn account_summary_folds_latest_snapshots() {
    let store = seeded_store();
    let (aggregator, generator) = services();
    let clock = FixedClock(t0() + days(20));
    let service = AccountHealthService::new(&store, &store, &aggregator, &generator, &clock);

    let report = service.evaluate_account("acme").expect("report");
    let summary = &report.summary;

    assert_eq!(summary.locations_count, 3);
    // 4.3 and 4.7 rated, the kiosk has no rating and is left out of the mean
    assert!((summary.avg_rating - 4.5).abs() < 1e-9);
    assert_eq!(summary.total_reviews, 50 + 45 + 2);
    assert_eq!(summary.unanswered_reviews_count, 3 + 1);
    // loc-center keeps collecting reviews inside the cadence windows
    assert_eq!(summary.locations_with_alerts, 2);
    assert_eq!(summary.alerts_breakdown.unanswered_reviews, 2);
    assert_eq!(summary.alerts_breakdown.stale_reviews, 2);
    assert_eq!(summary.alerts_breakdown.low_rating, 0);
    let alert_count: usize = report.locations.iter().map(|l| l.alerts.len()).sum();
    assert_eq!(summary.alerts_breakdown.total(), alert_count);

    let ids: Vec<&str> = report.locations.iter().map(|l| l.location_id.as_str()).collect();
    assert_eq!(ids, vec!["loc-center", "loc-harbor", "loc-kiosk"]);
}

#[test]
fn account_evaluation_is_reproducible() {
    let store = seeded_store();
    let (aggregator, generator) = services();
    let clock = FixedClock(t0() + days(20));
    let service = AccountHealthService::new(&store, &store, &aggregator, &generator, &clock);

    let first = service.evaluate_account("acme").expect("report");
    let second = service.evaluate_account("acme").expect("report");
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.locations, second.locations);
}

#[test]
fn unknown_account_yields_zero_summary() {
    let store = seeded_store();
    let (aggregator, generator) = services();
    let clock = FixedClock(t0());
    let service = AccountHealthService::new(&store, &store, &aggregator, &generator, &clock);

    let report = service.evaluate_account("nobody").expect("report");
    assert_eq!(report.summary.locations_count, 0);
    assert!(report.summary.avg_rating.abs() < f64::EPSILON);
    assert_eq!(report.summary.alerts_breakdown.total(), 0);
}

#[test]
fn repeated_alert_types_add_up_across_evaluations() {
    let history: Vec<Snapshot> = load_fixture("stale_location.json");
    let (aggregator, _) = services();
    let meta = LocationMeta::new("loc-harbor", "Harbor", "restaurant");
    let clock = FixedClock(t0() + days(20));

    let sets = vec![
        aggregator.evaluate_location(&history, &meta, &clock),
        aggregator.evaluate_location(&history, &meta, &clock),
    ];
    let latest = latest_snapshots([("loc-harbor", history.as_slice())]);
    let summary = summarize(&sets, &latest);

    assert_eq!(summary.alerts_breakdown.stale_news, 2);
    assert_eq!(summary.alerts_breakdown.stale_photos, 2);
    assert_eq!(summary.locations_with_alerts, 2);
}

#[test]
fn location_without_snapshots_counts_but_adds_nothing() {
    let (aggregator, _) = services();
    let clock = FixedClock(t0());
    let meta = LocationMeta::new("loc-new", "New", "cafe");
    let sets = vec![aggregator.evaluate_location(&[], &meta, &clock)];

    let summary = summarize(&sets, &BTreeMap::new());
    assert_eq!(summary.locations_count, 1);
    assert_eq!(summary.total_reviews, 0);
    assert_eq!(summary.locations_with_alerts, 0);
}
