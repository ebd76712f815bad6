use rusqlite::{params, Connection};

use listing_health::application::services::account::AccountHealthService;
use listing_health::application::services::alerts::AlertAggregator;
use listing_health::application::services::recommendations::RecommendationGenerator;
use listing_health::domain::entities::alert::AlertType;
use listing_health::domain::ports::clock::FixedClock;
use listing_health::domain::ports::store::{HistoryError, SnapshotHistoryReader};
use listing_health::domain::rules::messages::MessageCatalog;
use listing_health::domain::value_objects::thresholds::ThresholdSet;
use listing_health::infrastructure::persistence::sqlite_store::SqliteStore;

use crate::common::{days, load_fixture, t0};

fn open_store(dir: &tempfile::TempDir) -> (SqliteStore, Connection) {
    let path = dir.path().join("data").join("snapshots.db");
    let store = SqliteStore::new(path.to_str().expect("utf-8 path")).expect("open store");
    let conn = Connection::open(&path).expect("open seed connection");
    (store, conn)
}

fn seed_fixtures(conn: &Connection) {
    conn.execute_batch(
        "INSERT INTO locations VALUES ('loc-harbor', 'acme', 'Harbor', 'restaurant');
         INSERT INTO locations VALUES ('loc-center', 'acme', 'Center', 'cafe');",
    )
    .expect("seed locations");
    for fixture in ["stale_location.json", "active_location.json"] {
        for s in load_fixture(fixture) {
            conn.execute(
                "INSERT INTO snapshots VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    s.id,
                    s.location_id,
                    s.captured_at.to_rfc3339(),
                    s.rating,
                    s.reviews_count,
                    s.unanswered_reviews_count,
                    s.news_count,
                    s.photos_count,
                    s.report_path
                ],
            )
            .expect("seed snapshot");
        }
    }
}

#[test]
fn sqlite_history_matches_fixture() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (store, conn) = open_store(&dir);
    seed_fixtures(&conn);

    let history = store.history("loc-center").expect("history");
    let mut expected = load_fixture("active_location.json");
    expected.reverse();
    assert_eq!(history, expected);
}

#[test]
fn account_summary_over_sqlite() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (store, conn) = open_store(&dir);
    seed_fixtures(&conn);

    let aggregator = AlertAggregator::new(ThresholdSet::default(), MessageCatalog::default());
    let generator =
        RecommendationGenerator::new(ThresholdSet::default(), MessageCatalog::default());
    let clock = FixedClock(t0() + days(20));
    let service = AccountHealthService::new(&store, &store, &aggregator, &generator, &clock);

    let report = service.evaluate_account("acme").expect("report");
    assert_eq!(report.summary.locations_count, 2);
    assert_eq!(report.summary.locations_with_alerts, 1);
    assert_eq!(report.summary.total_reviews, 95);
    assert!(report.unavailable.is_empty());

    let harbor = &report.locations[1];
    assert_eq!(harbor.location_id, "loc-harbor");
    assert_eq!(harbor.alerts[0].alert_type, AlertType::UnansweredReviews);

    let recommendations = service
        .location_recommendations("loc-harbor")
        .expect("recommendations");
    assert_eq!(recommendations.len(), 4);
}

#[test]
fn corrupt_timestamp_is_reported_as_corrupt() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (store, conn) = open_store(&dir);
    conn.execute_batch(
        "INSERT INTO locations VALUES ('loc-bad', 'acme', 'Bad', 'cafe');
         INSERT INTO snapshots VALUES
            ('x1', 'loc-bad', 'yesterday', 4.0, 1, 0, 0, 0, NULL);",
    )
    .expect("seed");

    let err = store.history("loc-bad").expect_err("corrupt row");
    assert!(matches!(err, HistoryError::Corrupt(_)));

    let aggregator = AlertAggregator::new(ThresholdSet::default(), MessageCatalog::default());
    let generator =
        RecommendationGenerator::new(ThresholdSet::default(), MessageCatalog::default());
    let clock = FixedClock(t0());
    let service = AccountHealthService::new(&store, &store, &aggregator, &generator, &clock);
    let report = service.evaluate_account("acme").expect("report");
    assert_eq!(report.summary.locations_count, 0);
    assert_eq!(report.unavailable.len(), 1);
    assert_eq!(report.unavailable[0].location_id, "loc-bad");
}
