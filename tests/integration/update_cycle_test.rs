#![allow(clippy::expect_used)]

use coronabot::application::config::JsonSourceConfig;
use coronabot::application::services::rotation::rotate_day;
use coronabot::application::services::update::UpdateService;
use coronabot::domain::diff::DiffEngine;
use coronabot::domain::ports::store::SnapshotStore;
use coronabot::infrastructure::persistence::in_memory_store::InMemoryStore;
use coronabot::infrastructure::sources::json_extractor::JsonExtractor;

use crate::support::{seed, stored_snapshot, FixtureFetcher, TrackingNotifier};

const URL: &str = "https://example.org/api/covid";
const CURRENT: &str = "covid-19:current";
const YESTERDAY: &str = "covid-19:yesterday";

fn engine() -> DiffEngine {
    DiffEngine::new(["stockholm"])
}

fn extractor() -> JsonExtractor {
    JsonExtractor::new(&JsonSourceConfig::default())
}

// ---------------------------------------------------------------------------
// First run and idempotence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn first_run_reports_everything_and_second_run_is_silent() {
    let fetcher = FixtureFetcher::new(&["source.json", "source.json"]);
    let extractor = extractor();
    let store = InMemoryStore::new();
    let notifier = TrackingNotifier::new();
    let engine = engine();
    let service = UpdateService::new(&fetcher, &extractor, &store, &notifier, &engine, URL);

    let first = service.run_once(false).await.expect("first run");
    assert!(first.notified);
    assert!(first.persisted);

    let updates = notifier.updates();
    assert_eq!(updates.len(), 1);
    let infected = updates[0].delta("infected").expect("infected delta");
    assert_eq!((infected.value, infected.updated, infected.today), (150, 150, 150));
    let stockholm = updates[0].delta("stockholm").expect("stockholm delta");
    assert_eq!(stockholm.updated, 42);

    let current_after_first = store.get(CURRENT).expect("read").expect("current written");

    let second = service.run_once(false).await.expect("second run");
    assert!(!second.notified);
    assert!(!second.persisted);
    assert_eq!(notifier.updates().len(), 1);
    assert_eq!(
        store.get(CURRENT).expect("read").expect("current kept"),
        current_after_first
    );
    assert!(store.get(YESTERDAY).expect("read").is_none());
}

#[tokio::test]
async fn forced_run_notifies_without_changes() {
    let fetcher = FixtureFetcher::new(&["source.json", "source.json"]);
    let extractor = extractor();
    let store = InMemoryStore::new();
    let notifier = TrackingNotifier::new();
    let engine = engine();
    let service = UpdateService::new(&fetcher, &extractor, &store, &notifier, &engine, URL);

    service.run_once(false).await.expect("first run");
    let forced = service.run_once(true).await.expect("forced run");

    assert!(forced.notified);
    assert_eq!(forced.changed_metrics, 0);
    let updates = notifier.updates();
    assert_eq!(updates.len(), 2);
    assert!(updates[1].forced);
    assert!(updates[1].deltas.iter().all(|d| d.updated == 0));
}

// ---------------------------------------------------------------------------
// Day rotation feeds the "today" deltas
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rotation_resets_today_deltas() {
    let fetcher = FixtureFetcher::new(&["source.json", "source_updated.json"]);
    let extractor = extractor();
    let store = InMemoryStore::new();
    let notifier = TrackingNotifier::new();
    let engine = engine();
    let service = UpdateService::new(&fetcher, &extractor, &store, &notifier, &engine, URL);

    service.run_once(false).await.expect("morning run");
    rotate_day(&store).expect("midnight rotation");

    let yesterday = stored_snapshot(&store, YESTERDAY).expect("yesterday written");
    assert_eq!(yesterday.get("infected"), 150);

    service.run_once(false).await.expect("next day run");
    let updates = notifier.updates();
    let infected = updates[1].delta("infected").expect("infected delta");
    assert_eq!((infected.value, infected.updated, infected.today), (170, 20, 20));
    let stockholm = updates[1].delta("stockholm").expect("stockholm delta");
    assert_eq!((stockholm.updated, stockholm.today), (3, 3));
}

#[tokio::test]
async fn same_day_updates_accumulate_today() {
    let store = InMemoryStore::new();
    seed(&store, CURRENT, r#"{"infected":160,"stockholm":44}"#);
    seed(&store, YESTERDAY, r#"{"infected":140,"stockholm":40}"#);

    let fetcher = FixtureFetcher::new(&["source_updated.json"]);
    let extractor = extractor();
    let notifier = TrackingNotifier::new();
    let engine = engine();
    let service = UpdateService::new(&fetcher, &extractor, &store, &notifier, &engine, URL);

    service.run_once(false).await.expect("run");
    let report = &notifier.updates()[0];
    let infected = report.delta("infected").expect("infected delta");
    assert_eq!((infected.updated, infected.today), (10, 30));
    let stockholm = report.delta("stockholm").expect("stockholm delta");
    assert_eq!((stockholm.updated, stockholm.today), (1, 5));
}

// ---------------------------------------------------------------------------
// Stored state edge cases
// ---------------------------------------------------------------------------

#[tokio::test]
async fn legacy_keys_seed_the_first_baseline() {
    let store = InMemoryStore::new();
    seed(&store, "covid-19:total", "120");
    seed(&store, "covid-19:stockholm", "40");

    let fetcher = FixtureFetcher::new(&["source.json"]);
    let extractor = extractor();
    let notifier = TrackingNotifier::new();
    let engine = engine();
    let service = UpdateService::new(&fetcher, &extractor, &store, &notifier, &engine, URL);

    service.run_once(false).await.expect("run");
    let report = &notifier.updates()[0];
    assert_eq!(report.delta("infected").expect("infected").updated, 30);
    assert_eq!(report.delta("stockholm").expect("stockholm").updated, 2);

    let current = stored_snapshot(&store, CURRENT).expect("current written");
    assert_eq!(current.get("infected"), 150);
    assert_eq!(
        store.get("covid-19:total").expect("read"),
        Some(b"120".to_vec())
    );
}

#[tokio::test]
async fn corrupt_current_is_treated_as_empty() {
    let store = InMemoryStore::new();
    seed(&store, CURRENT, "not json at all");

    let fetcher = FixtureFetcher::new(&["source.json"]);
    let extractor = extractor();
    let notifier = TrackingNotifier::new();
    let engine = engine();
    let service = UpdateService::new(&fetcher, &extractor, &store, &notifier, &engine, URL);

    let result = service.run_once(false).await.expect("run");
    assert!(result.notified);
    assert_eq!(
        notifier.updates()[0].delta("infected").expect("infected").updated,
        150
    );
    let current = stored_snapshot(&store, CURRENT).expect("current rewritten");
    assert_eq!(current.get("stockholm"), 42);
}

#[tokio::test]
async fn pending_regional_zero_keeps_previous_value() {
    let store = InMemoryStore::new();
    seed(&store, CURRENT, r#"{"infected":150,"stockholm":42}"#);

    let fetcher = FixtureFetcher::new(&["source_region_pending.json"]);
    let extractor = extractor();
    let notifier = TrackingNotifier::new();
    let engine = engine();
    let service = UpdateService::new(&fetcher, &extractor, &store, &notifier, &engine, URL);

    let result = service.run_once(false).await.expect("run");
    assert!(result.notified);

    let current = stored_snapshot(&store, CURRENT).expect("current written");
    assert_eq!(current.get("infected"), 160);
    assert_eq!(current.get("stockholm"), 42);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_source_fails_without_side_effects() {
    let store = InMemoryStore::new();
    seed(&store, CURRENT, r#"{"infected":150,"stockholm":42}"#);

    let fetcher = FixtureFetcher::new(&["source.html"]);
    let extractor = extractor();
    let notifier = TrackingNotifier::new();
    let engine = engine();
    let service = UpdateService::new(&fetcher, &extractor, &store, &notifier, &engine, URL);

    let err = service.run_once(false).await.expect_err("html is not json");
    assert!(format!("{err:#}").contains("Failed to extract statistics"));
    assert!(notifier.updates().is_empty());
    assert_eq!(
        store.get(CURRENT).expect("read"),
        Some(br#"{"infected":150,"stockholm":42}"#.to_vec())
    );
}

#[tokio::test]
async fn fetch_failure_is_reported_as_error() {
    let store = InMemoryStore::new();
    let fetcher = FixtureFetcher::new(&[]);
    let extractor = extractor();
    let notifier = TrackingNotifier::new();
    let engine = engine();
    let service = UpdateService::new(&fetcher, &extractor, &store, &notifier, &engine, URL);

    let err = service.run_once(false).await.expect_err("no body");
    assert!(format!("{err:#}").contains("Failed to fetch statistics"));
    assert!(store.get(CURRENT).expect("read").is_none());
}
