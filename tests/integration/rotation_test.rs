#![allow(clippy::expect_used)]

use coronabot::application::services::rotation::rotate_day;
use coronabot::application::services::snapshots::load_day_baseline;
use coronabot::domain::ports::store::SnapshotStore;
use coronabot::infrastructure::persistence::sqlite_store::SqliteStore;

use crate::support::seed;

#[test]
fn rotation_survives_reopening_the_database() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("coronabot.db");
    let path_str = path.to_string_lossy().to_string();

    {
        let store = SqliteStore::new(&path_str).expect("open");
        seed(&store, "covid-19:current", r#"{"infected":150,"stockholm":42}"#);
        let result = rotate_day(&store).expect("rotate");
        assert!(result.current_present);
    }

    let store = SqliteStore::new(&path_str).expect("reopen");
    assert_eq!(
        store.get("covid-19:yesterday").expect("read"),
        Some(br#"{"infected":150,"stockholm":42}"#.to_vec())
    );
    let day_baseline = load_day_baseline(&store).expect("load");
    assert_eq!(day_baseline.get("stockholm"), 42);
}

#[test]
fn rotation_without_current_clears_yesterday() {
    let store = SqliteStore::open_in_memory().expect("open");
    seed(&store, "covid-19:yesterday", r#"{"infected":99}"#);

    let result = rotate_day(&store).expect("rotate");
    assert!(!result.current_present);
    assert_eq!(result.bytes_copied, 0);
    assert_eq!(store.get("covid-19:yesterday").expect("read"), Some(Vec::new()));
    assert!(load_day_baseline(&store).expect("load").is_empty());
}
