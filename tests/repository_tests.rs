use chrono::NaiveDate;
use ridelog::{
    AppError, AppResult, EntryId, KeyValueStore, LoadReport, MemoryKv, Persistence, Repository,
    RideCounts, SqliteKv, WorkSessionEntry, DEFAULT_STORAGE_KEY,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn entry(date: NaiveDate, earnings: f64) -> WorkSessionEntry {
    WorkSessionEntry::new(date, earnings, 10.0, 40.0, 4.0, RideCounts::new(2, 1, 0))
}

fn memory_repo() -> Repository<MemoryKv> {
    Repository::init(Persistence::new(MemoryKv::new(), DEFAULT_STORAGE_KEY))
}

/// Store whose writes always fail; reads come from a seeded map.
struct ReadOnlyKv {
    inner: MemoryKv,
}

impl KeyValueStore for ReadOnlyKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }
    fn set(&mut self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Other("quota exceeded".into()))
    }
    fn remove(&mut self, _key: &str) -> AppResult<()> {
        Err(AppError::Other("quota exceeded".into()))
    }
    fn keys(&self) -> AppResult<Vec<String>> {
        self.inner.keys()
    }
}

#[test]
fn fresh_store_starts_empty() {
    let repo = memory_repo();
    assert!(repo.is_empty());
    assert!(matches!(repo.load_report(), LoadReport::Empty));
}

#[test]
fn add_then_list_contains_entry() {
    let mut repo = memory_repo();
    let e = entry(d(2024, 6, 1), 100.0);
    let id = e.id.clone();

    repo.add(e);

    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get(&id).map(|e| e.earnings), Some(100.0));
    assert!(repo.last_flush_error().is_none());
}

#[test]
fn add_on_same_date_replaces_in_place() {
    let mut repo = memory_repo();
    repo.add(entry(d(2024, 6, 1), 100.0));
    repo.add(entry(d(2024, 6, 2), 50.0));

    let replacement = entry(d(2024, 6, 1), 150.0);
    let new_id = replacement.id.clone();
    repo.add(replacement);

    assert_eq!(repo.len(), 2);
    // position preserved
    assert_eq!(repo.list()[0].id, new_id);
    assert_eq!(repo.list()[0].earnings, 150.0);
    assert_eq!(repo.list()[1].date, d(2024, 6, 2));
}

#[test]
fn remove_twice_is_a_noop_the_second_time() {
    let mut repo = memory_repo();
    let e = entry(d(2024, 6, 1), 100.0);
    let id = e.id.clone();
    repo.add(e);
    repo.add(entry(d(2024, 6, 2), 80.0));

    assert!(repo.remove(&id).is_some());
    assert!(repo.remove(&id).is_none());
    assert_eq!(repo.len(), 1);
}

#[test]
fn remove_unknown_id_leaves_entries() {
    let mut repo = memory_repo();
    repo.add(entry(d(2024, 6, 1), 100.0));

    assert!(repo.remove(&EntryId::new("does-not-exist")).is_none());
    assert_eq!(repo.len(), 1);
}

#[test]
fn history_is_newest_first() {
    let mut repo = memory_repo();
    repo.add(entry(d(2024, 5, 20), 1.0));
    repo.add(entry(d(2024, 6, 3), 2.0));
    repo.add(entry(d(2024, 6, 1), 3.0));

    let dates: Vec<NaiveDate> = repo.history().iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![d(2024, 6, 3), d(2024, 6, 1), d(2024, 5, 20)]);
}

#[test]
fn entries_survive_a_reopen() {
    let mut repo = memory_repo();
    let e = entry(d(2024, 6, 1), 100.0);
    repo.add(e.clone());

    let store = repo.close().unwrap();
    let reopened = Repository::init(Persistence::new(store, DEFAULT_STORAGE_KEY));

    assert!(matches!(reopened.load_report(), LoadReport::Restored(1)));
    assert_eq!(reopened.list(), &[e]);
}

#[test]
fn entries_survive_a_reopen_on_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("repo.sqlite");
    let db = db.to_str().unwrap();

    let e = entry(d(2024, 6, 1), 100.0);
    {
        let mut repo = Repository::init(Persistence::new(
            SqliteKv::open(db).unwrap(),
            DEFAULT_STORAGE_KEY,
        ));
        repo.add(e.clone());
    }

    let repo = Repository::init(Persistence::new(
        SqliteKv::open(db).unwrap(),
        DEFAULT_STORAGE_KEY,
    ));
    assert_eq!(repo.list(), &[e]);
}

#[test]
fn corrupt_slot_is_recovered_as_empty() {
    let mut kv = MemoryKv::new();
    kv.set(DEFAULT_STORAGE_KEY, "{not json").unwrap();

    let repo = Repository::init(Persistence::new(kv, DEFAULT_STORAGE_KEY));

    assert!(repo.is_empty());
    assert!(repo.load_report().is_recovered());
    assert!(matches!(
        repo.load_report(),
        LoadReport::Recovered(AppError::Corrupt { .. })
    ));
}

#[test]
fn failed_flush_keeps_in_memory_change() {
    let mut seeded = MemoryKv::new();
    let existing = entry(d(2024, 6, 1), 100.0);
    seeded
        .set(
            DEFAULT_STORAGE_KEY,
            &serde_json::to_string(&vec![existing.clone()]).unwrap(),
        )
        .unwrap();

    let mut repo = Repository::init(Persistence::new(
        ReadOnlyKv { inner: seeded },
        DEFAULT_STORAGE_KEY,
    ));
    assert_eq!(repo.len(), 1);

    repo.add(entry(d(2024, 6, 2), 50.0));

    assert_eq!(repo.len(), 2);
    assert!(repo.last_flush_error().is_some());

    // the backend still holds the old snapshot
    let stored = repo.persistence().load();
    assert_eq!(stored, vec![existing]);
}

#[test]
fn duplicate_dates_in_storage_keep_the_last() {
    let first = entry(d(2024, 6, 1), 100.0);
    let second = entry(d(2024, 6, 1), 200.0);

    let mut kv = MemoryKv::new();
    kv.set(
        DEFAULT_STORAGE_KEY,
        &serde_json::to_string(&vec![first, second.clone()]).unwrap(),
    )
    .unwrap();

    let repo = Repository::init(Persistence::new(kv, DEFAULT_STORAGE_KEY));
    assert_eq!(repo.list(), &[second]);
}

#[test]
fn non_finite_amount_does_not_clobber_stored_history() {
    let mut repo = memory_repo();
    let kept = entry(d(2024, 6, 1), 100.0);
    repo.add(kept.clone());
    assert!(repo.last_flush_error().is_none());

    let mut broken = entry(d(2024, 6, 2), 10.0);
    broken.earnings = f64::NAN;
    repo.add(broken);

    // in memory the change stays, the slot keeps the last good snapshot
    assert_eq!(repo.len(), 2);
    assert!(matches!(
        repo.last_flush_error(),
        Some(AppError::InvalidAmount { field: "earnings", .. })
    ));
    assert_eq!(repo.persistence().load_checked().unwrap(), Some(vec![kept.clone()]));

    // dropping the bad entry lets the next flush through
    let bad_id = repo.find_by_date(d(2024, 6, 2)).unwrap().id.clone();
    repo.remove(&bad_id);
    assert!(repo.last_flush_error().is_none());

    let store = repo.close().unwrap();
    let reopened = Repository::init(Persistence::new(store, DEFAULT_STORAGE_KEY));
    assert!(matches!(reopened.load_report(), LoadReport::Restored(1)));
    assert_eq!(reopened.list(), &[kept]);
}
