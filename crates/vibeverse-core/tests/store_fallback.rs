mod common;
use common::BrokenStore;
use std::sync::Arc;
use vibeverse_core::store::keys;
use vibeverse_core::{FileStore, KvStore, MemStore, Prefs, Quote};

#[test]
fn broken_store_reads_fallback_and_drops_writes() {
    let prefs = Prefs::new(Arc::new(BrokenStore));
    assert_eq!(prefs.get_string(keys::THEME, "dark"), "dark");
    prefs.set_string(keys::THEME, "light");
    prefs.set_json(keys::QUOTES, &vec![Quote::from_input("a", "b").unwrap()]);
    let quotes: Vec<Quote> = prefs.get_json(keys::QUOTES, Vec::new());
    assert!(quotes.is_empty());
}

#[test]
fn corrupt_and_empty_json_fall_back() {
    let store = Arc::new(MemStore::with_entries([
        (keys::QUOTES, "{not json"),
        (keys::FAVORITES, ""),
    ]));
    let prefs = Prefs::new(store);
    let quotes: Vec<Quote> = prefs.get_json(keys::QUOTES, Vec::new());
    assert!(quotes.is_empty());
    let favs: Vec<Quote> = prefs.get_json(keys::FAVORITES, Vec::new());
    assert!(favs.is_empty());
}

#[test]
fn catalog_and_favorites_survive_a_file_store_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("storage.json");
    let items = vec![
        Quote::from_input("First", "One").unwrap(),
        Quote::from_input("Second", "").unwrap(),
        Quote::from_input("Third", "Three").unwrap(),
    ];

    let prefs = Prefs::new(Arc::new(FileStore::new(&path)));
    prefs.set_json(keys::QUOTES, &items);
    prefs.set_json(keys::FAVORITES, &items[1..]);

    let reopened = Prefs::new(Arc::new(FileStore::new(&path)));
    let quotes: Vec<Quote> = reopened.get_json(keys::QUOTES, Vec::new());
    let favs: Vec<Quote> = reopened.get_json(keys::FAVORITES, Vec::new());
    assert_eq!(quotes, items);
    assert_eq!(favs, items[1..].to_vec());
}

#[test]
fn file_store_quota_rejects_large_writes() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("s.json")).with_quota(64);
    store.set("k", "small").unwrap();
    assert!(store.set("big", &"x".repeat(200)).is_err());
    // the rejected write left earlier data alone
    assert_eq!(store.get("k").unwrap().as_deref(), Some("small"));
    assert_eq!(store.get("big").unwrap(), None);
}

#[test]
fn corrupt_file_store_reads_fail_but_prefs_recover() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("s.json");
    std::fs::write(&path, "garbage").unwrap();
    let store = Arc::new(FileStore::new(&path));
    assert!(store.get(keys::THEME).is_err());

    let prefs = Prefs::new(store.clone());
    assert_eq!(prefs.get_string(keys::THEME, "dark"), "dark");
    prefs.set_string(keys::THEME, "light");
    assert_eq!(prefs.get_string(keys::THEME, "dark"), "light");
}

#[test]
fn records_without_id_or_source_get_defaults() {
    let store = Arc::new(MemStore::with_entries([(
        keys::QUOTES,
        r#"[{"text":"Breathe."}]"#,
    )]));
    let prefs = Prefs::new(store);
    let quotes: Vec<Quote> = prefs.get_json(keys::QUOTES, Vec::new());
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].source, "—");
    assert!(!quotes[0].id.is_empty());
}
