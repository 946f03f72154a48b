use std::fs;

use tempfile::TempDir;

use super::*;

fn temp_paths() -> (TempDir, StorePaths) {
    let dir = TempDir::new().expect("tempdir should be created");
    let paths = StorePaths::in_dir(dir.path());
    (dir, paths)
}

#[test]
fn absent_files_load_as_empty_stores() {
    let (_dir, paths) = temp_paths();
    let set = AliasStore::new(&paths).load().expect("load should succeed");
    assert!(set.aliases.is_empty());
    let log = HistoryStore::new(&paths).load().expect("load should succeed");
    assert!(log.recent.is_empty());
}

#[test]
fn add_then_resolve_returns_url() {
    let (_dir, paths) = temp_paths();
    let store = AliasStore::new(&paths);
    store
        .add("lofi", "https://example/watch?v=x")
        .expect("add should succeed");
    let url = store.resolve("lofi").expect("alias should resolve");
    assert_eq!(url, "https://example/watch?v=x");
}

#[test]
fn latest_add_wins_on_overwrite() {
    let (_dir, paths) = temp_paths();
    let store = AliasStore::new(&paths);
    store
        .add("lofi", "https://example/watch?v=x")
        .expect("first add should succeed");
    store
        .add("lofi", "https://example/watch?v=y")
        .expect("second add should succeed");

    let set = store.load().expect("load should succeed");
    assert_eq!(set.aliases.len(), 1);
    assert_eq!(
        store.resolve("lofi").expect("alias should resolve"),
        "https://example/watch?v=y"
    );
}

#[test]
fn alias_set_round_trips_through_save_and_load() {
    let (_dir, paths) = temp_paths();
    let store = AliasStore::new(&paths);

    let mut set = AliasSet::default();
    set.aliases
        .insert("lofi".to_string(), "https://example/a".to_string());
    set.aliases
        .insert("news".to_string(), "https://example/b".to_string());

    store.save(&set).expect("save should succeed");
    let reloaded = store.load().expect("load should succeed");
    assert_eq!(reloaded, set);

    // save(load()) is a no-op for subsequent loads
    store.save(&reloaded).expect("re-save should succeed");
    assert_eq!(store.load().expect("reload should succeed"), set);
}

#[test]
fn remove_then_resolve_fails_with_not_found() {
    let (_dir, paths) = temp_paths();
    let store = AliasStore::new(&paths);
    store
        .add("lofi", "https://example/watch?v=x")
        .expect("add should succeed");
    store.remove("lofi").expect("remove should succeed");

    let err = store.resolve("lofi").expect_err("resolve should fail");
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn remove_of_missing_alias_leaves_set_untouched() {
    let (_dir, paths) = temp_paths();
    let store = AliasStore::new(&paths);
    store
        .add("news", "https://example/b")
        .expect("add should succeed");

    let err = store.remove("lofi").expect_err("remove should fail");
    assert!(matches!(err, StoreError::NotFound { .. }));

    let set = store.load().expect("load should succeed");
    assert_eq!(set.aliases.len(), 1);
    assert!(set.aliases.contains_key("news"));
}

#[test]
fn history_is_most_recent_first() {
    let (_dir, paths) = temp_paths();
    let store = HistoryStore::new(&paths);
    store
        .record("first", "https://example/1", false)
        .expect("record should succeed");
    store
        .record("second", "https://example/2", true)
        .expect("record should succeed");

    let recent = store.recent().expect("recent should succeed");
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].alias, "second");
    assert!(recent[0].video_mode);
    assert_eq!(recent[1].alias, "first");
    assert!(!recent[1].video_mode);
}

#[test]
fn history_is_truncated_to_limit() {
    let (_dir, paths) = temp_paths();
    let store = HistoryStore::new(&paths);
    for i in 1..=5 {
        store
            .record(&format!("e{i}"), &format!("https://example/{i}"), false)
            .expect("record should succeed");
    }

    let recent = store.recent().expect("recent should succeed");
    assert_eq!(recent.len(), HISTORY_LIMIT);
    let aliases: Vec<&str> = recent.iter().map(|entry| entry.alias.as_str()).collect();
    assert_eq!(aliases, vec!["e5", "e4", "e3"]);
}

#[test]
fn history_log_round_trips_through_save_and_load() {
    let (_dir, paths) = temp_paths();
    let store = HistoryStore::new(&paths);
    store
        .record("lofi", "https://example/watch?v=x", true)
        .expect("record should succeed");

    let log = store.load().expect("load should succeed");
    store.save(&log).expect("re-save should succeed");
    assert_eq!(store.load().expect("reload should succeed"), log);
}

#[test]
fn malformed_alias_file_is_a_parse_error() {
    let (_dir, paths) = temp_paths();
    fs::create_dir_all(paths.aliases.parent().expect("parent dir")).expect("mkdir");
    fs::write(&paths.aliases, "not json at all").expect("write should succeed");

    let err = AliasStore::new(&paths)
        .load()
        .expect_err("load should fail");
    assert!(matches!(err, StoreError::Parse { .. }));
}

#[test]
fn missing_fields_decode_as_empty_collections() {
    let (_dir, paths) = temp_paths();
    fs::create_dir_all(paths.aliases.parent().expect("parent dir")).expect("mkdir");
    fs::write(&paths.aliases, "{}").expect("write should succeed");
    fs::write(&paths.history, "{}").expect("write should succeed");

    let set = AliasStore::new(&paths).load().expect("load should succeed");
    assert!(set.aliases.is_empty());
    let log = HistoryStore::new(&paths).load().expect("load should succeed");
    assert!(log.recent.is_empty());
}

#[test]
fn first_run_flips_after_first_write() {
    let (_dir, paths) = temp_paths();
    assert!(first_run(&paths));

    AliasStore::new(&paths)
        .add("lofi", "https://example/watch?v=x")
        .expect("add should succeed");
    assert!(!first_run(&paths));
}

#[test]
fn first_run_flips_after_first_recorded_play() {
    let (_dir, paths) = temp_paths();
    assert!(first_run(&paths));

    HistoryStore::new(&paths)
        .record("lofi", "https://example/watch?v=x", false)
        .expect("record should succeed");
    assert!(!first_run(&paths));
}
