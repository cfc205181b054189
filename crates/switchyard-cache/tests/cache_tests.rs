// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the on-disk response cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use switchyard_cache::ResponseCache;
use switchyard_config::model::CacheConfig;
use switchyard_core::SwitchyardError;

fn cache_config(path: &Path, enabled: bool) -> CacheConfig {
    CacheConfig {
        enabled,
        path: path.display().to_string(),
    }
}

fn nested_path(dir: &Path) -> PathBuf {
    dir.join("data").join("cache").join("query_cache.json")
}

#[test]
fn round_trip_preserves_fields() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ResponseCache::open(&cache_config(&nested_path(dir.path()), true)).unwrap();

    cache
        .set("What is the capital of France?", "Paris.", "gemini-1.5-flash-latest", "simple")
        .unwrap();

    let entry = cache.get("What is the capital of France?").expect("entry should exist");
    assert_eq!(entry.response, "Paris.");
    assert_eq!(entry.model, "gemini-1.5-flash-latest");
    assert_eq!(entry.complexity, "simple");
    assert_eq!(entry.response_length, 6);
}

#[test]
fn entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = nested_path(dir.path());
    {
        let cache = ResponseCache::open(&cache_config(&path, true)).unwrap();
        cache.set("q1", "answer one", "m-simple", "simple").unwrap();
        cache.set("q2", "answer two", "m-advanced", "medium").unwrap();
    }

    let reopened = ResponseCache::open(&cache_config(&path, true)).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.get("q2").unwrap().model, "m-advanced");
    assert_eq!(reopened.get("q2").unwrap().complexity, "medium");
}

#[test]
fn store_format_is_pretty_json_keyed_by_query() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    let cache = ResponseCache::open(&cache_config(&path, true)).unwrap();
    cache.set("¿Dónde está Madrid?", "En España.", "m", "simple").unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\n  \""), "two-space indentation expected");
    assert!(raw.contains("¿Dónde está Madrid?"), "non-ASCII must not be escaped");

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &value["¿Dónde está Madrid?"];
    for key in ["query", "response", "model", "complexity", "timestamp", "date", "response_length"] {
        assert!(record.get(key).is_some(), "record missing `{key}`");
    }
    assert_eq!(record["response_length"], 10);
}

#[test]
fn missing_file_is_empty_cache() {
    let dir = tempfile::tempdir().unwrap();
    let cache = ResponseCache::open(&cache_config(&nested_path(dir.path()), true)).unwrap();
    assert!(cache.is_empty());
    assert!(cache.get("anything").is_none());
}

#[test]
fn corrupt_file_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = ResponseCache::open(&cache_config(&path, true))
        .err()
        .expect("corrupt store must not open");
    match err {
        SwitchyardError::CacheIo { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected CacheIo, got {other:?}"),
    }
    // The corrupt file is left in place for inspection.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn unreadable_path_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    // Reading a directory as a file is an I/O error, not "missing".
    let err = ResponseCache::open(&cache_config(dir.path(), true))
        .err()
        .expect("directory is not a cache file");
    assert!(matches!(err, SwitchyardError::CacheIo { .. }));
}

#[test]
fn legacy_records_get_unknown_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    std::fs::write(&path, r#"{"old query": {"response": "old answer"}}"#).unwrap();

    let cache = ResponseCache::open(&cache_config(&path, true)).unwrap();
    let entry = cache.get("old query").unwrap();
    assert_eq!(entry.query, "old query");
    assert_eq!(entry.model, "unknown");
    assert_eq!(entry.complexity, "unknown");
    assert_eq!(entry.timestamp, 0.0);
}

#[test]
fn clear_removes_entries_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    let cache = ResponseCache::open(&cache_config(&path, true)).unwrap();
    cache.set("q", "response", "m", "simple").unwrap();
    assert!(path.exists());

    cache.clear().unwrap();
    assert!(cache.is_empty());
    assert!(!path.exists());

    // Clearing again with no file is fine.
    cache.clear().unwrap();
}

#[test]
fn disabled_cache_never_touches_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = nested_path(dir.path());
    let cache = ResponseCache::open(&cache_config(&path, false)).unwrap();

    assert!(!cache.is_enabled());
    assert!(cache.get("q").is_none());
    cache.set("q", "response", "m", "simple").unwrap();
    assert!(cache.get("q").is_none());
    cache.clear().unwrap();

    assert!(!path.exists());
    assert!(!dir.path().join("data").exists(), "no directories may be created");
}

#[test]
fn disabled_cache_ignores_existing_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    std::fs::write(&path, "{ corrupt but ignored").unwrap();

    let cache = ResponseCache::open(&cache_config(&path, false)).unwrap();
    cache.set("q", "r", "m", "simple").unwrap();
    cache.clear().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ corrupt but ignored");
}

#[test]
fn concurrent_sets_are_not_lost() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    let cache = Arc::new(ResponseCache::open(&cache_config(&path, true)).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || {
                for j in 0..5 {
                    cache
                        .set(&format!("query {i}-{j}"), "response", "m", "medium")
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 40);
    let reopened = ResponseCache::open(&cache_config(&path, true)).unwrap();
    assert_eq!(reopened.len(), 40);
}
