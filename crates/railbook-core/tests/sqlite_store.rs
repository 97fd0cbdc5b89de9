use std::fs;

use railbook_core::{KeyValueStore, QueryResult, Record, RecordService, Response, SqliteStore};
use tempfile::tempdir;

#[test]
fn test_records_survive_reopen() {
    let dir = tempdir().expect("tempdir should be available");
    let path = dir.path().join("nested").join("railbook.db");

    {
        let store = SqliteStore::open(&path).expect("open should create the store");
        let mut service = RecordService::new(store);
        assert!(service.init().is_success());
        assert!(service.invoke("seedLedger", &[]).is_success());
        let args: Vec<String> = ["REC1", "Waitlisted"].iter().map(|s| s.to_string()).collect();
        assert!(service.invoke("updateStatus", &args).is_success());
    }
    assert!(path.exists());
    assert!(!fs::read(&path).expect("read should succeed").is_empty());

    let store = SqliteStore::open(&path).expect("reopen should succeed");
    assert_eq!(store.path(), Some(path.as_path()));
    store.check_integrity().expect("integrity check should pass");

    let bytes = store.get("REC1").unwrap().expect("REC1 should exist");
    assert_eq!(Record::from_bytes(&bytes).unwrap().status, "Waitlisted");

    let mut service = RecordService::new(store);
    let payload = match service.invoke("queryAllRecords", &[]) {
        Response::Success(bytes) => bytes,
        Response::Error(message) => panic!("query failed: {}", message),
    };
    let results: Vec<QueryResult> = serde_json::from_slice(&payload).unwrap();
    let keys: Vec<&str> = results.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["REC0", "REC1", "REC2", "REC3", "REC4"]);
}

#[test]
fn test_sqlite_matches_memory_ordering() {
    let mut store = SqliteStore::open_in_memory().unwrap().with_page_size(3);
    for key in ["REC2", "REC10", "REC1", "REC100", "REC0"] {
        store.put(key, b"{}").unwrap();
    }

    let keys: Vec<String> = store
        .range_scan("REC0", "REC999")
        .unwrap()
        .map(|item| item.unwrap().key)
        .collect();
    assert_eq!(keys, vec!["REC0", "REC1", "REC10", "REC100", "REC2"]);
}

#[test]
fn test_open_rejects_directory_path() {
    let dir = tempdir().expect("tempdir should be available");
    assert!(SqliteStore::open(dir.path()).is_err());
}
