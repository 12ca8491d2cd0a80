use std::io::Write;

use context_core::{IRecordStore, Measurement};
use context_storage::{InMemoryStore, NdjsonStore};
use test_fixtures::{auth_payment_log, measurement};

fn temp_store() -> (tempfile::TempDir, NdjsonStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = NdjsonStore::open(dir.path().join("nested").join("graph.ndjson"));
    (dir, store)
}

#[test]
fn missing_file_is_empty_store() {
    let (_dir, store) = temp_store();
    assert!(store.load_all().unwrap().is_empty());
    assert!(store.load("auth").unwrap().is_empty());
}

#[test]
fn append_creates_parent_and_preserves_order() {
    let (_dir, store) = temp_store();
    for m in auth_payment_log() {
        store.append(&m).unwrap();
    }

    let all = store.load_all().unwrap();
    let objects: Vec<&str> = all.iter().map(|m| m.object.as_str()).collect();
    assert_eq!(objects, vec!["identity", "database", "card", "database"]);

    let auth = store.load("auth").unwrap();
    assert_eq!(auth.len(), 2);
    assert!(auth.iter().all(|m| m.subject == "auth"));
}

#[test]
fn load_matches_subject_exactly() {
    let (_dir, store) = temp_store();
    store.append(&measurement("auth", "uses", "a", 0.5, "x")).unwrap();
    store.append(&measurement("authz", "uses", "b", 0.5, "x")).unwrap();
    store.append(&measurement("Auth", "uses", "c", 0.5, "x")).unwrap();

    let auth = store.load("auth").unwrap();
    assert_eq!(auth.len(), 1);
    assert_eq!(auth[0].object, "a");
}

#[test]
fn one_line_per_record() {
    let (_dir, store) = temp_store();
    for m in auth_payment_log() {
        store.append(&m).unwrap();
    }
    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw.lines().count(), 4);
    for line in raw.lines() {
        let _: serde_json::Value = serde_json::from_str(line).unwrap();
    }
}

#[test]
fn extra_fields_survive_persistence() {
    let (_dir, store) = temp_store();
    let mut m = measurement("auth", "uses", "jwt", 0.5, "alice");
    m.extra
        .insert("ticket".to_string(), serde_json::Value::from("SEC-12"));
    store.append(&m).unwrap();

    let loaded = store.load("auth").unwrap();
    assert_eq!(loaded[0].extra["ticket"], "SEC-12");
    assert_eq!(loaded[0], m);
}

#[test]
fn torn_final_line_is_skipped() {
    let (_dir, store) = temp_store();
    store.append(&measurement("auth", "uses", "jwt", 0.5, "alice")).unwrap();
    {
        let mut f = std::fs::OpenOptions::new()
            .append(true)
            .open(store.path())
            .unwrap();
        f.write_all(b"{\"subject\":\"auth\",\"predic").unwrap();
    }
    let loaded = store.load_all().unwrap();
    assert_eq!(loaded.len(), 1);
}

#[test]
fn null_timestamp_record_is_kept() {
    let (_dir, store) = temp_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(
        store.path(),
        concat!(
            "{\"subject\":\"a\",\"predicate\":\"requires\",\"object\":\"b\",\"timestamp\":null}\n",
            "{\"subject\":\"a\",\"predicate\":\"requires\",\"object\":\"c\",\"confidence\":0.6,",
            "\"observer\":\"alice\",\"timestamp\":\"2026-02-05T10:00:00Z\"}\n",
        ),
    )
    .unwrap();

    let loaded = store.load_all().unwrap();
    let objects: Vec<&str> = loaded.iter().map(|m| m.object.as_str()).collect();
    assert_eq!(objects, ["b", "c"]);
    assert_eq!(loaded[0].recorded_at(), None);
    assert!(loaded[1].recorded_at().is_some());
}

#[test]
fn reads_see_appends_from_other_handles() {
    let (_dir, store) = temp_store();
    let other = NdjsonStore::open(store.path().to_path_buf());
    other.append(&measurement("auth", "uses", "jwt", 0.5, "alice")).unwrap();
    assert_eq!(store.load("auth").unwrap().len(), 1);
}

#[test]
fn sync_on_append_writes_normally() {
    let (_dir, store) = temp_store();
    let store = store.with_sync(true);
    store.append(&measurement("a", "is", "b", 0.5, "x")).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn in_memory_store_matches_contract() {
    let store = InMemoryStore::new();
    assert!(store.is_empty());
    for m in auth_payment_log() {
        store.append(&m).unwrap();
    }
    assert_eq!(store.len(), 4);
    let payment: Vec<Measurement> = store.load("payment").unwrap();
    assert_eq!(payment.len(), 2);
    assert_eq!(payment[0].object, "card");
}
