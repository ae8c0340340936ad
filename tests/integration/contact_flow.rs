//! Integration tests for contact CRUD through the public API

use super::common::{create_test_store, tuples};
use contactbook::{ContactStore, Database, DatabaseError};

/// Test the listing example: Bob before Alice, ids assigned in order
#[test]
fn test_listing_is_newest_first() {
    let (_db, store, _dir) = create_test_store();

    store.create("Alice", "111", "a@x.com").unwrap();
    store.create("Bob", "222", "b@x.com").unwrap();

    let all = store.list_all().unwrap();
    let ids: Vec<i64> = all.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(
        tuples(&all),
        vec![
            ("Bob".into(), "222".into(), "b@x.com".into()),
            ("Alice".into(), "111".into(), "a@x.com".into()),
        ]
    );
}

/// Test that new ids exceed every id assigned before, even after deletes
#[test]
fn test_fresh_ids_increase() {
    let (_db, store, _dir) = create_test_store();

    let mut max_id = 0;
    for i in 0..5 {
        let id = store.create(&format!("c{i}"), "1", "x@x.com").unwrap();
        assert!(id > max_id, "id {} should exceed {}", id, max_id);
        max_id = id;
        if i % 2 == 0 {
            store.delete(id).unwrap();
        }
    }
    assert_eq!(store.count().unwrap(), 2);
}

/// Test that contacts persist across reopening the database file
#[test]
fn test_contacts_survive_reopen() {
    let (db, store, _dir) = create_test_store();
    store.create("Alice", "111", "a@x.com").unwrap();
    let path = db.path.clone();
    drop(store);
    drop(db);

    let db = Database::open(path).unwrap();
    let store = ContactStore::new(db.connection());
    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Alice");

    // Ids keep increasing after reopen
    assert_eq!(store.create("Bob", "222", "b@x.com").unwrap(), 2);
}

/// Test that a schema version bump discards all contacts
#[test]
fn test_schema_bump_discards_contacts() {
    let (db, store, _dir) = create_test_store();
    store.create("Alice", "111", "a@x.com").unwrap();
    let path = db.path.clone();
    drop(store);
    drop(db);

    let db = Database::open_with_version(path.clone(), contactbook::data::SCHEMA_VERSION + 1)
        .unwrap();
    let store = ContactStore::new(db.connection());
    assert!(store.list_all().unwrap().is_empty());
    drop(store);
    drop(db);

    // The current build refuses the newer file
    let err = Database::open(path).unwrap_err();
    assert!(matches!(err, DatabaseError::SchemaTooNew { .. }));
}

/// Test that a path which cannot hold a database is a storage failure
#[test]
fn test_unopenable_database_is_storage_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "not a directory").unwrap();

    let err = Database::open(blocker.join("test.db")).unwrap_err();
    assert!(matches!(err, DatabaseError::CreateDir(_)));
}

/// Test that stores cloned across threads serialize on the shared connection
#[test]
fn test_concurrent_creates_get_unique_ids() {
    let (_db, store, _dir) = create_test_store();

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let store = store.clone();
            std::thread::spawn(move || {
                (0..10)
                    .map(|i| store.create(&format!("t{t}-{i}"), "1", "x@x.com").unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<i64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 40);
}
