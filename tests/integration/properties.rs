//! Property tests for store ordering and transfer round trips

use super::common::tuples;
use contactbook::{transfer, ContactStore, Database};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Create(String, String, String),
    Update(usize, String, String, String),
    Delete(usize),
}

fn field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9@. +-]{0,12}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (field(), field(), field()).prop_map(|(n, p, e)| Op::Create(n, p, e)),
        1 => (0usize..20, field(), field(), field())
            .prop_map(|(i, n, p, e)| Op::Update(i, n, p, e)),
        1 => (0usize..20).prop_map(Op::Delete),
    ]
}

fn memory_store() -> ContactStore {
    let db = Database::open_in_memory().unwrap();
    ContactStore::new(db.connection())
}

/// Pick an id to target: an existing one when available, sometimes a missing one
fn target_id(created: &[i64], index: usize) -> i64 {
    if created.is_empty() || index >= created.len() {
        1000 + index as i64
    } else {
        created[index]
    }
}

proptest! {
    #[test]
    fn listing_stays_sorted_by_id_descending(ops in prop::collection::vec(op(), 0..40)) {
        let store = memory_store();
        let mut created: Vec<i64> = Vec::new();

        for op in ops {
            match op {
                Op::Create(n, p, e) => {
                    let id = store.create(&n, &p, &e).unwrap();
                    prop_assert!(created.iter().all(|&prev| id > prev));
                    created.push(id);
                }
                Op::Update(i, n, p, e) => {
                    let id = target_id(&created, i);
                    let before = store.get_by_id(id).unwrap();
                    let changed = store.update(id, &n, &p, &e).unwrap();
                    prop_assert_eq!(changed, usize::from(before.is_some()));
                }
                Op::Delete(i) => {
                    store.delete(target_id(&created, i)).unwrap();
                }
            }

            let ids: Vec<i64> = store.list_all().unwrap().iter().map(|c| c.id).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] > w[1]));
        }
    }

    #[test]
    fn export_import_round_trip(rows in prop::collection::vec((field(), field(), field()), 1..15)) {
        let source = memory_store();
        for (n, p, e) in &rows {
            // Import trims, so only trimmed values survive unchanged
            source.create(n.trim(), p.trim(), e.trim()).unwrap();
        }

        let mut buf = Vec::new();
        transfer::export_all(&source, &mut buf).unwrap();

        let target = memory_store();
        let count = transfer::import_all(&target, buf.as_slice()).unwrap();
        prop_assert_eq!(count, rows.len());

        // Import reverses listing order, so compare as sorted multisets
        let mut before = tuples(&source.list_all().unwrap());
        let mut after = tuples(&target.list_all().unwrap());
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }
}
