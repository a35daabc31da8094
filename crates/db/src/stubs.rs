//! In-memory store stub for tests.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::{traits::KvStore, DbResult};

/// In-memory [`KvStore`] backed by a [`BTreeMap`].  No transaction semantics;
/// tests that care about rollback just throw the instance away.
#[derive(Debug, Default)]
pub struct StubKvStore {
    entries: Mutex<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl StubKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resident entries, for assertions on retention bounds.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KvStore for StubKvStore {
    fn has(&self, key: &[u8]) -> DbResult<bool> {
        Ok(self.entries.lock().contains_key(key))
    }

    fn get(&self, key: &[u8]) -> DbResult<Option<Vec<u8>>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn put(&self, key: &[u8], value: Vec<u8>) -> DbResult<()> {
        self.entries.lock().insert(key.to_vec(), value);
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> DbResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_delete() {
        let store = StubKvStore::new();
        assert!(store.is_empty());

        store.put(b"k", vec![1, 2, 3]).expect("test: put");
        assert!(store.has(b"k").expect("test: has"));
        assert_eq!(store.get(b"k").expect("test: get"), Some(vec![1, 2, 3]));
        assert_eq!(store.len(), 1);

        store.delete(b"k").expect("test: delete");
        assert!(!store.has(b"k").expect("test: has"));

        // Deleting an absent key is a no-op.
        store.delete(b"k").expect("test: delete absent");
    }

    #[test]
    fn test_put_overwrites() {
        let store = StubKvStore::new();
        store.put(b"k", vec![1]).expect("test: put");
        store.put(b"k", vec![2]).expect("test: put");
        assert_eq!(store.get(b"k").expect("test: get"), Some(vec![2]));
        assert_eq!(store.len(), 1);
    }
}
