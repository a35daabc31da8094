//! Trait definition for the keyed persistent store.  This borrows its naming
//! conventions from our other database interfaces.

use crate::DbResult;

/// Ordered key-value store scoped to a single consensus round.
///
/// The surrounding engine provides transactional semantics: every read and
/// write within one validation+commit sequence observes a consistent snapshot
/// and either all persist or none do.  Implementations take `&self` and are
/// expected to use interior mutability.
pub trait KvStore: Send + Sync + 'static {
    /// Returns whether a key is present.
    fn has(&self, key: &[u8]) -> DbResult<bool>;

    /// Gets the value stored under a key, if present.
    fn get(&self, key: &[u8]) -> DbResult<Option<Vec<u8>>>;

    /// Sets the value stored under a key, overwriting any previous value.
    fn put(&self, key: &[u8], value: Vec<u8>) -> DbResult<()>;

    /// Deletes the entry under a key.  Deleting an absent key is a no-op.
    fn delete(&self, key: &[u8]) -> DbResult<()>;
}
