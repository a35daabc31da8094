use thiserror::Error;

/// Errors for store-level milestone operations.
///
/// "Not found" outcomes are normal on the read path (querying an empty ledger
/// or a pruned entry) and are kept distinct from codec failures, which mean
/// an entry is present but undecodable.
#[derive(Debug, Error, Clone)]
pub enum DbError {
    /// Lookup miss for a numbered milestone entry.
    #[error("milestone {0} not found")]
    MissingMilestone(u64),

    /// The ledger has no accepted milestones at all.  Distinct from
    /// [`DbError::MissingMilestone`] so callers can tell "ledger empty" from
    /// "index out of range".
    #[error("no milestone found")]
    NoMilestoneFound,

    /// Serialization or deserialization of a stored value failed.  Fatal for
    /// the round's commit attempt; must propagate, never be swallowed.
    #[error("codec: {0}")]
    Codec(String),

    /// Failure inside the backing store itself.
    #[error("store: {0}")]
    Store(String),
}
