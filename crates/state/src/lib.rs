//! Milestone consensus state over a keyed persistent store.
//!
//! This owns the sequential ledger of accepted milestones (numbering,
//! insertion, retrieval, pruning), the no-ack/timeout bookkeeping, and the
//! replay-guard registry of processed milestone ids.  All of it lives in a
//! store the surrounding consensus engine provides per round; nothing here is
//! a process global.

mod ledger;
mod noack;
mod registry;
pub mod schemas;

use cairn_db::traits::KvStore;
use cairn_params::MilestoneParams;

/// Accessor for milestone state within a single consensus round.
///
/// One instance per state transition; the store it wraps is the round's
/// transactional context, so writes only become durable if the round commits.
#[derive(Debug)]
pub struct MilestoneState<'s, S> {
    store: &'s S,
    params: &'s MilestoneParams,
}

impl<'s, S: KvStore> MilestoneState<'s, S> {
    pub fn new(store: &'s S, params: &'s MilestoneParams) -> Self {
        Self { store, params }
    }

    pub fn params(&self) -> &MilestoneParams {
        self.params
    }

    pub(crate) fn store(&self) -> &S {
        self.store
    }
}
