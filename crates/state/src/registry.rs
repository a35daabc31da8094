//! Registry of processed milestone ids.
//!
//! This is the authoritative replay guard: continuity alone can't reject a
//! resubmission whose range happens to line up against a since-advanced tail,
//! so every accepted id is recorded here and checked before validation.
//! Entries are never pruned; dropping one would re-admit a replay of its id.

use cairn_db::{traits::KvStore, DbResult};

use crate::{schemas, MilestoneState};

impl<S: KvStore> MilestoneState<'_, S> {
    /// Marks a milestone id as processed.
    pub fn register_milestone_id(&self, id: &str) -> DbResult<()> {
        self.store()
            .put(&schemas::milestone_id_key(id), id.as_bytes().to_vec())
    }

    /// Returns whether a milestone id was already processed.
    pub fn is_milestone_id_registered(&self, id: &str) -> DbResult<bool> {
        self.store().has(&schemas::milestone_id_key(id))
    }
}

#[cfg(test)]
mod tests {
    use cairn_db::stubs::StubKvStore;
    use cairn_params::MilestoneParams;

    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let store = StubKvStore::new();
        let params = MilestoneParams::default();
        let state = MilestoneState::new(&store, &params);

        assert!(!state.is_milestone_id_registered("m1").expect("test: is"));
        state.register_milestone_id("m1").expect("test: register");
        assert!(state.is_milestone_id_registered("m1").expect("test: is"));
        assert!(!state.is_milestone_id_registered("m2").expect("test: is"));

        // Registration is idempotent.
        state.register_milestone_id("m1").expect("test: re-register");
        assert!(state.is_milestone_id_registered("m1").expect("test: is"));
    }

    #[test]
    fn test_registry_disjoint_from_no_ack_set() {
        let store = StubKvStore::new();
        let params = MilestoneParams::default();
        let state = MilestoneState::new(&store, &params);

        state.register_milestone_id("m1").expect("test: register");
        assert!(!state.has_no_ack_milestone("m1").expect("test: has"));

        state.set_no_ack_milestone("m2").expect("test: set");
        assert!(!state.is_milestone_id_registered("m2").expect("test: is"));
    }
}
