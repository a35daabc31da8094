//! The sequential milestone ledger: numbering, insertion, retrieval, pruning.

use cairn_db::{traits::KvStore, DbError, DbResult};
use cairn_milestone_types::Milestone;
use tracing::info;

use crate::{schemas, MilestoneState};

impl<S: KvStore> MilestoneState<'_, S> {
    /// Appends an accepted milestone to the ledger.
    ///
    /// Assigns it the next sequence number, prunes the entry that fell out of
    /// the retention window (a no-op if it's already gone), and advances the
    /// counter.  Returns the assigned number.
    pub fn add_milestone(&self, milestone: &Milestone) -> DbResult<u64> {
        let number = self.milestone_count()? + 1;

        let raw = borsh::to_vec(milestone).map_err(|e| DbError::Codec(e.to_string()))?;
        self.store().put(&schemas::milestone_key(number), raw)?;

        // A zero window would make the prune target the entry just written;
        // the tip must always survive, so treat zero as "no pruning".
        let window = self.params().prune_window;
        if window > 0 {
            if let Some(prune_target) = number.checked_sub(window) {
                self.prune_milestone(prune_target)?;
            }
        }

        self.set_milestone_count(number)?;
        info!(%number, %milestone, "added milestone to state");

        Ok(number)
    }

    /// Gets the milestone stored under a sequence number.
    pub fn milestone_by_number(&self, number: u64) -> DbResult<Milestone> {
        match self.store().get(&schemas::milestone_key(number))? {
            Some(raw) => borsh::from_slice(&raw).map_err(|e| DbError::Codec(e.to_string())),
            None => Err(DbError::MissingMilestone(number)),
        }
    }

    /// Gets the ledger tip, the milestone numbered `milestone_count()`.
    ///
    /// Fails with [`DbError::NoMilestoneFound`] if the ledger is empty.
    pub fn last_milestone(&self) -> DbResult<Milestone> {
        let count = self.milestone_count()?;
        match self.store().get(&schemas::milestone_key(count))? {
            Some(raw) => borsh::from_slice(&raw).map_err(|e| DbError::Codec(e.to_string())),
            None => Err(DbError::NoMilestoneFound),
        }
    }

    /// Returns the number of milestones ever accepted.  Zero if the ledger
    /// was never written to.
    pub fn milestone_count(&self) -> DbResult<u64> {
        match self.store().get(&schemas::COUNT_KEY)? {
            Some(raw) => schemas::decode_u64(&raw),
            None => Ok(0),
        }
    }

    /// Deletes the milestone entry at a sequence number, if present.  Zero is
    /// never a valid number, so it's left alone.
    pub fn prune_milestone(&self, number: u64) -> DbResult<()> {
        if number == 0 {
            return Ok(());
        }

        let key = schemas::milestone_key(number);
        if self.store().has(&key)? {
            self.store().delete(&key)?;
        }

        Ok(())
    }

    fn set_milestone_count(&self, number: u64) -> DbResult<()> {
        self.store()
            .put(&schemas::COUNT_KEY, schemas::encode_u64(number))
    }
}
