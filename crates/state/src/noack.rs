//! No-ack and timeout bookkeeping.
//!
//! A no-ack records that a milestone proposal round failed to reach
//! acceptance; the most recent such id and the timeout timestamp feed into
//! the consensus driver's proposer rotation.  No validation happens at this
//! layer, the driver decides when a round has timed out.

use cairn_db::{traits::KvStore, DbError, DbResult};
use cairn_milestone_types::MilestoneId;

use crate::{schemas, MilestoneState};

impl<S: KvStore> MilestoneState<'_, S> {
    /// Marks a milestone id as no-acked and makes it the most recent no-ack.
    pub fn set_no_ack_milestone(&self, id: &str) -> DbResult<()> {
        let value = id.as_bytes().to_vec();
        self.store().put(&schemas::no_ack_key(id), value.clone())?;
        self.store().put(&schemas::LAST_NO_ACK_KEY, value)
    }

    /// Returns the most recently no-acked milestone id, or the empty string
    /// if no no-ack was ever recorded.
    pub fn last_no_ack_milestone(&self) -> DbResult<MilestoneId> {
        match self.store().get(&schemas::LAST_NO_ACK_KEY)? {
            Some(raw) => String::from_utf8(raw).map_err(|e| DbError::Codec(e.to_string())),
            None => Ok(String::new()),
        }
    }

    /// Returns whether a milestone id was no-acked.
    pub fn has_no_ack_milestone(&self, id: &str) -> DbResult<bool> {
        self.store().has(&schemas::no_ack_key(id))
    }

    /// Records the Unix timestamp of the most recent milestone timeout.
    pub fn set_last_milestone_timeout(&self, timestamp: u64) -> DbResult<()> {
        self.store()
            .put(&schemas::LAST_TIMEOUT_KEY, schemas::encode_u64(timestamp))
    }

    /// Returns the last recorded milestone timeout timestamp, zero if unset.
    pub fn last_milestone_timeout(&self) -> DbResult<u64> {
        match self.store().get(&schemas::LAST_TIMEOUT_KEY)? {
            Some(raw) => schemas::decode_u64(&raw),
            None => Ok(0),
        }
    }
}
