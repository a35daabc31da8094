use cairn_db::DbError;
use cairn_milestone_types::MilestoneId;
use thiserror::Error;

use crate::context::ContractError;

/// Reasons a milestone proposal round fails.
///
/// Every validation failure is terminal for the proposal; nothing is
/// persisted and the surrounding consensus layer decides what to do with the
/// rejection.
#[derive(Debug, Error)]
pub enum TsnError {
    /// The chain hasn't reached the milestone hard fork height yet.
    #[error("network has not reached the milestone hard fork height {0}")]
    NetworkNotForked(u64),

    /// The proposed range doesn't cover the configured milestone length.
    #[error("milestone covers {got} blocks, expected {expected}")]
    InvalidLength { expected: u64, got: u64 },

    /// The proposed start doesn't extend the ledger tail.
    #[error("milestone not in continuity (last end block {last_end}, proposed start {start})")]
    NotInContinuity { last_end: u64, start: u64 },

    /// Empty ledger and the proposal doesn't start at the genesis start
    /// block.
    #[error("no milestone found, first milestone must start at block {0}")]
    NoMilestoneFound(u64),

    /// The validator set has no proposer, or the proposal's proposer isn't
    /// it.
    #[error("invalid proposer in milestone")]
    InvalidProposer,

    /// The milestone id was already processed.
    #[error("milestone id {0} already processed")]
    Replay(MilestoneId),

    /// The covered blocks aren't locally available, so the root hash can't
    /// be checked.
    #[error("blocks up to {0} not locally available")]
    BlocksUnavailable(u64),

    /// The aggregated vote doesn't match the proposed root hash.
    #[error("root hash vote failed for milestone id {0}")]
    VoteRejected(MilestoneId),

    #[error("contract: {0}")]
    Contract(#[from] ContractError),

    #[error("db: {0}")]
    Db(#[from] DbError),
}
