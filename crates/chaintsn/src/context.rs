//! External collaborators the transition logic reads from.

use cairn_milestone_types::{Buf20, Buf32};
use thiserror::Error;

/// Failure from an external-chain contract call.
#[derive(Debug, Error, Clone)]
#[error("contract call failed: {0}")]
pub struct ContractError(String);

impl ContractError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Supplies the active proposer from the staking/validator-set module.
pub trait ValidatorSetProvider {
    /// Signer address of the current proposer, if the validator set has one.
    fn current_proposer(&self) -> Option<Buf20>;
}

/// Caller into the external-chain contract, used to confirm block existence
/// and root-hash votes.  Calls are synchronous and expected to be local and
/// fast; retries are the caller's business, not ours.
pub trait ContractCaller {
    /// Returns whether this node has the external chain locally up to and
    /// including `end_block`.
    fn blocks_exist_locally(&self, end_block: u64) -> bool;

    /// Returns whether the vote aggregated for this milestone's range matches
    /// the given root hash.
    fn vote_on_root_hash(
        &self,
        start_block: u64,
        end_block: u64,
        milestone_length: u64,
        root_hash: &Buf32,
        milestone_id: &str,
    ) -> Result<bool, ContractError>;
}
