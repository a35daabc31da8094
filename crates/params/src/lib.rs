//! Consensus parameters for milestone processing.
//!
//! These are fixed at genesis (or at the hard fork that activates milestone
//! processing) and shared by every node, so they are plain data with no
//! runtime machinery around them.

use serde::{Deserialize, Serialize};

/// Parameters governing milestone validation and retention.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct MilestoneParams {
    /// Number of external-chain blocks each milestone must cover.
    pub milestone_length: u64,

    /// Sidechain height at which milestone processing activates.  Proposals
    /// seen below this height are rejected outright.
    pub hard_fork_height: u64,

    /// How many accepted milestones to retain.  Adding milestone `N` prunes
    /// milestone `N - prune_window`, so at most `prune_window + 1` entries
    /// are ever resident.
    pub prune_window: u64,

    /// External-chain block height the very first milestone must start at.
    pub genesis_start_block: u64,

    /// Whether to verify the proposed root hash against the vote held by the
    /// external-chain contract before accepting.  The reference consensus
    /// rules accept without this check, so it defaults to off.
    pub enforce_root_hash_votes: bool,
}

impl Default for MilestoneParams {
    fn default() -> Self {
        Self {
            milestone_length: 12,
            hard_fork_height: 0,
            prune_window: 100,
            genesis_start_block: 0,
            enforce_root_hash_votes: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let params = MilestoneParams {
            milestone_length: 4,
            hard_fork_height: 50,
            prune_window: 10,
            genesis_start_block: 100,
            enforce_root_hash_votes: false,
        };
        let raw = serde_json::to_string(&params).expect("test: serialize");
        let decoded: MilestoneParams = serde_json::from_str(&raw).expect("test: deserialize");
        assert_eq!(decoded, params);
    }

    #[test]
    fn test_default_is_sane() {
        let params = MilestoneParams::default();
        assert!(params.milestone_length > 0);
        assert!(params.prune_window > 0);
        assert!(!params.enforce_root_hash_votes);
    }
}
