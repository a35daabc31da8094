//! The milestone value type.

use std::fmt;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::buf::{Buf20, Buf32};

/// Opaque identifier attached to a milestone proposal.  This is distinct from
/// the ledger sequence number a milestone gets once accepted; it identifies
/// the proposal round for no-ack and replay bookkeeping.
pub type MilestoneId = String;

/// A validator-attested checkpoint over a contiguous range of external-chain
/// blocks.  Immutable once stored.
///
/// The range is inclusive on both ends, so a well-formed milestone satisfies
/// `end_block - start_block + 1 == milestone_length` for the configured
/// milestone length.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct Milestone {
    /// First external-chain block height covered, inclusive.
    start_block: u64,

    /// Last external-chain block height covered, inclusive.
    end_block: u64,

    /// Address of the validator that authored the milestone.
    proposer: Buf20,

    /// Hash committing to the contents of the covered block range.
    root_hash: Buf32,

    /// Proposal identifier, used for no-ack and replay bookkeeping.
    id: MilestoneId,
}

impl Milestone {
    pub fn new(
        start_block: u64,
        end_block: u64,
        proposer: Buf20,
        root_hash: Buf32,
        id: MilestoneId,
    ) -> Self {
        Self {
            start_block,
            end_block,
            proposer,
            root_hash,
            id,
        }
    }

    pub fn start_block(&self) -> u64 {
        self.start_block
    }

    pub fn end_block(&self) -> u64 {
        self.end_block
    }

    pub fn proposer(&self) -> &Buf20 {
        &self.proposer
    }

    pub fn root_hash(&self) -> &Buf32 {
        &self.root_hash
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of blocks the milestone covers, or `None` if the range is
    /// reversed or too large to count.  Proposals decode from the wire, so
    /// garbage ranges must not wrap into plausible lengths.
    pub fn num_blocks(&self) -> Option<u64> {
        self.end_block
            .checked_sub(self.start_block)
            .and_then(|span| span.checked_add(1))
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "milestone[{}..={} id={}]",
            self.start_block, self.end_block, self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use cairn_test_utils::ArbitraryGenerator;

    use super::*;

    #[test]
    fn test_borsh_roundtrip() {
        let milestone: Milestone = ArbitraryGenerator::new().generate();
        let raw = borsh::to_vec(&milestone).expect("test: serialize");
        let decoded: Milestone = borsh::from_slice(&raw).expect("test: deserialize");
        assert_eq!(decoded, milestone);
    }

    #[test]
    fn test_num_blocks() {
        let m = Milestone::new(100, 103, Buf20::zero(), Buf32::zero(), "m1".to_owned());
        assert_eq!(m.num_blocks(), Some(4));
    }

    #[test]
    fn test_num_blocks_degenerate_ranges() {
        // Reversed range doesn't count as covering anything.
        let reversed = Milestone::new(100, 50, Buf20::zero(), Buf32::zero(), "m1".to_owned());
        assert_eq!(reversed.num_blocks(), None);

        // Full-domain range would need u64::MAX + 1 blocks; must not wrap.
        let huge = Milestone::new(0, u64::MAX, Buf20::zero(), Buf32::zero(), "m1".to_owned());
        assert_eq!(huge.num_blocks(), None);

        let single = Milestone::new(5, 5, Buf20::zero(), Buf32::zero(), "m1".to_owned());
        assert_eq!(single.num_blocks(), Some(1));
    }
}
