//! Inbound messages the milestone transition handles.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use cairn_milestone_types::{Milestone, MilestoneId};
use serde::{Deserialize, Serialize};

/// The closed set of milestone proposal messages.  Anything else simply
/// doesn't decode into this type.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub enum MilestoneMsg {
    /// A milestone proposal from the current proposer.
    Milestone(Milestone),

    /// Notice from the consensus driver that a proposal round failed to
    /// reach acknowledgement.
    Timeout(MilestoneTimeout),
}

/// A timed-out proposal round: the id that never got acknowledged and when
/// the driver declared the timeout.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct MilestoneTimeout {
    id: MilestoneId,
    timestamp: u64,
}

impl MilestoneTimeout {
    pub fn new(id: MilestoneId, timestamp: u64) -> Self {
        Self { id, timestamp }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use cairn_test_utils::ArbitraryGenerator;

    use super::*;

    #[test]
    fn test_msg_borsh_roundtrip() {
        let mut ag = ArbitraryGenerator::new();
        for _ in 0..4 {
            let msg: MilestoneMsg = ag.generate();
            let raw = borsh::to_vec(&msg).expect("test: serialize");
            let decoded: MilestoneMsg = borsh::from_slice(&raw).expect("test: deserialize");
            assert_eq!(decoded, msg);
        }
    }
}
