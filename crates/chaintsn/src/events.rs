//! Events the milestone transition emits for downstream indexing.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use cairn_milestone_types::{Buf20, Buf32, Milestone, MilestoneId};
use serde::{Deserialize, Serialize};

/// Module tag attached to emitted milestone events.
pub const MILESTONE_MODULE_TAG: &str = "milestone";

/// Output of a successfully handled milestone message: the events to hand to
/// the indexer/auditor pipeline.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct MilestoneOutput {
    events: Vec<MilestoneEvent>,
}

impl MilestoneOutput {
    pub fn new(events: Vec<MilestoneEvent>) -> Self {
        Self { events }
    }

    pub fn single(event: MilestoneEvent) -> Self {
        Self::new(vec![event])
    }

    pub fn events(&self) -> &[MilestoneEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<MilestoneEvent> {
        self.events
    }
}

/// Events emitted by milestone message handling.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub enum MilestoneEvent {
    /// A milestone passed validation and was appended to the ledger.
    Accepted(MilestoneAccepted),

    /// A proposal round was recorded as no-acked.
    NoAckRecorded { id: MilestoneId },
}

/// Attributes of an accepted milestone, for indexing and auditing.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct MilestoneAccepted {
    proposer: Buf20,
    start_block: u64,
    end_block: u64,
    root_hash: Buf32,
}

impl MilestoneAccepted {
    pub fn from_milestone(milestone: &Milestone) -> Self {
        Self {
            proposer: *milestone.proposer(),
            start_block: milestone.start_block(),
            end_block: milestone.end_block(),
            root_hash: *milestone.root_hash(),
        }
    }

    pub fn proposer(&self) -> &Buf20 {
        &self.proposer
    }

    pub fn start_block(&self) -> u64 {
        self.start_block
    }

    pub fn end_block(&self) -> u64 {
        self.end_block
    }

    pub fn root_hash(&self) -> &Buf32 {
        &self.root_hash
    }

    /// Module tag carried alongside the attributes.
    pub fn module(&self) -> &'static str {
        MILESTONE_MODULE_TAG
    }
}
