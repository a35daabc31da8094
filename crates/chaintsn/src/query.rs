//! Read-only query projections of milestone state.
//!
//! Each handler serializes its answer to JSON bytes for the surrounding
//! query layer; none of them mutate anything.

use cairn_db::{traits::KvStore, DbError, DbResult};
use cairn_milestone_types::Milestone;
use cairn_state::MilestoneState;
use serde::{Deserialize, Serialize};

/// Milestone projection with hex-rendered byte fields.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct RpcMilestone {
    pub start_block: u64,
    pub end_block: u64,
    pub proposer: String,
    pub root_hash: String,
    pub id: String,
}

impl From<&Milestone> for RpcMilestone {
    fn from(m: &Milestone) -> Self {
        Self {
            start_block: m.start_block(),
            end_block: m.end_block(),
            proposer: hex::encode(m.proposer().as_slice()),
            root_hash: hex::encode(m.root_hash().as_slice()),
            id: m.id().to_owned(),
        }
    }
}

/// Latest accepted milestone.  Fails with [`DbError::NoMilestoneFound`] on an
/// empty ledger.
pub fn query_latest_milestone<S: KvStore>(state: &MilestoneState<'_, S>) -> DbResult<Vec<u8>> {
    let milestone = state.last_milestone()?;
    to_json(&RpcMilestone::from(&milestone))
}

/// Milestone by ledger sequence number.
pub fn query_milestone_by_number<S: KvStore>(
    state: &MilestoneState<'_, S>,
    number: u64,
) -> DbResult<Vec<u8>> {
    let milestone = state.milestone_by_number(number)?;
    to_json(&RpcMilestone::from(&milestone))
}

/// Number of milestones ever accepted.
pub fn query_count<S: KvStore>(state: &MilestoneState<'_, S>) -> DbResult<Vec<u8>> {
    to_json(&state.milestone_count()?)
}

/// Most recently no-acked milestone id ("" if none).
pub fn query_latest_no_ack_milestone<S: KvStore>(
    state: &MilestoneState<'_, S>,
) -> DbResult<Vec<u8>> {
    to_json(&state.last_no_ack_milestone()?)
}

/// Whether a milestone id was no-acked.
pub fn query_no_ack_milestone_by_id<S: KvStore>(
    state: &MilestoneState<'_, S>,
    id: &str,
) -> DbResult<Vec<u8>> {
    to_json(&state.has_no_ack_milestone(id)?)
}

/// The milestone processing parameters.
pub fn query_params<S: KvStore>(state: &MilestoneState<'_, S>) -> DbResult<Vec<u8>> {
    to_json(state.params())
}

fn to_json<T: Serialize>(value: &T) -> DbResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| DbError::Codec(e.to_string()))
}

#[cfg(test)]
mod tests {
    use cairn_db::stubs::StubKvStore;
    use cairn_milestone_types::{Buf20, Buf32};
    use cairn_params::MilestoneParams;

    use super::*;

    fn test_params() -> MilestoneParams {
        MilestoneParams {
            milestone_length: 4,
            hard_fork_height: 0,
            prune_window: 100,
            genesis_start_block: 100,
            enforce_root_hash_votes: false,
        }
    }

    #[test]
    fn test_milestone_projection() {
        let store = StubKvStore::new();
        let params = test_params();
        let state = MilestoneState::new(&store, &params);

        assert!(matches!(
            query_latest_milestone(&state),
            Err(DbError::NoMilestoneFound)
        ));

        let m = Milestone::new(
            100,
            103,
            Buf20::new([0xab; 20]),
            Buf32::new([0xcd; 32]),
            "m1".to_owned(),
        );
        state.add_milestone(&m).expect("test: add");

        let raw = query_latest_milestone(&state).expect("test: query");
        let rpc: RpcMilestone = serde_json::from_slice(&raw).expect("test: decode");
        assert_eq!(rpc.start_block, 100);
        assert_eq!(rpc.end_block, 103);
        assert_eq!(rpc.proposer, "ab".repeat(20));
        assert_eq!(rpc.root_hash, "cd".repeat(32));
        assert_eq!(rpc.id, "m1");

        let by_number = query_milestone_by_number(&state, 1).expect("test: query");
        assert_eq!(by_number, raw);
    }

    #[test]
    fn test_scalar_projections() {
        let store = StubKvStore::new();
        let params = test_params();
        let state = MilestoneState::new(&store, &params);

        assert_eq!(query_count(&state).expect("test: count"), b"0");
        assert_eq!(
            query_latest_no_ack_milestone(&state).expect("test: no-ack"),
            b"\"\""
        );

        state.set_no_ack_milestone("m5").expect("test: set");
        assert_eq!(
            query_latest_no_ack_milestone(&state).expect("test: no-ack"),
            b"\"m5\""
        );
        assert_eq!(
            query_no_ack_milestone_by_id(&state, "m5").expect("test: by id"),
            b"true"
        );
        assert_eq!(
            query_no_ack_milestone_by_id(&state, "m6").expect("test: by id"),
            b"false"
        );

        let raw = query_params(&state).expect("test: params");
        let decoded: MilestoneParams = serde_json::from_slice(&raw).expect("test: decode");
        assert_eq!(decoded, params);
    }
}
