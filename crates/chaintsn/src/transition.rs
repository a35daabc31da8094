//! Milestone acceptance state transition.
//!
//! [`validate_milestone`] is the pure decision function; it persists nothing.
//! [`process_milestone_msg`] wraps it with the replay guard and, on success,
//! the ledger append and id registration.  The store the state accessor wraps
//! is the round's transactional context, so a returned error means nothing of
//! the round persists.

use cairn_db::{traits::KvStore, DbError};
use cairn_milestone_types::{Buf20, Milestone};
use cairn_params::MilestoneParams;
use cairn_state::MilestoneState;
use tracing::{info, warn};

use crate::{
    context::{ContractCaller, ValidatorSetProvider},
    errors::TsnError,
    events::{MilestoneAccepted, MilestoneEvent, MilestoneOutput},
    messages::{MilestoneMsg, MilestoneTimeout},
};

/// Decides whether a proposed milestone may be committed.
///
/// Rules are checked in order and the first failure wins: hard fork
/// activation, range length, continuity against the ledger tail (or the
/// genesis start block when the ledger is empty), then proposer identity.
pub fn validate_milestone(
    milestone: &Milestone,
    chain_height: u64,
    tail: Option<&Milestone>,
    proposer: Option<&Buf20>,
    params: &MilestoneParams,
) -> Result<(), TsnError> {
    if chain_height < params.hard_fork_height {
        return Err(TsnError::NetworkNotForked(params.hard_fork_height));
    }

    // Checked so a reversed or full-domain range can't wrap into a plausible
    // length; such ranges report a count of zero.
    if milestone.num_blocks() != Some(params.milestone_length) {
        return Err(TsnError::InvalidLength {
            expected: params.milestone_length,
            got: milestone.num_blocks().unwrap_or(0),
        });
    }

    match tail {
        Some(last) => {
            if milestone.start_block() != last.end_block() + 1 {
                return Err(TsnError::NotInContinuity {
                    last_end: last.end_block(),
                    start: milestone.start_block(),
                });
            }
        }
        None => {
            if milestone.start_block() != params.genesis_start_block {
                return Err(TsnError::NoMilestoneFound(params.genesis_start_block));
            }
        }
    }

    match proposer {
        Some(expected) if milestone.proposer() == expected => Ok(()),
        _ => Err(TsnError::InvalidProposer),
    }
}

/// Handles an inbound milestone message against the round's state.
pub fn process_milestone_msg<S: KvStore>(
    state: &MilestoneState<'_, S>,
    msg: &MilestoneMsg,
    chain_height: u64,
    vset: &impl ValidatorSetProvider,
    contract: &impl ContractCaller,
) -> Result<MilestoneOutput, TsnError> {
    match msg {
        MilestoneMsg::Milestone(milestone) => {
            handle_milestone(state, milestone, chain_height, vset, contract)
        }
        MilestoneMsg::Timeout(timeout) => handle_timeout(state, timeout),
    }
}

fn handle_milestone<S: KvStore>(
    state: &MilestoneState<'_, S>,
    milestone: &Milestone,
    chain_height: u64,
    vset: &impl ValidatorSetProvider,
    contract: &impl ContractCaller,
) -> Result<MilestoneOutput, TsnError> {
    let res = check_and_commit_milestone(state, milestone, chain_height, vset, contract);
    if let Err(e) = &res {
        warn!(id = milestone.id(), %e, "rejected milestone");
    }
    res
}

fn check_and_commit_milestone<S: KvStore>(
    state: &MilestoneState<'_, S>,
    milestone: &Milestone,
    chain_height: u64,
    vset: &impl ValidatorSetProvider,
    contract: &impl ContractCaller,
) -> Result<MilestoneOutput, TsnError> {
    // Replay guard first; an already-processed id is rejected no matter what
    // the rest of the proposal looks like.
    if state.is_milestone_id_registered(milestone.id())? {
        return Err(TsnError::Replay(milestone.id().to_owned()));
    }

    let tail = match state.last_milestone() {
        Ok(last) => Some(last),
        Err(DbError::NoMilestoneFound) => None,
        Err(e) => return Err(e.into()),
    };

    validate_milestone(
        milestone,
        chain_height,
        tail.as_ref(),
        vset.current_proposer().as_ref(),
        state.params(),
    )?;

    if state.params().enforce_root_hash_votes {
        verify_root_hash_vote(contract, milestone, state.params())?;
    }

    state.add_milestone(milestone)?;
    state.register_milestone_id(milestone.id())?;

    Ok(MilestoneOutput::single(MilestoneEvent::Accepted(
        MilestoneAccepted::from_milestone(milestone),
    )))
}

fn handle_timeout<S: KvStore>(
    state: &MilestoneState<'_, S>,
    timeout: &MilestoneTimeout,
) -> Result<MilestoneOutput, TsnError> {
    state.set_no_ack_milestone(timeout.id())?;
    state.set_last_milestone_timeout(timeout.timestamp())?;
    warn!(id = timeout.id(), timestamp = timeout.timestamp(), "recorded milestone no-ack");

    Ok(MilestoneOutput::single(MilestoneEvent::NoAckRecorded {
        id: timeout.id().to_owned(),
    }))
}

/// Checks the proposed root hash against the vote held by the external-chain
/// contract.  Only invoked when `enforce_root_hash_votes` is set.
fn verify_root_hash_vote(
    contract: &impl ContractCaller,
    milestone: &Milestone,
    params: &MilestoneParams,
) -> Result<(), TsnError> {
    if !contract.blocks_exist_locally(milestone.end_block()) {
        return Err(TsnError::BlocksUnavailable(milestone.end_block()));
    }

    let matches = contract.vote_on_root_hash(
        milestone.start_block(),
        milestone.end_block(),
        params.milestone_length,
        milestone.root_hash(),
        milestone.id(),
    )?;

    if !matches {
        return Err(TsnError::VoteRejected(milestone.id().to_owned()));
    }

    info!(id = milestone.id(), "root hash vote verified");
    Ok(())
}
