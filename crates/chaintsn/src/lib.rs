//! Milestone state transition logic.
//!
//! Decides whether a proposed milestone may be committed (continuity,
//! length, proposer checks), drives the ledger and replay registry on
//! acceptance, records no-acks on timeout, and serves the read-only query
//! projections.  The external-chain contract and the validator set are
//! consumed through the traits in [`context`].

pub mod context;
pub mod errors;
pub mod events;
pub mod messages;
pub mod query;
pub mod transition;

pub use errors::TsnError;
pub use transition::{process_milestone_msg, validate_milestone};
