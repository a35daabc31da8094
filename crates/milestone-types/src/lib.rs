//! Milestone-related value types for the cairn sidechain.

mod buf;
mod milestone;

pub use buf::{Buf20, Buf32};
pub use milestone::{Milestone, MilestoneId};
