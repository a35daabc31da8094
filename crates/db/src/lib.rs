//! Low level keyed-store interface the milestone state is written through.
//!
//! The real store is owned by the surrounding consensus engine and scoped to
//! a single consensus round; this crate only defines the interface, the error
//! taxonomy, and an in-memory stub for tests.

mod errors;
pub mod traits;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

pub use errors::DbError;

pub type DbResult<T> = Result<T, DbError>;
