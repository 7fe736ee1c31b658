//! Pure computation core for the Fibonacci service.
//!
//! Holds the business logic divorced from any delivery medium: the naive
//! recursive [`fibonacci`] function, the lazy infinite [`Sequence`]
//! iterator, and the [`ServiceIdentity`] loaded from the bundled revision
//! resource. No HTTP, no async, no shared state.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod compute;
pub mod identity;
pub mod sequence;

pub use compute::fibonacci;
pub use identity::{ServiceIdentity, DEFAULT_REVISION_PATH, SERVICE_NAME, UNKNOWN_REVISION};
pub use sequence::{sequence, Sequence};
