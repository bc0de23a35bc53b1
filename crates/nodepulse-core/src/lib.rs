//! nodepulse core: transport-agnostic status primitives and error types.
//!
//! This crate defines the status report contract served by the agent, the
//! `/proc/loadavg` parser, and the error surface shared by every nodepulse
//! crate. It carries no transport or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths must surface as `NodePulseError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod loadavg;
pub mod report;

/// Shared result type.
pub use error::{NodePulseError, Result};
