//! nodepulse agent library entry.
//!
//! Wires config, host probes and the status responder into an axum router.
//! It is consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod probe;
pub mod responder;
pub mod router;
