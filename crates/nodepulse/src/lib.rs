//! Top-level facade crate for nodepulse.
//!
//! Re-exports the core types and the agent library so users can depend on a single crate.

pub mod core {
    pub use nodepulse_core::*;
}

pub mod agent {
    pub use nodepulse_agent::*;
}
