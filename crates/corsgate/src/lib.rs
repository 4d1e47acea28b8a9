//! Top-level facade crate for corsgate.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use corsgate_core::*;
}

pub mod gateway {
    pub use corsgate_gateway::*;
}
