//! Domain layer for the orchestrator.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
