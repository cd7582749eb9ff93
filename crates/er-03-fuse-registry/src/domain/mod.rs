//! Domain layer for the Fuse Registry.

pub mod errors;
pub mod fuses;

pub use errors::*;
pub use fuses::*;
