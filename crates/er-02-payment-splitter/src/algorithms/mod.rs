//! Distribution algorithms for the Payment Splitter.

pub mod distribution;

pub use distribution::*;
