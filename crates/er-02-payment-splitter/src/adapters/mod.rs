//! Adapters for the Payment Splitter.

pub mod in_memory_payouts;

pub use in_memory_payouts::InMemoryPayouts;
