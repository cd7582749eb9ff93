//! # Royalty Engine Test Suite
//!
//! Cross-subsystem tests driven through the public service API.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs    # End-to-end royalty flows
//!     ├── atomicity.rs    # All-or-nothing creation and claims
//!     └── concurrency.rs  # Parallel deposits, claims and creation
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p er-tests
//! cargo test -p er-tests integration::concurrency::
//! ```

#![allow(dead_code)]

pub mod integration;
