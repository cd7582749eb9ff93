//! er-cli: script runner for the royalty engine.
//!
//! A script is a JSON array of operations tagged by `op`:
//!
//! ```json
//! [
//!   {"op": "create_config", "parent": "eth", "label": "alice",
//!    "owner": "0x1111111111111111111111111111111111111111",
//!    "royalty_bps": 2000,
//!    "beneficiaries": ["0x2222222222222222222222222222222222222222"],
//!    "shares": [10000]},
//!   {"op": "deposit", "node": "alice.eth", "amount": 1000000},
//!   {"op": "claim", "node": "alice.eth",
//!    "beneficiary": "0x2222222222222222222222222222222222222222"}
//! ]
//! ```
//!
//! Nodes are `0x`-prefixed 32-byte hex or dotted names (namehashed). Amounts
//! are JSON integers, decimal strings or `0x` hex strings.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod script;
