//! # ravel-crypto
//!
//! Keccak-256 hashing, the identifier hash used throughout the Ethereum
//! ecosystem for function selectors and event topics.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::keccak256;
