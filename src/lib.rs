//! Wallet Transaction History Synthesiser
//!
//! Merges an indexer's paginated per-address transaction feeds into one
//! deduplicated history, orders it (consensus order for alias replay,
//! recency order for display), decodes the OP_RETURN sub-protocols the
//! wallet speaks (SLP tokens, ".xec" alias registrations, plaintext and
//! encrypted messages, airdrop markers) and classifies every transaction
//! into a feed entry.

pub mod cli;
pub mod config;
pub mod decoder;
pub mod errors;
pub mod synthesis;
pub mod tokens;
pub mod types;
pub mod utils;
pub mod wallet;
