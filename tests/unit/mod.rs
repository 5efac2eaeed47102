//! Unit Tests Module
//!
//! Focused tests for individual synthesis components, driven through the
//! public library API with the shared fixtures.

pub mod config_defaults;
pub mod feed_ordering;
pub mod token_amounts;
