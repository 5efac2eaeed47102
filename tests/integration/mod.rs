//! Integration Tests Module
//!
//! End-to-end tests that drive the full synthesis pipeline and the CLI
//! commands over realistic history dumps.

pub mod feed_pipeline;
pub mod history_files;
