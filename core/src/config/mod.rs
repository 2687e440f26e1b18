//! Configuration types for docqa core
//!
//! Core only accepts fully resolved, validated configuration. All discovery,
//! loading, and merging happens in the CLI layer.

pub mod types;

pub use types::ClientConfig;
