//! # docqa Core
//!
//! Core library for docqa - a terminal client for a document
//! question-answering service.
//!
//! This library provides a typed HTTP client for the service's endpoints
//! (chat, document management, FAQs, per-document questions) and a
//! path-based route table with on-demand page loading for frontends built
//! on top of it.

// Core modules
pub mod api;
pub mod config;
pub mod error;
pub mod router;

// Re-export commonly used types
pub use api::{ApiClient, Answer, Doc, Envelope, Faq};
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, Error, Result};

/// Current version of the docqa-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
