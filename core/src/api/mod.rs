//! API client for the document Q&A service

pub mod client;
pub mod types;

// Re-export commonly used types
pub use client::ApiClient;
pub use types::{Answer, ChatMessage, Doc, DocQuery, DocRef, DocUpload, Envelope, Faq};
