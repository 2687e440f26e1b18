//! Resolved configuration for the API client

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

fn default_sender() -> String {
    "user".to_string()
}

/// A fully resolved client configuration ready for use by core.
///
/// The base host is injected here once at construction; the client itself
/// never reads process-wide state or re-resolves it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root URL prefix against which all API paths are resolved
    pub api_host: String,
    /// Default sender name used for chat messages
    #[serde(default = "default_sender")]
    pub sender: String,
}

impl ClientConfig {
    /// Create a new client configuration for the given base host
    pub fn new(api_host: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            sender: default_sender(),
        }
    }

    /// Set the default chat sender name
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.api_host.is_empty() {
            return Err(ConfigError::MissingField {
                field: "api_host".to_string(),
            });
        }

        if !self.api_host.starts_with("http://") && !self.api_host.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "api_host".to_string(),
                value: self.api_host.clone(),
            });
        }

        if self.sender.is_empty() {
            return Err(ConfigError::MissingField {
                field: "sender".to_string(),
            });
        }

        Ok(())
    }
}
