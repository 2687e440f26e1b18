//! Configuration loader for the docqa CLI
//!
//! Single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./docqa.json or ./.docqa/config.json
//! 3. User config dir: ~/.config/docqa/config.json (or platform equivalent)
//! 4. Environment variables only (DOCQA_API_HOST, DOCQA_SENDER)
//!
//! The resolved [`ClientConfig`] is handed to core fully validated; nothing
//! below this layer reads files or the environment.

use anyhow::{anyhow, Context, Result};
use docqa_core::ClientConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Default, Clone, Deserialize)]
struct RawConfig {
    /// Base host of the Q&A service
    api_host: Option<String>,
    /// Default chat sender name
    sender: Option<String>,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    api_host_override: Option<String>,
    sender_override: Option<String>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            api_host_override: None,
            sender_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set API host override
    pub fn with_api_host_override(mut self, api_host: String) -> Self {
        self.api_host_override = Some(api_host);
        self
    }

    /// Set sender override
    pub fn with_sender_override(mut self, sender: String) -> Self {
        self.sender_override = Some(sender);
        self
    }

    /// Load and resolve configuration
    pub fn load(&self) -> Result<ClientConfig> {
        let file = if let Some(override_path) = &self.config_override {
            Some(Self::resolve_override(override_path)?)
        } else {
            self.locate()
        };

        let mut builder = config::Config::builder();
        if let Some(path) = &file {
            builder = builder.add_source(config::File::from(path.as_path()));
        }
        builder = builder.add_source(config::Environment::with_prefix("DOCQA"));

        let settings = builder.build().with_context(|| match &file {
            Some(path) => format!("Failed to load config file: {}", path.display()),
            None => "Failed to read configuration from the environment".to_string(),
        })?;
        let mut raw: RawConfig = settings
            .try_deserialize()
            .context("Invalid configuration format")?;

        // Apply flag overrides
        if let Some(api_host) = &self.api_host_override {
            raw.api_host = Some(api_host.clone());
        }
        if let Some(sender) = &self.sender_override {
            raw.sender = Some(sender.clone());
        }

        let api_host = raw.api_host.ok_or_else(|| {
            anyhow!(
                "No configuration found. Create a docqa.json file with an \
                 \"api_host\" entry or set DOCQA_API_HOST"
            )
        })?;

        let mut config = ClientConfig::new(api_host);
        if let Some(sender) = raw.sender {
            config = config.with_sender(sender);
        }

        config.validate().context("Configuration validation failed")?;
        Ok(config)
    }

    /// Resolve an explicit --config path to a file
    fn resolve_override(path: &Path) -> Result<PathBuf> {
        if path.is_file() {
            Ok(path.to_path_buf())
        } else if path.is_dir() {
            let config_file = path.join("config.json");
            if config_file.is_file() {
                Ok(config_file)
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Search for a config file in priority order
    fn locate(&self) -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;

        let candidates = [
            Some(cwd.join("docqa.json")),
            Some(cwd.join(".docqa").join("config.json")),
            dirs::config_dir().map(|dir| dir.join("docqa").join("config.json")),
        ];

        candidates.into_iter().flatten().find(|path| path.is_file())
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
