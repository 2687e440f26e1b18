//! # docqa CLI
//!
//! Terminal frontend for a document question-answering service.
//!
//! ## Usage
//!
//! - `docqa` - Start the interactive shell
//! - `docqa chat "why is the sky blue"` - Ask one question
//! - `docqa docs` / `docqa upload` / `docqa rm` - Manage documents
//! - `docqa faqs` - List the frequently asked questions
//! - `docqa ask <id> "..."` - Ask about one stored document
//! - `docqa routes` - Print the shell's route table

use anyhow::Result;
use clap::{Parser, Subcommand};
use docqa_core::ApiClient;
use std::path::PathBuf;

mod commands;
mod config;
mod output;
mod pages;
mod shell;

use config::CliConfigLoader;

/// docqa - chat with a document Q&A service from the terminal
#[derive(Parser)]
#[command(name = "docqa")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Chat with a document question-answering service")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base host of the Q&A service
    #[arg(long)]
    api_host: Option<String>,

    /// Sender name used for chat messages
    #[arg(long)]
    sender: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one chat message and print the ranked answers
    Chat {
        /// The message to send
        message: String,
    },

    /// List the stored documents
    Docs,

    /// Upload a document (the body text is stored without any whitespace)
    Upload {
        /// Document title, stored verbatim
        title: String,
        /// Document text
        text: Option<String>,
        /// Read the document text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Remove a stored document by id
    Rm {
        /// Document id
        id: String,
    },

    /// List the frequently asked questions
    Faqs,

    /// Ask a question about one stored document
    Ask {
        /// Document id
        id: String,
        /// The question to ask
        query: String,
    },

    /// Print the interactive shell's route table
    Routes,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(api_host) = &cli.api_host {
        loader = loader.with_api_host_override(api_host.clone());
    }

    if let Some(sender) = &cli.sender {
        loader = loader.with_sender_override(sender.clone());
    }

    loader
}

/// Load configuration and build the API client
fn build_client(cli: &Cli) -> Result<ApiClient> {
    let config = build_config_loader(cli).load()?;
    Ok(ApiClient::new(config)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    match cli.command {
        Some(Commands::Chat { ref message }) => {
            commands::chat_command(&build_client(&cli)?, message).await
        }
        Some(Commands::Docs) => commands::docs_command(&build_client(&cli)?).await,
        Some(Commands::Upload {
            ref title,
            ref text,
            ref file,
        }) => {
            commands::upload_command(&build_client(&cli)?, title, text.clone(), file.clone()).await
        }
        Some(Commands::Rm { ref id }) => commands::remove_command(&build_client(&cli)?, id).await,
        Some(Commands::Faqs) => commands::faqs_command(&build_client(&cli)?).await,
        Some(Commands::Ask { ref id, ref query }) => {
            commands::ask_command(&build_client(&cli)?, id, query).await
        }
        // the route table is static; printing it needs no configuration
        Some(Commands::Routes) => commands::routes_command(),
        None => shell::shell_command(build_client(&cli)?).await,
    }
}
