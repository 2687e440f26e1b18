//! Document management commands

use anyhow::{bail, Context, Result};
use console::style;
use docqa_core::ApiClient;
use std::path::PathBuf;
use tracing::debug;

use crate::output;

/// List the stored documents
pub async fn docs_command(client: &ApiClient) -> Result<()> {
    let spinner = output::network_spinner("Fetching documents...");
    let reply = client.fetch_docs().await;
    spinner.finish_and_clear();

    let docs = output::expect_ok(reply?)?;
    output::print_docs(&docs);
    Ok(())
}

/// Upload a document from inline text or a file.
///
/// The service-side body keeps no whitespace; the client strips it before
/// transmission, so multi-word text arrives as one run of characters.
pub async fn upload_command(
    client: &ApiClient,
    title: &str,
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let text = match (text, file) {
        (Some(text), None) => text,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read document file: {}", path.display()))?,
        (Some(_), Some(_)) => bail!("Provide the document text inline or via --file, not both"),
        (None, None) => bail!("Provide the document text inline or via --file"),
    };

    debug!(title, bytes = text.len(), "uploading document");

    let spinner = output::network_spinner("Uploading document...");
    let reply = client.upload_doc(title, &text).await;
    spinner.finish_and_clear();

    output::expect_ok(reply?)?;
    println!("Uploaded {}", style(title).bold());
    Ok(())
}

/// Remove a stored document by id
pub async fn remove_command(client: &ApiClient, id: &str) -> Result<()> {
    debug!(id, "removing document");

    let spinner = output::network_spinner("Removing document...");
    let reply = client.remove_doc(id).await;
    spinner.finish_and_clear();

    output::expect_ok(reply?)?;
    println!("Removed {}", style(id).bold());
    Ok(())
}
