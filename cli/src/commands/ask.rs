//! Per-document question command

use anyhow::Result;
use docqa_core::ApiClient;
use tracing::debug;

use crate::output;

/// Ask a question about one stored document and print the answers
pub async fn ask_command(client: &ApiClient, id: &str, query: &str) -> Result<()> {
    debug!(id, "asking document question");

    let spinner = output::network_spinner("Reading the document...");
    let reply = client.doc_ask(id, query).await;
    spinner.finish_and_clear();

    let answers = output::expect_ok(reply?)?;
    output::print_answers(&answers);
    Ok(())
}
