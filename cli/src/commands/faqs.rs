//! FAQ listing command

use anyhow::Result;
use docqa_core::ApiClient;

use crate::output;

/// Fetch and print the frequently asked questions
pub async fn faqs_command(client: &ApiClient) -> Result<()> {
    let spinner = output::network_spinner("Fetching FAQ entries...");
    let reply = client.fetch_faqs().await;
    spinner.finish_and_clear();

    let faqs = output::expect_ok(reply?)?;
    output::print_faqs(&faqs);
    Ok(())
}
