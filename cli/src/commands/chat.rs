//! Chat command

use anyhow::Result;
use docqa_core::ApiClient;
use tracing::debug;

use crate::output;

/// Send one chat message and print the ranked answers
pub async fn chat_command(client: &ApiClient, message: &str) -> Result<()> {
    debug!(sender = %client.config().sender, "sending chat message");

    let spinner = output::network_spinner("Searching for an answer...");
    let reply = client
        .send_message(&client.config().sender, message)
        .await;
    spinner.finish_and_clear();

    let answers = output::expect_ok(reply?)?;
    output::print_answers(&answers);
    Ok(())
}
