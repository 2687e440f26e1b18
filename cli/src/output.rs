//! Terminal rendering helpers shared by the subcommands and the shell

use console::style;
use docqa_core::{Answer, Doc, Envelope, Faq};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::pages::Page;

/// Spinner shown while a request is in flight
pub fn network_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static spinner template"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Fail on server-side error codes, otherwise hand back the result rows.
///
/// The client itself never interprets the envelope; this is the CLI's own
/// boundary where a nonzero code becomes a user-facing error.
pub fn expect_ok<T>(envelope: Envelope<T>) -> anyhow::Result<Vec<T>> {
    if !envelope.is_ok() {
        anyhow::bail!(
            "server error (code {}): {}",
            envelope.code,
            envelope.message.unwrap_or_else(|| "no details".to_string())
        );
    }
    Ok(envelope.results)
}

/// Print a page title and body
pub fn print_page(page: &Page) {
    println!("\n{}", style(&page.title).bold().cyan());
    println!("{}\n", page.body);
}

/// Print ranked answers, best first
pub fn print_answers(answers: &[Answer]) {
    if answers.is_empty() {
        println!("{}", style("No answer found.").dim());
        return;
    }

    for (rank, answer) in answers.iter().enumerate() {
        let confidence = answer
            .final_prob
            .map(|p| format!(" ({:.1}%)", p * 100.0))
            .unwrap_or_default();
        println!(
            "{} {}{}",
            style(format!("{}.", rank + 1)).dim(),
            style(&answer.answer).bold(),
            style(confidence).dim()
        );
        if let Some(title) = &answer.title {
            println!("   {}", style(title).green());
        }
        if let Some(link) = &answer.source_link {
            println!("   {}", style(link).dim().underlined());
        }
    }
}

/// Print the stored document listing
pub fn print_docs(docs: &[Doc]) {
    if docs.is_empty() {
        println!("{}", style("No documents uploaded yet.").dim());
        return;
    }

    for doc in docs {
        println!("{}  {}", style(&doc.id).dim(), style(&doc.title).bold());
    }
}

/// Print FAQ entries as question/answer pairs
pub fn print_faqs(faqs: &[Faq]) {
    if faqs.is_empty() {
        println!("{}", style("No FAQ entries.").dim());
        return;
    }

    for faq in faqs {
        println!("{} {}", style("Q:").bold().cyan(), faq.question);
        println!("{} {}\n", style("A:").bold().green(), faq.answer);
    }
}
