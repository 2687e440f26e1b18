//! Interactive shell
//!
//! The default mode when no subcommand is given: a prompt loop over the
//! route table. Inputs starting with `/` navigate; everything else is
//! dispatched according to the page the shell is currently on.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use docqa_core::router::Router;
use docqa_core::ApiClient;

use crate::commands;
use crate::output;
use crate::pages::{self, Page};

/// Run the interactive shell until the user quits
pub async fn shell_command(client: ApiClient) -> Result<()> {
    let table = pages::route_table()?;
    let mut router = Router::new(table, "/")?;

    println!(
        "{} {}",
        style("docqa").bold().cyan(),
        style(format!("(server: {})", client.config().api_host)).dim()
    );
    let home = router.current().page().await?;
    output::print_page(&home);

    loop {
        let line: String = match Input::with_theme(&ColorfulTheme::default())
            .with_prompt(router.current_path().to_string())
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // closed stdin or no terminal: leave the shell
            Err(_) => break,
        };
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => print_help(),
            "routes" => commands::routes_command()?,
            "back" => {
                if router.go_back() {
                    show_current(&router).await;
                } else {
                    println!("{}", style("Nothing to go back to.").dim());
                }
            }
            _ if line.starts_with('/') => match router.navigate(line).map(|_| ()) {
                Ok(()) => show_current(&router).await,
                Err(err) => println!("{}", style(err).red()),
            },
            _ => {
                let page_name = router.current().route().name.clone();
                if let Err(err) = dispatch(&client, &page_name, line).await {
                    println!("{}", style(format!("error: {err:#}")).red());
                }
            }
        }
    }

    Ok(())
}

/// Print the current page, reporting a failed lazy load without leaving
/// the shell
async fn show_current(router: &Router<Page>) {
    match router.current().page().await {
        Ok(page) => output::print_page(&page),
        Err(err) => println!("{}", style(err).red()),
    }
}

/// Run a page-local command line
async fn dispatch(client: &ApiClient, page_name: &str, line: &str) -> Result<()> {
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default();

    match page_name {
        // free text on the home page is a chat message
        "home" => commands::chat_command(client, line).await,

        "docs" => match head {
            "list" => commands::docs_command(client).await,
            "rm" => match words.next() {
                Some(id) => commands::remove_command(client, id).await,
                None => hint("rm <id>"),
            },
            "ask" => {
                let id = words.next();
                let query = words.collect::<Vec<_>>().join(" ");
                match id {
                    Some(id) if !query.is_empty() => commands::ask_command(client, id, &query).await,
                    _ => hint("ask <id> <query>"),
                }
            }
            _ => hint("list, rm <id> or ask <id> <query>"),
        },

        "faqs" => match head {
            "list" => commands::faqs_command(client).await,
            _ => hint("list"),
        },

        // the ranking pages are informational
        _ => hint("/ to chat, back to return"),
    }
}

fn hint(usage: &str) -> Result<()> {
    println!("{}", style(format!("Try: {usage}")).dim());
    Ok(())
}

fn print_help() {
    println!(
        "\n{}\n\
         \x20 /<path>   go to a page (see `routes`)\n\
         \x20 back      return to the previous page\n\
         \x20 routes    print the route table\n\
         \x20 quit      leave the shell\n\n\
         Anything else is handled by the current page; the home page treats\n\
         input as a chat message.\n",
        style("Shell commands").bold()
    );
}
