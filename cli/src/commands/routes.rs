//! Route table listing command

use anyhow::Result;
use console::style;

use crate::pages;

/// Print the interactive shell's route table
pub fn routes_command() -> Result<()> {
    let table = pages::route_table()?;

    for entry in table.entries() {
        let route = entry.route();
        let policy = if entry.loader().is_lazy() {
            "lazy"
        } else {
            "eager"
        };
        // pad before styling so the ANSI codes do not skew the columns
        println!(
            "{} {:<6} {}",
            style(format!("{:<8}", route.path)).bold(),
            route.name,
            style(policy).dim()
        );
    }
    Ok(())
}
