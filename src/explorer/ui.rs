//! Explorer screens that are not record views.

use super::command::command_list;
use crate::api::ResourceKind;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {}",
        Style::header("Dragon Ball Z Explorer"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::hint("Use :character to list characters. Enter to drill in. Escape to go back/quit.")
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));

    let commands = command_list();
    let width = commands.iter().map(|(cmd, _)| cmd.len()).max().unwrap_or(0);
    for (cmd, desc) in &commands {
        let alias = cmd
            .strip_prefix(':')
            .and_then(|name| name.parse::<ResourceKind>().ok())
            .map(|kind| format!(" (:{})", kind.alias()))
            .unwrap_or_default();
        println!(
            "  {}  {}{}",
            Style::command(format!("{cmd:<width$}")),
            Style::secondary(desc),
            Style::secondary(alias)
        );
    }

    println!();
    println!(
        "  {}",
        Style::hint("Append resource URLs to a kind command to fetch only those records.")
    );
    println!();
}
