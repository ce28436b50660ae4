//! Command parsing for the command line

use crate::view::StatusFilter;

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quit the application: :q or :quit
    Quit,
    /// Show help: :help or :h
    Help,
    /// Switch the active week: :week <n>
    Week(u32),
    /// Set the status/difficulty filter: :filter <name>
    Filter(StatusFilter),
    /// Search titles, themes and techniques: /pattern or :search <text>
    Search(String),
    /// Clear the search text: :clear
    ClearSearch,
    /// Set the note on the selected problem: :note <text>
    Note(String),
    /// Toggle completion of the selected problem: :toggle or :done
    Toggle,
    /// Clear message: (empty command)
    Nop,
}

/// Result of parsing a command
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(Command),
    /// Unknown command
    UnknownCommand(String),
    /// Command needs an argument
    MissingArgument(String),
    /// Argument could not be understood
    InvalidArgument(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    // Split into command and arguments
    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim()).unwrap_or("");

    match cmd.to_lowercase().as_str() {
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        "help" | "h" | "?" => ParseResult::Ok(Command::Help),
        "week" | "w" => {
            if args.is_empty() {
                return ParseResult::MissingArgument("week".to_string());
            }
            match args.parse::<u32>() {
                Ok(week) => ParseResult::Ok(Command::Week(week)),
                Err(_) => ParseResult::InvalidArgument(format!("not a week number: {args}")),
            }
        }
        "filter" | "f" => {
            if args.is_empty() {
                return ParseResult::MissingArgument("filter".to_string());
            }
            match args.parse::<StatusFilter>() {
                Ok(filter) => ParseResult::Ok(Command::Filter(filter)),
                Err(e) => ParseResult::InvalidArgument(e.to_string()),
            }
        }
        "search" | "s" => {
            if args.is_empty() {
                ParseResult::MissingArgument("search".to_string())
            } else {
                ParseResult::Ok(Command::Search(args.to_string()))
            }
        }
        "clear" | "c" => ParseResult::Ok(Command::ClearSearch),
        // An empty note is allowed and clears the visible text
        "note" | "n" => ParseResult::Ok(Command::Note(args.to_string())),
        "toggle" | "t" | "done" => ParseResult::Ok(Command::Toggle),
        _ => ParseResult::UnknownCommand(cmd.to_string()),
    }
}
