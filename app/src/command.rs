//! Terminal command parsing.
//!
//! Each entered line is one discrete user event. Parsing failures are
//! reported to the user and never fatal.

use crate::types::TodoId;
use std::str::FromStr;
use thiserror::Error;

/// One user event, parsed from a terminal line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `add <text>` - create a new item (the text may be empty)
    Add(String),
    /// `toggle <id>` - flip an item's done flag
    Toggle(TodoId),
    /// `rm <id>` - remove an item
    Remove(TodoId),
    /// `list` - re-render the current list
    List,
    /// `help` - show the command summary
    Help,
    /// `quit` - leave the application
    Quit,
}

/// Errors produced while parsing a terminal line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The line held nothing but whitespace
    #[error("empty command")]
    Empty,

    /// The first word is not a known command
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    /// A command that needs an id got none
    #[error("`{0}` needs an id")]
    MissingId(&'static str),

    /// The id argument is not an integer
    #[error("`{0}` is not a valid id")]
    InvalidId(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "" => Err(CommandError::Empty),
            // An empty text is allowed; the core does not validate it
            "add" => Ok(Command::Add(rest.to_string())),
            "toggle" => parse_id("toggle", rest).map(Command::Toggle),
            "rm" => parse_id("rm", rest).map(Command::Remove),
            "list" | "ls" => Ok(Command::List),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(verb: &'static str, rest: &str) -> Result<TodoId, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingId(verb));
    }

    rest.parse::<u64>()
        .map(TodoId::new)
        .map_err(|_| CommandError::InvalidId(rest.to_string()))
}
