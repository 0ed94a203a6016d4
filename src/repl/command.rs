//! REPL Commands
//!
//! Command table and input parsing.

use crate::error::{PokedexError, Result};

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    Cache,
}

/// Name, usage, and description of one command, for `help`.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command in the order `help` lists them.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        usage: "help",
        description: "Displays this help message",
    },
    CommandInfo {
        name: "map",
        usage: "map",
        description: "Lists the next page of location areas",
    },
    CommandInfo {
        name: "mapb",
        usage: "mapb",
        description: "Lists the previous page of location areas",
    },
    CommandInfo {
        name: "explore",
        usage: "explore <area>",
        description: "Lists the Pokemon found in a location area",
    },
    CommandInfo {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Throws a Pokeball at a Pokemon",
    },
    CommandInfo {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Shows details of a caught Pokemon",
    },
    CommandInfo {
        name: "pokedex",
        usage: "pokedex",
        description: "Lists every Pokemon you have caught",
    },
    CommandInfo {
        name: "cache",
        usage: "cache",
        description: "Shows response cache statistics",
    },
    CommandInfo {
        name: "exit",
        usage: "exit",
        description: "Exits the Pokedex",
    },
];

/// Trims and lowercases raw input.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

impl Command {
    // == Parse ==
    /// Parses one line of input. Blank input yields `Ok(None)`.
    ///
    /// Arguments after the first are ignored.
    pub fn parse(input: &str) -> Result<Option<Command>> {
        let normalized = normalize(input);
        let mut tokens = normalized.split_whitespace();

        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let argument = tokens.next().map(str::to_string);

        let command = match name {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(argument.ok_or(PokedexError::MissingArgument("area"))?),
            "catch" => Command::Catch(argument.ok_or(PokedexError::MissingArgument("pokemon"))?),
            "inspect" => {
                Command::Inspect(argument.ok_or(PokedexError::MissingArgument("pokemon"))?)
            }
            "pokedex" => Command::Pokedex,
            "cache" => Command::Cache,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Renders the `help` text.
pub fn help_text() -> String {
    let width = COMMANDS
        .iter()
        .map(|info| info.usage.len())
        .max()
        .unwrap_or(0);

    let mut text = String::from("Welcome to the Pokedex!\nUsage:\n");
    for info in COMMANDS {
        text.push_str(&format!(
            "\n  {:width$}  {}",
            info.usage,
            info.description,
            width = width
        ));
    }
    text
}
