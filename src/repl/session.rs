//! REPL Session
//!
//! Runs parsed commands against the orchestrator and the Pokedex, producing
//! the text to print.

use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::orchestrator::FetchOrchestrator;
use crate::pokedex::{attempt_catch, Pokedex, CATCH_ROLL_CEILING};
use crate::repl::command::{help_text, Command};

/// What the loop should print, and whether it should stop afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub exit: bool,
}

impl Reply {
    fn print(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            exit: false,
        }
    }

    fn exit(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            exit: true,
        }
    }
}

type Roller = Box<dyn FnMut() -> u32 + Send>;

/// One interactive session: the orchestrator, the Pokedex, and the catch dice.
pub struct Session {
    orchestrator: FetchOrchestrator,
    pokedex: Pokedex,
    roll: Roller,
}

impl Session {
    /// Creates a session rolling catches with the thread-local RNG.
    pub fn new(orchestrator: FetchOrchestrator) -> Self {
        Self::with_roller(orchestrator, || {
            rand::thread_rng().gen_range(0..CATCH_ROLL_CEILING)
        })
    }

    /// Creates a session with a custom catch roll source.
    pub fn with_roller(
        orchestrator: FetchOrchestrator,
        roll: impl FnMut() -> u32 + Send + 'static,
    ) -> Self {
        Self {
            orchestrator,
            pokedex: Pokedex::new(),
            roll: Box::new(roll),
        }
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    /// Parses and executes one line. Blank lines produce empty output.
    pub async fn handle_line(&mut self, line: &str) -> Result<Reply> {
        match Command::parse(line)? {
            Some(command) => self.execute(command).await,
            None => Ok(Reply::print("")),
        }
    }

    // == Execute ==
    pub async fn execute(&mut self, command: Command) -> Result<Reply> {
        debug!(?command, "Executing command");

        match command {
            Command::Help => Ok(Reply::print(help_text())),
            Command::Exit => Ok(Reply::exit("Closing the Pokedex... Goodbye!")),
            Command::Map => {
                let areas = self.orchestrator.advance().await?;
                Ok(Reply::print(list_names(areas.iter().map(|a| a.name.as_str()))))
            }
            Command::MapBack => {
                let areas = self.orchestrator.retreat().await?;
                Ok(Reply::print(list_names(areas.iter().map(|a| a.name.as_str()))))
            }
            Command::Explore(area) => self.explore(&area).await,
            Command::Catch(name) => self.catch(&name).await,
            Command::Inspect(name) => {
                let caught = self.pokedex.inspect(&name)?;
                Ok(Reply::print(caught.pokemon.to_string()))
            }
            Command::Pokedex => Ok(Reply::print(self.list_pokedex())),
            Command::Cache => Ok(Reply::print(self.cache_report().await)),
        }
    }

    async fn explore(&self, area: &str) -> Result<Reply> {
        let detail = self.orchestrator.explore(area).await?;
        let names = detail.pokemon_names();

        let mut output = format!("Exploring {}...", area);
        if names.is_empty() {
            output.push_str("\nNo Pokemon found");
        } else {
            output.push_str("\nFound Pokemon:");
            for name in &names {
                output.push_str(&format!("\n - {}", name));
            }
        }
        Ok(Reply::print(output))
    }

    async fn catch(&mut self, name: &str) -> Result<Reply> {
        let pokemon = self.orchestrator.pokemon(name).await?;
        let roll = (self.roll)();

        let mut output = format!("Throwing a Pokeball at {}...", pokemon.name);
        if attempt_catch(pokemon.base_experience, roll) {
            output.push_str(&format!("\n{} was caught!", pokemon.name));
            if self.pokedex.register(pokemon) {
                output.push_str("\nYou may now inspect it with the inspect command.");
            }
        } else {
            output.push_str(&format!("\n{} escaped!", pokemon.name));
        }
        Ok(Reply::print(output))
    }

    fn list_pokedex(&self) -> String {
        if self.pokedex.is_empty() {
            return "Your Pokedex is empty".to_string();
        }

        let mut output = String::from("Your Pokedex:");
        for caught in self.pokedex.entries() {
            output.push_str(&format!(
                "\n - {} (caught {})",
                caught.pokemon.name,
                caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        output
    }

    async fn cache_report(&self) -> String {
        let cache = self.orchestrator.cache();
        let stats = cache.stats().await;
        format!(
            "Cache: {} entries, {} hits, {} misses ({:.0}% hit rate), {} reaped, sweep every {}s",
            stats.total_entries,
            stats.hits,
            stats.misses,
            stats.hit_rate() * 100.0,
            stats.reaped,
            cache.interval().as_secs_f64()
        )
    }
}

fn list_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join("\n")
}
