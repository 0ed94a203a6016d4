//! Pokemon DTO and its printable report

use std::fmt;

use serde::Deserialize;

use super::NamedResource;

/// The subset of a PokeAPI `pokemon` document the client keeps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Null for some special forms
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Decimetres
    #[serde(default)]
    pub height: u32,
    /// Hectograms
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Height (dm): {}", self.height)?;
        write!(f, "Weight (hg): {}", self.weight)?;

        if !self.stats.is_empty() {
            write!(f, "\nStats:")?;
            for stat in &self.stats {
                write!(f, "\n  - {}: {}", stat.stat.name, stat.base_stat)?;
            }
        }

        if !self.types.is_empty() {
            write!(f, "\nTypes:")?;
            for pokemon_type in &self.types {
                write!(f, "\n  - {}", pokemon_type.kind.name)?;
            }
        }

        Ok(())
    }
}
