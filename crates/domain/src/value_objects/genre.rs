//! Game genre classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The fixed set of genres a game can be filed under.
///
/// Serialized as its display string, which is also the form stored in the
/// search index (`genre` field) and in the `games.genre` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Genre {
    Action,
    Adventure,
    Rpg,
    Strategy,
    Simulation,
    Sports,
}

impl Genre {
    /// Every genre, in declaration order.
    pub const ALL: [Genre; 6] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Rpg,
        Genre::Strategy,
        Genre::Simulation,
        Genre::Sports,
    ];

    /// Display string used for serialization, storage, and indexing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Rpg => "RPG",
            Genre::Strategy => "Strategy",
            Genre::Simulation => "Simulation",
            Genre::Sports => "Sports",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "action" => Ok(Genre::Action),
            "adventure" => Ok(Genre::Adventure),
            "rpg" => Ok(Genre::Rpg),
            "strategy" => Ok(Genre::Strategy),
            "simulation" => Ok(Genre::Simulation),
            "sports" => Ok(Genre::Sports),
            _ => Err(DomainError::parse(format!("Unknown genre: {}", s))),
        }
    }
}

impl TryFrom<String> for Genre {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Genre> for String {
    fn from(value: Genre) -> Self {
        value.as_str().to_string()
    }
}
