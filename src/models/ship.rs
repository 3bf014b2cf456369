use std::fs;
use std::path::Path;

use log::info;
use rand::Rng;
use serde::{Deserialize, Deserializer};

use super::constants::{MISSING_LABEL, UNKNOWN_LABEL};
use super::errors::{GameError, GameResult};

/// One ship from the data set. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShipRecord {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub race: String,
    #[serde(rename = "class", default, deserialize_with = "null_as_default")]
    pub class: String,
    /// Raw bonus text, possibly several bonuses joined with hyphens.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bonuses: Vec<String>,
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ShipRecord {
    pub fn new(name: &str, race: &str, class: &str, bonuses: &[&str]) -> Self {
        ShipRecord {
            name: name.to_string(),
            race: race.to_string(),
            class: class.to_string(),
            bonuses: bonuses.iter().map(|b| b.to_string()).collect(),
        }
    }

    /// Race as it appears in the forced hint.
    pub fn race_or_unknown(&self) -> &str {
        or_label(&self.race, UNKNOWN_LABEL)
    }

    /// Class as it appears in the forced hint.
    pub fn class_or_unknown(&self) -> &str {
        or_label(&self.class, UNKNOWN_LABEL)
    }

    pub fn race_or_missing(&self) -> &str {
        or_label(&self.race, MISSING_LABEL)
    }

    pub fn class_or_missing(&self) -> &str {
        or_label(&self.class, MISSING_LABEL)
    }

    /// Case-insensitive exact comparison of a trimmed guess with the ship name.
    pub fn is_named(&self, guess: &str) -> bool {
        guess.trim().to_lowercase() == self.name.trim().to_lowercase()
    }
}

fn or_label<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// The full list of ships a round can be drawn from.
#[derive(Debug, Clone, Default)]
pub struct ShipCatalog {
    ships: Vec<ShipRecord>,
}

impl ShipCatalog {
    pub fn new(ships: Vec<ShipRecord>) -> Self {
        ShipCatalog { ships }
    }

    /// Read and parse a JSON array of ships. Any failure here is fatal to startup.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| GameError::DataLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&contents)?;
        info!("loaded {} ships from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> GameResult<Self> {
        let ships: Vec<ShipRecord> = serde_json::from_str(json)?;
        Ok(ShipCatalog::new(ships))
    }

    pub fn ships(&self) -> &[ShipRecord] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Pick a ship uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> GameResult<&ShipRecord> {
        if self.ships.is_empty() {
            return Err(GameError::EmptyData);
        }
        let idx = rng.gen_range(0..self.ships.len());
        Ok(&self.ships[idx])
    }
}
