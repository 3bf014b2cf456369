/// Attempts a player gets per round.
pub const MAX_GUESSES: u32 = 8;

/// Wrong-guess count at which one of race/class is forced into view.
pub const FIRST_DISCLOSURE_AT: usize = 4;
/// Wrong-guess count at which both race and class must be visible.
pub const SECOND_DISCLOSURE_AT: usize = 6;

/// Fallback used in the forced hints when a ship has no race or class.
pub const UNKNOWN_LABEL: &str = "Unknown";
/// Placeholder shown in summaries for a missing or still-hidden value.
pub const MISSING_LABEL: &str = "—";

pub const RACE_HINT_PREFIX: &str = "Race: ";
pub const CLASS_HINT_PREFIX: &str = "Class: ";

pub const DEFAULT_DATA_PATH: &str = "data/ships.json";

/// The two hints that are always appended last and may be force-revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disclosure {
    Race,
    Class,
}

impl Disclosure {
    pub fn label(&self) -> &'static str {
        match self {
            Disclosure::Race => "RACE",
            Disclosure::Class => "CLASS",
        }
    }
}

/// Lifecycle of a single round. `Idle` is the engine holding no round at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
    GaveUp,
}

impl RoundStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}
