use std::path::PathBuf;

use thiserror::Error;

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// The ship data file could not be read
    #[error("could not read ship data from {}: {source}", path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The ship data file is not a valid list of ships
    #[error("could not parse ship data: {0}")]
    DataParse(#[from] serde_json::Error),
    /// No ships were loaded, so no round can start
    #[error("no ships are available to guess")]
    EmptyData,
    /// A guess or give-up arrived with no round in progress
    #[error("start a new game first")]
    NoActiveGame,
    /// Terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    /// Startup errors leave no game to play; everything else is reported and play goes on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::DataLoad { .. } | GameError::DataParse(_) | GameError::Io(_)
        )
    }
}
