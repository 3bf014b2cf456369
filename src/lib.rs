//! Ship Guess
//!
//! Name the hidden ship before you run out of attempts.
//!
//! # Overview
//!
//! A ship is drawn at random from a JSON data set. Its bonus text is turned
//! into a queue of clues; one is shown at the start and another after every
//! wrong guess. Race and class are forced into view as the misses pile up.
//! Eight wrong guesses lose the round.
//!
//! # Modules
//!
//! - [`game_engine`] - Round state machine and its controller
//! - [`models`] - Ship records, catalog, constants and errors
//! - [`services`] - Hint extraction, disclosure rule and interactive session
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - User interface and presentation logic
//! - [`cli`] - Command line arguments
//!
//! # Example
//!
//! ```rust,no_run
//! use shipguess::{GameEngine, ShipCatalog};
//!
//! let catalog = ShipCatalog::load("data/ships.json").unwrap();
//! let mut engine = GameEngine::new(catalog, Some(42));
//! engine.start_new_game().unwrap();
//! let outcome = engine.submit_guess("Rifter").unwrap();
//! println!("{:?}", outcome);
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{GameEngine, GameState, GuessOutcome};
pub use models::constants::RoundStatus;
pub use models::errors::{GameError, GameResult};
pub use models::ship::{ShipCatalog, ShipRecord};
pub use services::hints::derive_hints;
