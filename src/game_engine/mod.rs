//! Game state machine
//!
//! The GameEngine is the single owner of the ship catalog, the random source
//! and the current round. Holding no round is the idle state; a round that
//! has been won, lost or given up stays readable until the next one starts.

mod round;

pub use round::{GameState, GuessOutcome};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::errors::{GameError, GameResult};
use crate::models::ship::ShipCatalog;

/// Core game engine that drives rounds over a loaded catalog
pub struct GameEngine {
    catalog: ShipCatalog,
    rng: StdRng,
    round: Option<GameState>,
}

impl GameEngine {
    /// Creates an idle engine over `catalog`
    ///
    /// # Arguments
    ///
    /// * `catalog` - Ships that rounds are drawn from
    /// * `seed` - Fixes ship selection and random disclosures when given;
    ///   otherwise the generator is seeded from entropy
    pub fn new(catalog: ShipCatalog, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(catalog, rng)
    }

    pub fn with_rng(catalog: ShipCatalog, rng: StdRng) -> Self {
        Self {
            catalog,
            rng,
            round: None,
        }
    }

    /// Returns the current or most recent round, if any
    pub fn state(&self) -> Option<&GameState> {
        self.round.as_ref()
    }

    /// Starts a fresh round, discarding whatever came before
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyData` when the catalog has no ships.
    pub fn start_new_game(&mut self) -> GameResult<&GameState> {
        let ship = self.catalog.pick(&mut self.rng)?.clone();
        let state = GameState::new(ship);
        info!("new round started with {} hints", state.hints().len());
        Ok(self.round.insert(state))
    }

    /// Submits a guess against the round in progress
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoActiveGame` when no round is in progress,
    /// including after a round has ended.
    pub fn submit_guess(&mut self, raw: &str) -> GameResult<GuessOutcome> {
        let round = Self::active(&mut self.round)?;
        Ok(round.submit_guess(raw, &mut self.rng))
    }

    /// Gives up the round in progress and returns the ship's name
    pub fn give_up(&mut self) -> GameResult<String> {
        let round = Self::active(&mut self.round)?;
        Ok(round.give_up().to_string())
    }

    fn active(round: &mut Option<GameState>) -> GameResult<&mut GameState> {
        round
            .as_mut()
            .filter(|round| round.is_in_progress())
            .ok_or(GameError::NoActiveGame)
    }
}
