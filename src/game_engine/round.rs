use log::{debug, trace};
use rand::Rng;

use crate::models::constants::{Disclosure, RoundStatus, MAX_GUESSES};
use crate::models::ship::ShipRecord;
use crate::services::disclosure::forced_disclosure;
use crate::services::hints::{class_hint, derive_hints, race_hint};

/// What a submitted guess did to the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Blank input; nothing changed.
    Ignored,
    /// The ship was named. Every hint is now revealed.
    Correct { ship_name: String },
    /// A miss with attempts to spare. Lists the hints this guess revealed.
    Wrong { newly_revealed: Vec<String> },
    /// The last attempt missed. Every hint is now revealed.
    OutOfGuesses { ship_name: String },
}

/// One round: the hidden ship, its hint queue and the player's progress.
#[derive(Debug, Clone)]
pub struct GameState {
    ship: ShipRecord,
    hints: Vec<String>,
    revealed: Vec<String>,
    wrong: Vec<String>,
    guesses_left: u32,
    status: RoundStatus,
}

impl GameState {
    /// Start a round for `ship` with the first hint already showing.
    pub fn new(ship: ShipRecord) -> Self {
        let hints = derive_hints(&ship);
        let revealed = hints.first().cloned().into_iter().collect();
        GameState {
            ship,
            hints,
            revealed,
            wrong: Vec::new(),
            guesses_left: MAX_GUESSES,
            status: RoundStatus::InProgress,
        }
    }

    pub fn ship(&self) -> &ShipRecord {
        &self.ship
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Revealed hints, oldest first.
    pub fn revealed(&self) -> &[String] {
        &self.revealed
    }

    pub fn wrong(&self) -> &[String] {
        &self.wrong
    }

    pub fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_in_progress(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn is_revealed(&self, hint: &str) -> bool {
        self.revealed.iter().any(|h| h == hint)
    }

    pub fn race_revealed(&self) -> bool {
        self.is_revealed(&race_hint(&self.ship))
    }

    pub fn class_revealed(&self) -> bool {
        self.is_revealed(&class_hint(&self.ship))
    }

    /// Apply one guess. The caller ensures the round is still in progress.
    pub fn submit_guess<R: Rng + ?Sized>(&mut self, raw: &str, rng: &mut R) -> GuessOutcome {
        let guess = raw.trim();
        if guess.is_empty() {
            return GuessOutcome::Ignored;
        }
        trace!("guess {:?}", guess);

        if self.ship.is_named(guess) {
            self.reveal_all();
            self.status = RoundStatus::Won;
            return GuessOutcome::Correct {
                ship_name: self.ship.name.clone(),
            };
        }

        self.guesses_left = self.guesses_left.saturating_sub(1);
        self.wrong.push(guess.to_string());

        let before = self.revealed.len();
        let next = self.hints.iter().find(|h| !self.revealed.contains(h)).cloned();
        if let Some(next) = next {
            self.revealed.push(next);
        }
        self.apply_forced_disclosure(rng);

        if self.guesses_left == 0 {
            self.reveal_all();
            self.status = RoundStatus::Lost;
            return GuessOutcome::OutOfGuesses {
                ship_name: self.ship.name.clone(),
            };
        }

        GuessOutcome::Wrong {
            newly_revealed: self.revealed[before..].to_vec(),
        }
    }

    /// End the round without a win. Returns the ship's name.
    pub fn give_up(&mut self) -> &str {
        self.reveal_all();
        self.status = RoundStatus::GaveUp;
        &self.ship.name
    }

    fn apply_forced_disclosure<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let forced = forced_disclosure(
            self.wrong.len(),
            self.race_revealed(),
            self.class_revealed(),
            rng,
        );
        let Some(disclosure) = forced else {
            return;
        };

        debug!(
            "forcing {} hint after {} wrong guesses",
            disclosure.label(),
            self.wrong.len()
        );
        let hint = match disclosure {
            Disclosure::Race => race_hint(&self.ship),
            Disclosure::Class => class_hint(&self.ship),
        };
        if !self.is_revealed(&hint) {
            self.revealed.push(hint);
        }
    }

    fn reveal_all(&mut self) {
        self.revealed = self.hints.clone();
    }
}
