use crate::game_engine::{GameState, GuessOutcome};
use crate::io::OutputWriter;
use crate::models::constants::{RoundStatus, MAX_GUESSES, MISSING_LABEL};
use crate::models::ship::ShipRecord;
use crate::services::hints::split_bonus;

const REMAINING_DOT: char = '●';
const USED_DOT: char = '○';

pub struct BoardPresenter;

impl BoardPresenter {
    /// Revealed clues newest first, the guess indicator, then the wrong guesses.
    pub fn show_board(state: &GameState, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("CLUES:");
        for (i, hint) in state.revealed().iter().enumerate().rev() {
            let marker = if i + 1 == state.revealed().len() { "»" } else { " " };
            output.writeln(&format!(" {} {}", marker, hint));
        }

        output.write(&guess_indicator(state.guesses_left()));
        output.writeln(&format!("  {} guesses left", state.guesses_left()));

        if !state.wrong().is_empty() {
            let chips: Vec<String> = state.wrong().iter().map(|w| format!("[{}]", w)).collect();
            output.writeln(&format!("Wrong guesses: {}", chips.join(" ")));
        }
    }

    /// Race and class stay hidden until their hint is out.
    pub fn show_info_panel(state: &GameState, output: &mut dyn OutputWriter) {
        let ship = state.ship();
        let race = if state.race_revealed() { ship.race_or_missing() } else { MISSING_LABEL };
        let class = if state.class_revealed() { ship.class_or_missing() } else { MISSING_LABEL };

        output.writeln(&format!("RACE   {}", race));
        output.writeln(&format!("CLASS  {}", class));
        output.writeln("BONUSES");
        for hint in state.revealed() {
            if hint.starts_with("Race:") || hint.starts_with("Class:") {
                continue;
            }
            output.writeln(&format!("  - {}", hint));
        }
    }
}

/// Eight dots, filled for each attempt still available.
pub fn guess_indicator(remaining: u32) -> String {
    let remaining = remaining.min(MAX_GUESSES);
    (0..MAX_GUESSES)
        .map(|i| if i < remaining { REMAINING_DOT } else { USED_DOT })
        .collect()
}

/// The ship's raw bonuses split into display lines, spoilers included.
pub fn bonus_lines(ship: &ShipRecord) -> Vec<String> {
    ship.bonuses.iter().flat_map(|b| split_bonus(b)).collect()
}

pub struct ResultPresenter;

impl ResultPresenter {
    pub fn show_outcome(outcome: &GuessOutcome, state: &GameState, output: &mut dyn OutputWriter) {
        match outcome {
            GuessOutcome::Ignored => {}
            GuessOutcome::Wrong { .. } => BoardPresenter::show_board(state, output),
            GuessOutcome::Correct { ship_name } => {
                BoardPresenter::show_board(state, output);
                output.writeln(&format!("Correct! It was {}.", ship_name));
                Self::show_summary(state, output);
            }
            GuessOutcome::OutOfGuesses { ship_name } => {
                BoardPresenter::show_board(state, output);
                output.writeln(&format!("Out of guesses! The ship was {}.", ship_name));
                Self::show_summary(state, output);
            }
        }
    }

    pub fn show_gave_up(ship_name: &str, state: &GameState, output: &mut dyn OutputWriter) {
        BoardPresenter::show_board(state, output);
        output.writeln(&format!("Gave up. The ship was {}.", ship_name));
        Self::show_summary(state, output);
    }

    /// End-of-round card. Only drawn once the round is over.
    pub fn show_summary(state: &GameState, output: &mut dyn OutputWriter) {
        let (badge, title, header) = match state.status() {
            RoundStatus::InProgress => return,
            RoundStatus::Won => ("VICTORY", "You Win!", "Bonuses:"),
            RoundStatus::Lost | RoundStatus::GaveUp => ("RESULT", "You Lost", "Bonuses (revealed):"),
        };
        let ship = state.ship();
        let border = "=".repeat(40);

        output.writeln("");
        output.writeln(&border);
        output.writeln(&format!("[{}] {}", badge, title));
        output.writeln(&ship.name);
        output.writeln(&format!(
            "Race: {} • Class: {}",
            ship.race_or_missing(),
            ship.class_or_missing()
        ));
        output.writeln("");
        output.writeln(header);
        for line in bonus_lines(ship) {
            output.writeln(&format!("  - {}", line));
        }
        output.writeln(&border);
        output.writeln("Type /new for another ship.");
    }
}
