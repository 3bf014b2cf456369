use std::io::ErrorKind;

use log::warn;

use crate::game_engine::GameEngine;
use crate::io::{InputReader, OutputWriter, TerminalIO};
use crate::models::errors::{GameError, GameResult};
use crate::ui::presenters::{BoardPresenter, ResultPresenter};

/// Interactive session: reads lines, drives the engine, renders the result.
pub struct Game<I: InputReader, O: OutputWriter> {
    engine: GameEngine,
    input: I,
    output: O,
}

impl Game<TerminalIO, TerminalIO> {
    pub fn new(engine: GameEngine) -> Self {
        Game::with_io(engine, TerminalIO, TerminalIO)
    }
}

impl<I: InputReader, O: OutputWriter> Game<I, O> {
    pub fn with_io(engine: GameEngine, input: I, output: O) -> Self {
        Game {
            engine,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Play until `/quit` or end of input. A round starts right away.
    pub fn run(&mut self) -> GameResult<()> {
        Self::print_command_menu(&mut self.output);
        self.report(|game| game.new_round())?;

        loop {
            let input = match self.input.read_line("GUESS>") {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e.into()),
            };
            let input = input.trim();

            match input {
                "/quit" | "/q" => {
                    self.output.writeln("FLY SAFE, CAPSULEER.");
                    break;
                }
                "/new" | "/n" => self.report(|game| game.new_round())?,
                "/giveup" | "/g" => self.report(|game| game.give_up())?,
                "/status" | "/s" => self.report(|game| game.status())?,
                "/help" | "/h" => Self::print_command_menu(&mut self.output),
                guess => self.report(|game| game.guess(guess))?,
            }
        }
        Ok(())
    }

    /// Run one command. Soft failures are shown to the player and play goes on;
    /// fatal ones end the session.
    fn report(&mut self, command: impl FnOnce(&mut Self) -> GameResult<()>) -> GameResult<()> {
        match command(self) {
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                warn!("{}", e);
                self.output.writeln(&format!("Error: {}", e));
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    fn new_round(&mut self) -> GameResult<()> {
        let state = self.engine.start_new_game()?;
        self.output.writeln("");
        self.output.writeln("A NEW SHIP HAS APPEARED ON SCAN. NAME IT.");
        BoardPresenter::show_board(state, &mut self.output);
        Ok(())
    }

    fn guess(&mut self, raw: &str) -> GameResult<()> {
        let outcome = self.engine.submit_guess(raw)?;
        if let Some(state) = self.engine.state() {
            ResultPresenter::show_outcome(&outcome, state, &mut self.output);
        }
        Ok(())
    }

    fn give_up(&mut self) -> GameResult<()> {
        let ship_name = self.engine.give_up()?;
        if let Some(state) = self.engine.state() {
            ResultPresenter::show_gave_up(&ship_name, state, &mut self.output);
        }
        Ok(())
    }

    fn status(&mut self) -> GameResult<()> {
        let state = self.engine.state().ok_or(GameError::NoActiveGame)?;
        BoardPresenter::show_board(state, &mut self.output);
        BoardPresenter::show_info_panel(state, &mut self.output);
        ResultPresenter::show_summary(state, &mut self.output);
        Ok(())
    }

    fn print_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("TYPE A SHIP NAME TO GUESS, OR ONE OF:");
        output.writeln("   /new    = START A NEW GAME");
        output.writeln("   /giveup = REVEAL THE SHIP");
        output.writeln("   /status = SHOW CLUES AND KNOWN DETAILS");
        output.writeln("   /help   = SHOW THIS MENU");
        output.writeln("   /quit   = LEAVE");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::{MockInput, MockOutput};
    use crate::models::constants::RoundStatus;
    use crate::models::ship::{ShipCatalog, ShipRecord};

    fn session(lines: Vec<&str>) -> Game<MockInput, MockOutput> {
        let catalog = ShipCatalog::new(vec![ShipRecord::new(
            "Rifter",
            "Minmatar",
            "Frigate",
            &["Minmatar Frigate: 5% bonus to shield"],
        )]);
        Game::with_io(GameEngine::new(catalog, Some(1)), MockInput::new(lines), MockOutput::new())
    }

    #[test]
    fn run_starts_a_round_and_stops_at_end_of_input() {
        let mut game = session(vec![]);
        assert!(game.run().is_ok());
        assert!(game.engine().state().unwrap().is_in_progress());
        assert!(game.output().text().contains("A NEW SHIP HAS APPEARED"));
    }

    #[test]
    fn quit_ends_the_session() {
        let mut game = session(vec!["/quit", "Rifter"]);
        game.run().unwrap();
        assert!(game.engine().state().unwrap().is_in_progress());
        assert!(game.output().text().contains("FLY SAFE"));
    }

    #[test]
    fn guess_after_win_reports_no_active_game() {
        let mut game = session(vec!["rifter", "again"]);
        game.run().unwrap();
        let text = game.output().text();
        assert!(text.contains("Correct! It was Rifter."));
        assert!(text.contains("Error: start a new game first"));
    }

    #[test]
    fn give_up_then_status_shows_summary() {
        let mut game = session(vec!["/giveup", "/status"]);
        game.run().unwrap();
        assert_eq!(game.engine().state().unwrap().status(), RoundStatus::GaveUp);
        let text = game.output().text();
        assert!(text.contains("Gave up. The ship was Rifter."));
        assert!(text.contains("RACE   Minmatar"));
    }

    #[test]
    fn report_stops_on_fatal_errors_only() {
        let mut game = session(vec![]);

        let soft = game.report(|_| Err(GameError::NoActiveGame));
        assert!(soft.is_ok());
        assert!(game.output().text().contains("Error: start a new game first"));

        let fatal = game.report(|_| {
            Err(GameError::Io(std::io::Error::new(ErrorKind::BrokenPipe, "closed")))
        });
        assert!(matches!(fatal, Err(GameError::Io(_))));
        assert!(!game.output().text().contains("closed"));
    }

    #[test]
    fn empty_catalog_is_reported_not_fatal() {
        let mut game = Game::with_io(
            GameEngine::new(ShipCatalog::default(), Some(1)),
            MockInput::new(vec!["/new"]),
            MockOutput::new(),
        );
        assert!(game.run().is_ok());
        assert!(game.output().text().contains("Error: no ships are available to guess"));
    }
}
