use log::error;

use shipguess::cli::args;
use shipguess::services::game::Game;
use shipguess::{GameEngine, ShipCatalog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::try_init().unwrap_or(());
    let args = args::parse();

    println!("*** SHIP GUESS ***");
    println!();

    let catalog = ShipCatalog::load(&args.data).map_err(|e| {
        error!("startup failed: {}", e);
        e
    })?;

    let mut game = Game::new(GameEngine::new(catalog, args.seed));
    game.run().map_err(|e| {
        error!("session ended: {}", e);
        e
    })?;
    Ok(())
}
