use std::path::PathBuf;

use clap::Parser;

use crate::models::constants::DEFAULT_DATA_PATH;

/// Guess the ship from its bonuses before you run out of attempts.
#[derive(Parser, Debug)]
#[command(name = "shipguess", author, version, about, long_about = None)]
pub struct Args {
    /// JSON file holding the list of ships
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Seed for the random number generator (e.g., --seed 12345)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_bundled_data() {
        let args = Args::try_parse_from(["shipguess"]).unwrap();
        assert_eq!(args.data, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(args.seed, None);
    }

    #[test]
    fn accepts_seed_and_data_path() {
        let args = Args::try_parse_from(["shipguess", "-s", "42", "--data", "ships.json"]).unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.data, PathBuf::from("ships.json"));
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Args::try_parse_from(["shipguess", "--seed", "abc"]).is_err());
    }
}
