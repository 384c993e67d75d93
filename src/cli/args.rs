use std::path::PathBuf;

use clap::Parser;

use sst::config::GameOptions;

#[derive(Parser, Debug)]
#[command(name = "sst", about = "Super Star Trek", version)]
pub struct Args {
    /// Seed for the random number generator. Random when omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Total number of Cardassian warships.
    #[arg(long)]
    pub cardassians: Option<i32>,

    /// Starting stardate.
    #[arg(long)]
    pub stardate: Option<f64>,

    /// Mission length in stardates.
    #[arg(long)]
    pub mission_length: Option<f64>,

    /// Directory holding the saved game.
    #[arg(long, default_value = ".sst")]
    pub save_dir: PathBuf,
}

impl Args {
    pub fn game_options(&self) -> GameOptions {
        GameOptions {
            seed: self.seed.unwrap_or_else(rand::random),
            cardassians: self.cardassians,
            starting_stardate: self.stardate,
            mission_length: self.mission_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_become_options() {
        let args = Args::parse_from([
            "sst",
            "--seed",
            "7",
            "--cardassians",
            "18",
            "--stardate",
            "2100",
            "--mission-length",
            "40",
        ]);
        let options = args.game_options();
        assert_eq!(options.seed, 7);
        assert_eq!(options.cardassians, Some(18));
        assert_eq!(options.starting_stardate, Some(2100.0));
        assert_eq!(options.mission_length, Some(40.0));
        assert_eq!(args.save_dir, PathBuf::from(".sst"));
    }

    #[test]
    fn defaults_leave_galaxy_randomized() {
        let args = Args::parse_from(["sst", "-s", "3"]);
        assert_eq!(args.game_options(), GameOptions::new(3));
    }
}
