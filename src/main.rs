//! Tic-Tac-Toe GUI
//!
//! A graphical interface for playing Tic-Tac-Toe against the computer or
//! another player.

use clap::Parser;
use log::info;

use tictactoe::ui::{StartOptions, TicTacToeApp};
use tictactoe::{Difficulty, GameMode};

/// Play Tic-Tac-Toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Who plays: pvp (two humans) or pvc (human vs computer)
    #[arg(long, value_enum, default_value_t = GameMode::PvC)]
    mode: GameMode,

    /// Computer strength
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    difficulty: Difficulty,

    /// Let the computer play X and open the game (PvC only)
    #[arg(long)]
    computer_first: bool,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Args> for StartOptions {
    fn from(args: Args) -> Self {
        StartOptions {
            mode: args.mode,
            difficulty: args.difficulty,
            computer_first: args.computer_first,
            seed: args.seed,
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("starting with {:?}", args);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([560.0, 420.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    let start = StartOptions::from(args);
    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, start)))),
    )
}
