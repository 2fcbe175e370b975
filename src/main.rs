//! Cat Bounce entry point.
//!
//! Opens a 400x400 window and bounces a cat image left and right across it,
//! using:
//! - **raylib** for windowing, textures and frame pacing
//! - **bevy_ecs** for the world context shared by scenes and observers
//!
//! Press F1 to toggle the FPS counter. Close the window to quit.
//!
//! The cat image is not bundled. Place it at `assets/image/cat.jpg` (or set
//! `cat_image` under `[assets]` in `config.ini`) before running; a missing or
//! undecodable image stops the game at startup. raylib decodes JPEG only when
//! built with JPEG support, so a PNG is the safer choice.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use catbounce::game::Game;
use catbounce::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

/// Cat Bounce
#[derive(Parser)]
#[command(version, about = "A cat bouncing from wall to wall.")]
struct Cli {
    /// Path of the INI configuration file. Missing files fall back to defaults.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

/// Thin wrapper owning the game for the lifetime of the process.
struct App {
    game: Game,
}

impl App {
    fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
        }
    }

    fn start(&mut self) -> Result<(), String> {
        self.game.start_play()
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    info!("Starting Cat Bounce");
    let mut app = App::new(config);
    if let Err(e) = app.start() {
        error!("{}", e);
        std::process::exit(1);
    }
}
