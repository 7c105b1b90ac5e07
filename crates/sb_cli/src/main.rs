//! Scorebook CLI
//!
//! Summaries, command replay, and JSON ↔ save-file conversion for games.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scorebook")]
#[command(about = "Youth baseball scorebook tools", long_about = None)]
struct Cli {
    /// Config file (JSON or YAML); falls back to SB_CONFIG_PATH
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the line score and batting tables of a game
    Summary {
        /// Game JSON file
        #[arg(long)]
        game: PathBuf,

        /// Print the JSON scoresheet instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Apply a JSON array of commands to a game
    Apply {
        #[arg(long)]
        game: PathBuf,

        /// Commands JSON file
        #[arg(long)]
        commands: PathBuf,

        /// Output game JSON (defaults to stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Convert game JSON into a save file
    Pack {
        #[arg(long)]
        game: PathBuf,

        #[arg(long)]
        out: PathBuf,

        #[arg(long)]
        owner: Option<String>,

        /// Allow shared loads
        #[arg(long, default_value = "false")]
        public: bool,
    },

    /// Convert a save file back into game JSON
    Unpack {
        #[arg(long)]
        r#in: PathBuf,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Store a game in the configured save directory
    Save {
        #[arg(long)]
        game: PathBuf,

        #[arg(long)]
        owner: Option<String>,

        #[arg(long, default_value = "false")]
        public: bool,
    },

    /// List games in the configured save directory
    List {
        #[arg(long)]
        owner: Option<String>,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = sb_cli::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Summary { game, json } => {
            let game = sb_cli::read_game(&game)?;
            if json {
                let sheet = sb_core::ScoresheetResponse::build(&game, &config.rules);
                println!("{}", serde_json::to_string_pretty(&sheet)?);
            } else {
                print!("{}", sb_cli::summary(&game, &config));
            }
        }

        Commands::Apply { game, commands, out } => {
            let game = sb_cli::read_game(&game)?;
            let commands = sb_cli::read_commands(&commands)?;
            let count = commands.len();
            let game = sb_cli::apply(game, commands, &config)?;
            tracing::info!(commands = count, "commands applied");

            match out {
                Some(path) => sb_cli::write_game(&path, &game)?,
                None => println!("{}", serde_json::to_string_pretty(&game)?),
            }
        }

        Commands::Pack { game, out, owner, public } => {
            let game = sb_cli::read_game(&game)?;
            let document = sb_cli::pack(game, &out, owner, public)?;
            println!("Packed game {} -> {}", document.id(), out.display());
        }

        Commands::Unpack { r#in, out } => {
            let document = sb_cli::unpack(&r#in)?;
            eprintln!(
                "Game {} (v{}, saved {})",
                document.id(),
                document.version,
                document.format_saved_at()
            );
            match out {
                Some(path) => sb_cli::write_game(&path, &document.game)?,
                None => println!("{}", serde_json::to_string_pretty(&document.game)?),
            }
        }

        Commands::Save { game, owner, public } => {
            let game = sb_cli::read_game(&game)?;
            let id = game.id.clone();
            sb_cli::store_game(&config, game, owner, public)?;
            println!("Saved game {} to {}", id, config.storage.save_dir.display());
        }

        Commands::List { owner } => {
            let listings = sb_cli::list_games(&config, owner.as_deref())?;
            if listings.is_empty() {
                println!("No saved games in {}", config.storage.save_dir.display());
            }
            for game in listings {
                println!(
                    "{}  {}  {} @ {}{}",
                    game.id,
                    game.date,
                    game.away_team,
                    game.home_team,
                    if game.is_public { "  (shared)" } else { "" }
                );
            }
        }
    }

    Ok(())
}
