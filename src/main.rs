//! Binary entrypoint for the Colordoors CLI.
//!
//! Commands:
//! - `play [--seed <n>] [--no-art] [--summary]` - start a session (the default with no subcommand)
//! - `init` - write a starter `colordoors.toml`
//!
//! See the library crate docs for module‑level details: `colordoors::`.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};

use colordoors::config::Config;
use colordoors::game::{Adventure, GameError, StdConsole};

#[derive(Parser)]
#[command(name = "colordoors")]
#[command(about = "A small text adventure: pick a door, survive the room")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (optional; defaults are used when it does not exist)
    #[arg(short, long, default_value = "colordoors.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session (default)
    Play {
        /// Seed the magician's random moves for a reproducible game
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the ASCII art banners
        #[arg(long)]
        no_art: bool,

        /// Print the final player state as JSON after the farewell
        #[arg(long)]
        summary: bool,
    },
    /// Write a default configuration file
    Init,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (seed, no_art, summary) = match cli.command {
        Some(Commands::Init) => {
            init_logging(&Config::default(), cli.verbose);
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
            println!("Wrote {}", cli.config);
            return Ok(());
        }
        Some(Commands::Play {
            seed,
            no_art,
            summary,
        }) => (seed, no_art, summary),
        None => (None, false, false),
    };

    let found = tokio::fs::try_exists(&cli.config).await.unwrap_or(false);
    let mut config = Config::load_or_default(&cli.config).await?;
    init_logging(&config, cli.verbose);
    if !found {
        debug!("config file {} not found; using defaults", cli.config);
    }
    if seed.is_some() {
        config.game.seed = seed;
    }
    if no_art {
        config.game.show_art = false;
    }
    play(&config, summary)?;

    Ok(())
}

fn play(config: &Config, print_summary: bool) -> Result<()> {
    info!("Starting Colordoors v{}", env!("CARGO_PKG_VERSION"));
    debug!("game config: {:?}", config.game);

    let mut console = StdConsole::stdio().with_art(config.game.show_art);
    let mut adventure = Adventure::new(&config.game);
    let summary = match adventure.play(&mut console) {
        Ok(summary) => summary,
        Err(GameError::InputClosed) => {
            info!("input closed mid-session; leaving without a farewell");
            println!();
            return Ok(());
        }
        Err(e) => return Err(e).context("session aborted"),
    };

    if print_summary {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    if let Some(ref file) = config.logging.file {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            Ok(f) => {
                // Game text owns stdout; with a log file configured nothing is echoed to the console
                builder.target(env_logger::Target::Pipe(Box::new(f)));
            }
            Err(e) => {
                eprintln!("Cannot open log file {}: {} (logging to stderr)", file, e);
            }
        }
    }

    builder.format(|fmt, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });
    let _ = builder.try_init();
}
