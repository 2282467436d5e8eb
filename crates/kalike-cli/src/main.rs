use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kalike_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "kalike")]
#[command(author, version, about = "A terminal app for learning the Kannada script")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use a content file instead of the built-in dataset
    #[arg(short = 'c', long = "content")]
    content_path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Speak a Kannada phrase aloud
    Speak {
        /// Text to synthesize
        text: String,
        /// Speech pace override (0.3 to 3.0)
        #[arg(short, long)]
        pace: Option<f64>,
    },
    /// Print the content library
    List {
        /// Category to print: vowels, consonants, words or sentences
        category: Option<String>,
    },
    /// Show or reset quiz high scores
    Scores {
        /// Clear all saved high scores
        #[arg(long)]
        reset: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Arc::new(AppConfig::load()?);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, cli.content_path).await,
        Some(Commands::Speak { text, pace }) => commands::speak::run(&config, &text, pace).await,
        Some(Commands::List { category }) => {
            commands::list::run(cli.content_path, category.as_deref())
        }
        Some(Commands::Scores { reset }) => commands::scores::run(&config, reset),
    }
}
