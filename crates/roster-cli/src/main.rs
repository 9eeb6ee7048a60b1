//! roster CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "roster", version, about = "In-memory student roster with grade statistics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive roster session
    Shell {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Start with an empty roster instead of the sample records
        #[arg(long)]
        empty: bool,
    },

    /// Show statistics for the sample roster
    Stats {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List sample records scored within an inclusive range
    Range {
        /// Lowest score to include
        #[arg(long, allow_hyphen_values = true)]
        min: i64,

        /// Highest score to include
        #[arg(long, allow_hyphen_values = true)]
        max: i64,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write the sample roster and its statistics as an HTML page
    Render {
        /// Output file
        #[arg(long)]
        output: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter roster.toml
    Init,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roster=warn".parse().expect("static directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Shell { config, empty } => commands::shell::execute(config, empty).await,
        Commands::Stats { config, format } => commands::stats::execute(config, format),
        Commands::Range {
            min,
            max,
            format,
            config,
        } => commands::range::execute(min, max, format, config),
        Commands::Render { output, config } => commands::render::execute(output, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
