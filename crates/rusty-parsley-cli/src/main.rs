mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "rusty-parsley")]
#[command(version, about = "Translate validation rule strings into Parsley data attributes", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a rule file (.toml or .json) and print the attributes as JSON
    Translate {
        /// Rule file mapping field names to rule strings
        file: PathBuf,

        /// Config file (default: ./rusty-parsley.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Translate one rule string and print its attributes
    Field {
        /// Rule string, e.g. "required|min:3|max:64"
        rules: String,

        /// Config file (default: ./rusty-parsley.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the rule names with a dedicated translation
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match cli.command {
        Commands::Translate {
            file,
            config,
            compact,
        } => {
            commands::translate::execute(&file, config.as_deref(), compact)?;
        }
        Commands::Field { rules, config } => {
            commands::field::execute(&rules, config.as_deref())?;
        }
        Commands::Rules => {
            commands::rules::execute();
        }
    }

    Ok(())
}
