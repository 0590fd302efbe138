use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

use commands::DumpFormat;

#[derive(Parser)]
#[command(name = "rangevec-cmd")]
#[command(about = "Command-line driver for sparse interval lists")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a script of list operations
    Run {
        /// Rendering used by `dump` statements
        #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
        format: DumpFormat,

        /// Script file to execute (`-` reads from stdin)
        script: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    match cli.command {
        Commands::Run { format, script } => commands::run::run(&script, format),
    }
}
