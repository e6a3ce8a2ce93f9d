//! slidesync command-line entry point.

mod commands;

use anyhow::Result;
use clap::Parser;

use slidesync::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    slidesync::logging::init(cli.verbose);

    match cli.command {
        Commands::Play(args) => commands::play::handle(args),
        Commands::Timeline(args) => commands::timeline::handle(&args),
        Commands::Search { query, limit } => commands::search::handle(&query, limit),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
