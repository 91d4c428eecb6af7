//! CLI frontend for the Blackwood Mansion text adventure.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "blackwood",
    about = "Blackwood Mansion — a haunted house text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session
    Play {
        /// Difficulty preset: easy, normal, or hard
        #[arg(short, long, default_value = "normal")]
        difficulty: String,
    },

    /// Replay a fixed sequence of menu choices without prompting
    Script {
        /// Menu choices in order, e.g. 1 1 1 2 1
        #[arg(required = true)]
        choices: Vec<usize>,

        /// Difficulty preset: easy, normal, or hard
        #[arg(short, long, default_value = "normal")]
        difficulty: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { difficulty } => commands::play::run(&difficulty),
        Commands::Script {
            choices,
            difficulty,
        } => commands::script::run(&choices, &difficulty),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
