mod burrow;
mod cycle;
mod date;
mod feed;
mod prompt;

use clap::{Parser, Subcommand};

use crate::{
    cli::{burrow::BurrowArgs, cycle::CycleArgs, prompt::PromptArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Logs go to stderr, results to stdout.
    #[clap(long, default_value = "warn", env = "AUTOBILL_LOG_LEVEL")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: ask for the site and the billing cycle, then calculate, over and over.
    #[clap(name = "prompt")]
    Prompt(Box<PromptArgs>),

    /// Calculate a single billing cycle without asking anything.
    #[clap(name = "cycle")]
    Cycle(Box<CycleArgs>),

    /// Development tools.
    #[clap(name = "burrow")]
    Burrow(Box<BurrowArgs>),
}

impl Command {
    pub fn run(self) -> Result {
        match self {
            Self::Prompt(args) => args.run(),
            Self::Cycle(args) => args.run(),
            Self::Burrow(args) => args.run(),
        }
    }
}
