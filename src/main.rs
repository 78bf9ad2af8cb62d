mod api;
mod cli;
mod core;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{cli::Args, prelude::*};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();
    info!(version = crate_version!(), "starting…");

    args.command.run()?;

    info!("done!");
    Ok(())
}
