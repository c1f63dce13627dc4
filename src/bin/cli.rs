// src/bin/cli.rs
use clap::Parser;
use fcc_catalog::{cli, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();

    let args = cli::Cli::parse();
    cli::run(args)?;
    Ok(())
}
