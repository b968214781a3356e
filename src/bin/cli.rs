// src/bin/cli.rs
use clap::Parser;
use vinyl_labels::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    cli::run(&args)?;
    Ok(())
}
