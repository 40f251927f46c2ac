mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{locate, options, render};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    match &cli.command {
        Commands::Render(args) => render::run(&cli, args),
        Commands::Options(args) => options::run(&cli, args),
        Commands::Locate(args) => locate::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
