mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{run_check, run_cite, run_resolve, run_uuid};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Uuid(args) => {
            run_uuid(args)?;
        }
        Commands::Resolve(args) => {
            run_resolve(args)?;
        }
        Commands::Check(args) => {
            run_check(args)?;
        }
        Commands::Cite(args) => {
            run_cite(args)?;
        }
    }

    Ok(())
}
