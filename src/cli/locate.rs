//! `locate` subcommand

use anyhow::{Context, Result};
use clap::Args;
use upconf::{find_file, SearchStrategy};

#[derive(Args)]
pub struct LocateArgs {
    /// File name to search for in the starting directory and its ancestors
    file: String,

    /// Starting-directory strategy: entry-point, frame or cwd
    #[arg(short, long, default_value = "cwd")]
    strategy: SearchStrategy,
}

pub fn run(args: LocateArgs) -> Result<()> {
    let path = find_file(&args.file, args.strategy)
        .with_context(|| format!("could not locate '{}'", args.file))?;
    println!("{}", path.display());
    Ok(())
}
