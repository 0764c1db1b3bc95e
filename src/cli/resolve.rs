//! `resolve` subcommand

use anyhow::{Context, Result};
use clap::Args;
use upconf::{ConfigFinder, SearchStrategy};

#[derive(Args)]
pub struct ResolveArgs {
    /// Configuration file names; later files override earlier ones
    #[arg(required = true)]
    files: Vec<String>,

    /// Dot-separated key path into the parsed documents (e.g. tool.settings)
    #[arg(short, long, default_value = "")]
    key: String,

    /// Starting-directory strategy: entry-point, frame or cwd
    #[arg(short, long, default_value = "cwd")]
    strategy: SearchStrategy,

    /// Skip files that are not found instead of failing
    #[arg(long)]
    allow_missing: bool,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    // stray dots ("a..b", trailing dot) would otherwise turn into
    // empty-string key segments
    let keys: Vec<&str> = args.key.split('.').filter(|key| !key.is_empty()).collect();

    let value = ConfigFinder::new(args.files)
        .key_path(&keys)
        .strategy(args.strategy)
        .raise_on_missing(!args.allow_missing)
        .resolve()
        .context("configuration resolution failed")?;

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
