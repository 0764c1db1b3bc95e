//! upconf: locate and merge nested configuration from ancestor directories

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
