//! CLI entry point for edge-matched tile generation

use clap::Parser;
use edgetile::io::cli::{Cli, TileRunner};

fn main() -> edgetile::Result<()> {
    let cli = Cli::parse();
    let runner = TileRunner::new(cli);
    runner.run()?;
    Ok(())
}
