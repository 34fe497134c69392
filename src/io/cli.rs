//! Command-line interface for generating a tiled image from a tileset directory

use crate::algorithm::driver::Driver;
use crate::io::configuration::{
    DEFAULT_GRID_TILES, DEFAULT_MAX_ATTEMPTS, DEFAULT_PIXEL_SIZE, DEFAULT_ROTATIONS, DEFAULT_SEED,
    OUTPUT_NAME,
};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::io::image::export_board_as_png;
use crate::io::progress::AttemptProgress;
use crate::io::tileset::load_tileset;
use crate::spatial::rotation::expand_rotations;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "edgetile")]
#[command(
    version,
    about = "Fill a grid with edge-matched tiles using wave function collapse"
)]
/// Command-line arguments for the tile generation tool
pub struct Cli {
    /// Directory containing PNG tiles and an optional edges.txt manifest
    #[arg(value_name = "TILESET")]
    pub tileset: PathBuf,

    /// Board width in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_TILES)]
    pub width: usize,

    /// Board height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_TILES)]
    pub height: usize,

    /// Side length of the square output image in pixels
    #[arg(short, long, default_value_t = DEFAULT_PIXEL_SIZE)]
    pub pixels: u32,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum solve attempts (0 retries until success)
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Quarter turns generated per tile (0 disables rotation)
    #[arg(short, long, default_value_t = DEFAULT_ROTATIONS)]
    pub rotations: usize,

    /// Tile names excluded from rotation (repeatable)
    #[arg(short, long, value_name = "NAME")]
    pub exempt: Vec<String>,

    /// Derive edges from tile pixels instead of reading the manifest
    #[arg(short, long)]
    pub derive_edges: bool,

    /// Output PNG path (defaults to result.png inside the tileset directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Attempt limit for the driver; `None` means unbounded
    pub const fn max_attempts(&self) -> Option<usize> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.attempts)
        }
    }

    /// Where the rendered board is written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.tileset.join(OUTPUT_NAME))
    }
}

/// Loads a tileset, solves a board and writes the rendered image
pub struct TileRunner {
    cli: Cli,
}

impl TileRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the whole pipeline and return the path written
    ///
    /// # Errors
    ///
    /// Returns an error if the output size is zero, the tileset cannot be
    /// loaded, the catalog is invalid, no solution is found within the
    /// attempt limit, or the image cannot be written.
    // Allow print for user feedback on the finished run
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<PathBuf> {
        let start_time = Instant::now();
        if self.cli.pixels == 0 {
            return Err(invalid_parameter(
                "pixels",
                &self.cli.pixels,
                &"output size must be positive",
            ));
        }

        let tileset = load_tileset(&self.cli.tileset, self.cli.derive_edges)?;

        let mut exempt = tileset.exempt;
        exempt.extend(self.cli.exempt.iter().cloned());
        if let Some(unknown) = exempt
            .iter()
            .find(|id| tileset.catalog.index_of(id).is_none())
        {
            return Err(invalid_parameter(
                "exempt",
                unknown,
                &"no tile with this name in the tileset",
            ));
        }

        let catalog = expand_rotations(&tileset.catalog, self.cli.rotations, &exempt)?;

        let mut progress = if self.cli.should_show_progress() {
            AttemptProgress::new(self.cli.width, self.cli.height)
        } else {
            AttemptProgress::hidden()
        };

        let mut driver = Driver::new(&catalog, self.cli.width, self.cli.height, self.cli.seed)
            .with_max_attempts(self.cli.max_attempts());

        let outcome = driver.run(|attempt, failure| progress.record_failure(attempt, failure));
        let solution = match outcome {
            Ok(solution) => solution,
            Err(error @ TilingError::AttemptsExhausted { .. }) => {
                progress.abandon();
                return Err(error);
            }
            Err(error) => return Err(error),
        };
        progress.finish_solved(solution.attempts);

        let output_path = self.cli.output_path();
        export_board_as_png(
            &solution.board,
            &catalog,
            (self.cli.pixels, self.cli.pixels),
            &output_path,
        )?;

        if self.cli.should_show_progress() {
            eprintln!(
                "Wrote {} ({} tiles, {} attempt(s), {:.2?})",
                output_path.display(),
                catalog.len(),
                solution.attempts,
                start_time.elapsed()
            );
        }

        Ok(output_path)
    }
}
