//! Generation defaults and tileset file conventions

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default board size in tiles along each axis
pub const DEFAULT_GRID_TILES: usize = 16;

/// Default side length of the rendered image in pixels
pub const DEFAULT_PIXEL_SIZE: u32 = 1024;

/// Default number of solve attempts before giving up (0 means unbounded)
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Default number of quarter turns generated per tile
pub const DEFAULT_ROTATIONS: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board dimension in tiles
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Tileset layout
/// Edge manifest file name looked up inside a tileset directory
pub const EDGE_MANIFEST: &str = "edges.txt";
/// Manifest marker for tiles whose edges are rotation invariant
pub const SYMMETRIC_MARKER: &str = "symmetric";
/// Separator between a base tile id and its rotation index
pub const ROTATION_SEPARATOR: &str = "##";

// Output settings
/// File name of the rendered board when no output path is given
pub const OUTPUT_NAME: &str = "result.png";
/// Spinner redraw interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 120;
