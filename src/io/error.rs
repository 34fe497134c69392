//! Error types for catalog construction, solving and file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// The solver was given a catalog without tiles
    EmptyCatalog,

    /// A tile payload or edge set cannot be used
    ///
    /// Raised while building a catalog, before any solving starts.
    MalformedTile {
        /// Identifier of the offending tile
        id: String,
        /// Description of what is wrong with the tile
        reason: String,
    },

    /// A tile identifier was inserted into a catalog twice
    DuplicateTile {
        /// The repeated identifier
        id: String,
    },

    /// A single solve attempt reached a cell with no compatible tiles
    NoSolution {
        /// Cell coordinates (col, row) of the dead cell
        cell: (usize, usize),
        /// Number of cells assigned before the failure
        placed: usize,
    },

    /// The driver used up its attempt budget without a solution
    AttemptsExhausted {
        /// Number of attempts made
        attempts: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tileset data doesn't meet loader requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Failed to load a tile image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the rendered board to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "Tile catalog is empty"),
            Self::MalformedTile { id, reason } => {
                write!(f, "Malformed tile '{id}': {reason}")
            }
            Self::DuplicateTile { id } => {
                write!(f, "Tile '{id}' is already present in the catalog")
            }
            Self::NoSolution { cell, placed } => {
                write!(
                    f,
                    "No compatible tile for cell ({}, {}) after {placed} placements",
                    cell.0, cell.1
                )
            }
            Self::AttemptsExhausted { attempts } => {
                write!(f, "No solution found in {attempts} attempts")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed tile error
pub fn malformed_tile(id: &str, reason: &impl ToString) -> TilingError {
    TilingError::MalformedTile {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}
