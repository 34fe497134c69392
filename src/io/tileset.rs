//! Tileset loading from a directory of PNG tiles
//!
//! Every `*.png` file in the directory becomes one tile named after the file.
//! Edges come from an optional `edges.txt` manifest with one line per tile:
//!
//! ```text
//! # name   top  right bottom left  [symmetric]
//! 0.png    AAA  AAA   AAA    AAA   symmetric
//! 4.png    ABB  BCB   BBA    AAA
//! ```
//!
//! Edges are read clockwise. A manifest must list every tile; with derivation
//! requested, or without a manifest, all edges are computed from pixels and
//! the manifest only contributes its `symmetric` markers.

use crate::io::configuration::{EDGE_MANIFEST, SYMMETRIC_MARKER};
use crate::io::error::{Result, TilingError, malformed_tile};
use crate::spatial::adjacency::derive_edges;
use crate::spatial::tiles::{Catalog, Edge, Payload, Tile};
use ndarray::Array2;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Manifest entry for one tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Edges as `[top, right, bottom, left]`
    pub edges: [Edge; 4],
    /// Whether the tile is rotation invariant
    pub symmetric: bool,
}

/// Loaded tiles plus the identifiers exempt from rotation
#[derive(Clone, Debug)]
pub struct Tileset {
    /// Base tiles in file name order
    pub catalog: Catalog,
    /// Tiles marked symmetric in the manifest
    pub exempt: HashSet<String>,
}

/// Parse edge manifest text
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `InvalidSourceData` for a line with fewer than five fields, an
/// unknown trailing marker, or a repeated tile name.
pub fn parse_manifest(text: &str) -> Result<HashMap<String, ManifestEntry>> {
    let mut entries = HashMap::new();

    for (line_number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let (name, top, right, bottom, left, marker) = match fields.as_slice() {
            [name, top, right, bottom, left] => (name, top, right, bottom, left, None),
            [name, top, right, bottom, left, marker] => {
                (name, top, right, bottom, left, Some(*marker))
            }
            _ => {
                return Err(TilingError::InvalidSourceData {
                    reason: format!(
                        "manifest line {}: expected \
                         'name top right bottom left [{SYMMETRIC_MARKER}]'",
                        line_number + 1
                    ),
                });
            }
        };

        let symmetric = match marker {
            None => false,
            Some(SYMMETRIC_MARKER) => true,
            Some(other) => {
                return Err(TilingError::InvalidSourceData {
                    reason: format!("manifest line {}: unknown marker '{other}'", line_number + 1),
                });
            }
        };

        let entry = ManifestEntry {
            edges: [*top, *right, *bottom, *left].map(Edge::from_symbols),
            symmetric,
        };

        if entries.insert((*name).to_string(), entry).is_some() {
            return Err(TilingError::InvalidSourceData {
                reason: format!("manifest line {}: tile '{name}' listed twice", line_number + 1),
            });
        }
    }

    Ok(entries)
}

/// Decode a PNG tile into an RGBA payload
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be decoded and `MalformedTile` if
/// it is not square.
pub fn load_payload(path: &Path) -> Result<Payload> {
    let image = image::open(path)
        .map_err(|source| TilingError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = image.dimensions();
    if width != height {
        return Err(malformed_tile(
            &tile_name(path),
            &format!("image is {width}x{height}, tiles must be square"),
        ));
    }

    Ok(Array2::from_shape_fn(
        (height as usize, width as usize),
        |(row, col)| image.get_pixel(col as u32, row as u32).0,
    ))
}

/// Load every PNG tile in a directory
///
/// With `derive` set, edges are computed from pixels even when a manifest is
/// present; its `symmetric` markers still apply.
///
/// # Errors
///
/// Returns `FileSystem` if the directory or manifest cannot be read,
/// `InvalidSourceData` for an empty directory, a bad manifest or one that
/// leaves tiles unlisted, and any tile or catalog error raised while building
/// tiles.
pub fn load_tileset(dir: &Path, derive: bool) -> Result<Tileset> {
    let manifest_path = dir.join(EDGE_MANIFEST);
    let manifest = if manifest_path.is_file() {
        let text =
            std::fs::read_to_string(&manifest_path).map_err(|source| TilingError::FileSystem {
                path: manifest_path.clone(),
                operation: "read manifest",
                source,
            })?;
        Some(parse_manifest(&text)?)
    } else {
        None
    };

    let paths = collect_tile_paths(dir)?;
    if paths.is_empty() {
        return Err(TilingError::InvalidSourceData {
            reason: format!("no PNG tiles found in '{}'", dir.display()),
        });
    }

    let names: Vec<String> = paths.iter().map(|path| tile_name(path)).collect();
    let exempt: HashSet<String> = manifest
        .iter()
        .flatten()
        .filter(|(name, entry)| entry.symmetric && names.contains(*name))
        .map(|(name, _)| name.clone())
        .collect();

    // Manifest symbols and pixel symbols never compare equal, so edges come
    // from one source only
    let listed = match manifest {
        Some(entries) if !derive => {
            let unlisted: Vec<&str> = names
                .iter()
                .filter(|name| !entries.contains_key(*name))
                .map(String::as_str)
                .collect();
            if !unlisted.is_empty() {
                return Err(TilingError::InvalidSourceData {
                    reason: format!(
                        "{EDGE_MANIFEST} does not list {}; list every tile or derive edges",
                        unlisted.join(", ")
                    ),
                });
            }
            Some(entries)
        }
        _ => None,
    };

    let mut catalog = Catalog::new();
    for (path, name) in paths.iter().zip(names) {
        let payload = load_payload(path)?;
        let edges = match listed.as_ref().and_then(|entries| entries.get(&name)) {
            Some(entry) => entry.edges.clone(),
            None => derive_edges(&payload),
        };
        catalog.insert(Tile::new(name, edges, payload)?)?;
    }

    Ok(Tileset { catalog, exempt })
}

fn collect_tile_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| TilingError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read tileset directory",
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("png") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn tile_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
