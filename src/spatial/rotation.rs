//! Quarter-turn tile variants
//!
//! Extends a catalog with 90°, 180° and 270° clockwise rotations of every tile
//! that is not rotation invariant, so the solver can use each design in all
//! orientations.

use crate::io::configuration::ROTATION_SEPARATOR;
use crate::io::error::Result;
use crate::spatial::tiles::{Catalog, Payload, Tile};
use ndarray::Axis;
use std::collections::HashSet;

/// Distinct orientations of a square tile
const ORIENTATIONS: usize = 4;

/// Rotate a payload 90° clockwise
///
/// Transposes the block and reverses each resulting row.
pub fn rotate_payload(payload: &Payload) -> Payload {
    let mut rotated = payload.t().to_owned();
    rotated.invert_axis(Axis(1));
    rotated
}

/// Identifier of the `quarter_turns`-th rotation of a base tile
pub fn rotated_id(base: &str, quarter_turns: usize) -> String {
    format!("{base}{ROTATION_SEPARATOR}{quarter_turns}")
}

/// Rotate a tile clockwise by `quarter_turns` quarter turns
///
/// Computed from `quarter_turns mod 4`; a full turn returns an unchanged copy
/// under the original identifier. Each quarter turn moves every edge one
/// side clockwise, so the new top is the old left.
pub fn rotate(tile: &Tile, quarter_turns: usize) -> Tile {
    let turns = quarter_turns % ORIENTATIONS;
    if turns == 0 {
        return tile.clone();
    }

    let mut edges = tile.edges().clone();
    edges.rotate_right(turns);

    let mut payload = tile.payload().clone();
    for _ in 0..turns {
        payload = rotate_payload(&payload);
    }

    Tile::from_parts(rotated_id(tile.id(), turns), edges, payload)
}

/// Extend a catalog with rotated variants of its tiles
///
/// Base tiles keep their order and indices; for each tile not named in
/// `exempt`, rotations `1..=rotations` follow (capped at three, since the
/// fourth turn is the identity).
///
/// # Errors
///
/// Returns `DuplicateTile` if a generated identifier already names a tile.
pub fn expand_rotations(
    catalog: &Catalog,
    rotations: usize,
    exempt: &HashSet<String>,
) -> Result<Catalog> {
    let mut expanded = catalog.clone();
    let turns = rotations.min(ORIENTATIONS - 1);

    for tile in catalog {
        if exempt.contains(tile.id()) {
            continue;
        }
        for quarter_turns in 1..=turns {
            expanded.insert(rotate(tile, quarter_turns))?;
        }
    }

    Ok(expanded)
}
