//! Edge descriptors derived from tile pixels
//!
//! Each edge is read clockwise: top row left to right, right column top to
//! bottom, bottom row right to left and left column bottom to top. Two tiles
//! whose shared boundary pixels agree then satisfy the reversed-edge match
//! rule, and rotating a tile carries its edges along unchanged.

use crate::spatial::tiles::{Catalog, Edge, Payload, Tile};
use ndarray::Axis;

/// Compute `[top, right, bottom, left]` edges from a payload
///
/// An empty payload yields empty edges.
pub fn derive_edges(payload: &Payload) -> [Edge; 4] {
    let mut rows = payload.axis_iter(Axis(0));
    let mut cols = payload.axis_iter(Axis(1));

    let top = rows
        .next()
        .map(|row| Edge::from_pixels(row.iter()))
        .unwrap_or_default();
    let bottom = rows
        .next_back()
        .map_or_else(|| top.clone(), |row| Edge::from_pixels(row.iter()))
        .reversed();

    let left = cols
        .next()
        .map(|col| Edge::from_pixels(col.iter()))
        .unwrap_or_default();
    let right = cols
        .next_back()
        .map_or_else(|| left.clone(), |col| Edge::from_pixels(col.iter()));

    [top, right, bottom, left.reversed()]
}

impl Catalog {
    /// Replace every tile's edges with ones derived from its pixels
    #[must_use]
    pub fn with_derived_edges(&self) -> Self {
        self.map_tiles(|tile| {
            Tile::from_parts(
                tile.id().to_string(),
                derive_edges(tile.payload()),
                tile.payload().clone(),
            )
        })
    }
}
