//! Tile definitions, edge descriptors and the tile catalog
//!
//! Edges are read clockwise around the tile, so two tiles fit along a shared
//! side when one edge equals the other read backwards. Payloads are square
//! RGBA blocks that the solver never looks at.

use crate::io::error::{Result, TilingError, malformed_tile};
use ndarray::Array2;
use std::collections::HashMap;

/// RGBA pixel
pub type Pixel = [u8; 4];

/// Square pixel block carried by a tile (indexed `[row, col]`)
pub type Payload = Array2<Pixel>;

/// Side of a tile or direction towards a neighbouring cell
///
/// Variants are declared clockwise starting from the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards the previous row
    Up,
    /// Towards the next column
    Right,
    /// Towards the next row
    Down,
    /// Towards the previous column
    Left,
}

impl Direction {
    /// All directions in clockwise order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Column and row deltas of a single step in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

/// Boundary pattern along one side of a tile
///
/// A sequence of symbols read clockwise. Manifest edges use one symbol per
/// character; derived edges pack each boundary pixel into one symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Edge(Vec<u32>);

impl Edge {
    /// Build an edge from a symbol string such as `"ABB"`
    pub fn from_symbols(symbols: &str) -> Self {
        Self(symbols.chars().map(u32::from).collect())
    }

    /// Build an edge from boundary pixels in reading order
    pub fn from_pixels<'a>(pixels: impl IntoIterator<Item = &'a Pixel>) -> Self {
        Self(pixels.into_iter().map(|&p| u32::from_be_bytes(p)).collect())
    }

    /// The same edge read in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Check whether this edge can sit against `facing` on a shared side
    ///
    /// Equivalent to `*self == facing.reversed()` without allocating.
    pub fn fits(&self, facing: &Self) -> bool {
        self.0.len() == facing.0.len() && self.0.iter().eq(facing.0.iter().rev())
    }

    /// Raw symbols in reading order
    pub fn symbols(&self) -> &[u32] {
        &self.0
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Test for an edge without symbols
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Edge {
    fn from(symbols: &str) -> Self {
        Self::from_symbols(symbols)
    }
}

/// A tile: identifier, four clockwise edges and a square payload
#[derive(Clone, Debug)]
pub struct Tile {
    id: String,
    edges: [Edge; 4],
    payload: Payload,
}

impl Tile {
    /// Create a tile, validating its edges and payload
    ///
    /// `edges` are given as `[top, right, bottom, left]`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the payload is empty or not square, or if
    /// any edge has no symbols.
    pub fn new(id: impl Into<String>, edges: [Edge; 4], payload: Payload) -> Result<Self> {
        let id = id.into();
        let (rows, cols) = payload.dim();

        if rows == 0 || cols == 0 {
            return Err(malformed_tile(&id, &"payload is empty"));
        }
        if rows != cols {
            return Err(malformed_tile(
                &id,
                &format!("payload is {cols}x{rows}, tiles must be square"),
            ));
        }
        if let Some(direction) = Direction::ALL
            .into_iter()
            .zip(edges.iter())
            .find_map(|(direction, edge)| edge.is_empty().then_some(direction))
        {
            return Err(malformed_tile(
                &id,
                &format!("missing {direction:?} edge descriptor"),
            ));
        }

        Ok(Self::from_parts(id, edges, payload))
    }

    // Callers guarantee a square payload and non-empty edges
    pub(crate) const fn from_parts(id: String, edges: [Edge; 4], payload: Payload) -> Self {
        Self { id, edges, payload }
    }

    /// Tile identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Edge on the given side
    pub const fn edge(&self, side: Direction) -> &Edge {
        let [top, right, bottom, left] = &self.edges;
        match side {
            Direction::Up => top,
            Direction::Right => right,
            Direction::Down => bottom,
            Direction::Left => left,
        }
    }

    /// All four edges as `[top, right, bottom, left]`
    pub const fn edges(&self) -> &[Edge; 4] {
        &self.edges
    }

    /// Pixel payload
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Side length of the payload in pixels
    pub fn size(&self) -> usize {
        self.payload.nrows()
    }

    /// Check whether `neighbour` may sit on the `side` of this tile
    pub fn accepts(&self, side: Direction, neighbour: &Self) -> bool {
        self.edge(side).fits(neighbour.edge(side.opposite()))
    }
}

/// Ordered, immutable-after-build collection of tiles
///
/// Tiles are addressed by their insertion index during solving and by
/// identifier everywhere else.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    tiles: Vec<Tile>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from tiles in order
    ///
    /// # Errors
    ///
    /// Propagates any `insert` failure.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Result<Self> {
        let mut catalog = Self::new();
        for tile in tiles {
            catalog.insert(tile)?;
        }
        Ok(catalog)
    }

    /// Append a tile and return its index
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTile` if the identifier is taken and `MalformedTile`
    /// if the payload size differs from the tiles already present.
    pub fn insert(&mut self, tile: Tile) -> Result<usize> {
        if self.index.contains_key(tile.id()) {
            return Err(TilingError::DuplicateTile {
                id: tile.id().to_string(),
            });
        }
        if let Some(size) = self.tile_size() {
            if tile.size() != size {
                return Err(malformed_tile(
                    tile.id(),
                    &format!("payload is {0}x{0}, catalog tiles are {size}x{size}", tile.size()),
                ));
            }
        }

        let position = self.tiles.len();
        self.index.insert(tile.id().to_string(), position);
        self.tiles.push(tile);
        Ok(position)
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test for a catalog without tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at an index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Tile with an identifier
    pub fn get_by_id(&self, id: &str) -> Option<&Tile> {
        self.index_of(id).and_then(|index| self.tiles.get(index))
    }

    /// Index of the tile with an identifier
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Iterate over tiles in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Shared payload side length, if any tile is present
    pub fn tile_size(&self) -> Option<usize> {
        self.tiles.first().map(Tile::size)
    }

    // Rebuild with new tiles under the same identifiers and order
    pub(crate) fn map_tiles(&self, f: impl FnMut(&Tile) -> Tile) -> Self {
        Self {
            tiles: self.tiles.iter().map(f).collect(),
            index: self.index.clone(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
