//! Spatial data structures and tile geometry
//!
//! This module contains spatial-related functionality including:
//! - Tiles, edge descriptors and the tile catalog
//! - Edge derivation from tile pixels
//! - Rotated tile variants
//! - Board storage and cell neighbourhoods

/// Edge derivation from tile pixels
pub mod adjacency;
/// Board storage and cell neighbourhoods
pub mod board;
/// Rotated tile variants
pub mod rotation;
/// Tiles, edges and the tile catalog
pub mod tiles;

pub use board::{Board, Cell};
pub use tiles::{Catalog, Direction, Edge, Tile};
