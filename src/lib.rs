//! Edge-matched tile grid generation using greedy wave function collapse
//!
//! Tiles carry four edge descriptors; a board is filled one cell at a time,
//! always at the most constrained frontier cell, so that every pair of
//! neighbouring tiles meets edge to edge. Attempts that paint themselves into
//! a corner are discarded and retried from an empty board.

#![forbid(unsafe_code)]

/// Collapse engine, compatibility sets and the retry driver
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tiles, catalogs, boards and tile geometry
pub mod spatial;

pub use io::error::{Result, TilingError};
