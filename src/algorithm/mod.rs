/// Bitset of catalog indices for compatibility tracking
pub mod bitset;
/// Memoized edge compatibility sets
pub mod cache;
/// Minimum-entropy collapse engine
pub mod collapse;
/// Bounded retry loop over solve attempts
pub mod driver;
/// Seeded selection of cells and tiles
pub mod selection;
