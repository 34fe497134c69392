/// Command-line interface and run orchestration
pub mod cli;
/// Generation defaults and tileset file conventions
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Board rendering and PNG export
pub mod image;
/// Attempt progress display
pub mod progress;
/// Tileset directory and edge manifest loading
pub mod tileset;
