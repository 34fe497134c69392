//! Board rendering and PNG export

use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::board::Board;
use crate::spatial::tiles::Catalog;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Compose a solved board into an image of `pixel_size` (width, height)
///
/// Tiles are laid out at their native size and the result is scaled with
/// nearest-neighbour sampling, which keeps tile pixels crisp.
///
/// # Errors
///
/// Returns an error if:
/// - Either output dimension is zero
/// - A cell is unassigned or refers to a tile missing from the catalog
pub fn render_board(board: &Board, catalog: &Catalog, pixel_size: (u32, u32)) -> Result<RgbaImage> {
    let (out_width, out_height) = pixel_size;
    if out_width == 0 || out_height == 0 {
        return Err(invalid_parameter(
            "pixel_size",
            &format!("{out_width}x{out_height}"),
            &"dimensions must be positive",
        ));
    }

    let tile_size = catalog.tile_size().ok_or(TilingError::EmptyCatalog)?;
    let width = (board.width() * tile_size) as u32;
    let height = (board.height() * tile_size) as u32;
    let mut composed = RgbaImage::new(width, height);

    for cell in board.cells() {
        let tile = board
            .get(cell)
            .and_then(|index| catalog.get(index))
            .ok_or_else(|| TilingError::InvalidSourceData {
                reason: format!("cell ({}, {}) has no tile to render", cell.col, cell.row),
            })?;

        let origin_x = cell.col * tile_size;
        let origin_y = cell.row * tile_size;
        for ((row, col), pixel) in tile.payload().indexed_iter() {
            composed.put_pixel(
                (origin_x + col) as u32,
                (origin_y + row) as u32,
                Rgba(*pixel),
            );
        }
    }

    if (width, height) == pixel_size {
        return Ok(composed);
    }
    Ok(imageops::resize(
        &composed,
        out_width,
        out_height,
        FilterType::Nearest,
    ))
}

/// Render a solved board and save it as PNG
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_board`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(
    board: &Board,
    catalog: &Catalog,
    pixel_size: (u32, u32),
    output_path: &Path,
) -> Result<()> {
    let image = render_board(board, catalog, pixel_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
