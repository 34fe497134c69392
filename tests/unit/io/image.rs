//! Tests for board rendering and PNG export

#[cfg(test)]
mod tests {
    use edgetile::TilingError;
    use edgetile::io::image::{export_board_as_png, render_board};
    use edgetile::spatial::board::{Board, Cell};
    use edgetile::spatial::tiles::{Catalog, Edge, Tile};
    use image::Rgba;
    use ndarray::Array2;
    use tempfile::TempDir;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn two_colour_catalog() -> Catalog {
        let edges = || ["a", "a", "a", "a"].map(Edge::from);
        Catalog::from_tiles([
            Tile::new("red", edges(), Array2::from_elem((2, 2), RED)).expect("tile"),
            Tile::new("blue", edges(), Array2::from_elem((2, 2), BLUE)).expect("tile"),
        ])
        .expect("catalog")
    }

    fn striped_board() -> Board {
        let mut board = Board::new(2, 1);
        board.assign(Cell::new(0, 0), 0);
        board.assign(Cell::new(1, 0), 1);
        board
    }

    // Tests tiles land at their cell positions at native size
    // Verified by swapping row and column offsets
    #[test]
    fn test_render_native_size() {
        let image = render_board(&striped_board(), &two_colour_catalog(), (4, 2)).expect("render");

        assert_eq!(image.dimensions(), (4, 2));
        assert_eq!(*image.get_pixel(0, 1), Rgba(RED));
        assert_eq!(*image.get_pixel(1, 0), Rgba(RED));
        assert_eq!(*image.get_pixel(2, 0), Rgba(BLUE));
        assert_eq!(*image.get_pixel(3, 1), Rgba(BLUE));
    }

    // Tests scaling keeps hard tile boundaries
    // Verified by resizing with a smoothing filter
    #[test]
    fn test_render_scales_with_nearest_neighbour() {
        let image =
            render_board(&striped_board(), &two_colour_catalog(), (40, 20)).expect("render");

        assert_eq!(image.dimensions(), (40, 20));
        assert_eq!(*image.get_pixel(19, 10), Rgba(RED));
        assert_eq!(*image.get_pixel(20, 10), Rgba(BLUE));
        assert!(image.pixels().all(|p| *p == Rgba(RED) || *p == Rgba(BLUE)));
    }

    // Tests rendering refuses incomplete boards and empty sizes
    // Verified by leaving unassigned cells transparent
    #[test]
    fn test_render_errors() {
        let catalog = two_colour_catalog();
        let mut partial = Board::new(2, 1);
        partial.assign(Cell::ORIGIN, 0);

        assert!(matches!(
            render_board(&partial, &catalog, (4, 2)),
            Err(TilingError::InvalidSourceData { .. })
        ));
        assert!(matches!(
            render_board(&striped_board(), &catalog, (0, 2)),
            Err(TilingError::InvalidParameter { parameter: "pixel_size", .. })
        ));
        assert!(matches!(
            render_board(&striped_board(), &Catalog::new(), (4, 2)),
            Err(TilingError::EmptyCatalog)
        ));
    }

    // Tests export creates missing directories and a decodable PNG
    // Verified by writing without creating the parent directory
    #[test]
    fn test_export_board_as_png() {
        let dir = TempDir::new().expect("temp dir");
        let output = dir.path().join("nested").join("board.png");

        export_board_as_png(&striped_board(), &two_colour_catalog(), (8, 4), &output)
            .expect("export");

        let written = image::open(&output).expect("readable png").to_rgba8();
        assert_eq!(written.dimensions(), (8, 4));
        assert_eq!(*written.get_pixel(0, 0), Rgba(RED));
        assert_eq!(*written.get_pixel(7, 3), Rgba(BLUE));
    }
}
