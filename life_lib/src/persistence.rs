//! Reading & writing the coordinate-list layout format.
//!
//! The first two tokens of a stream are `rows cols`; every following
//! whitespace-separated pair is a `y x` live-cell coordinate, running to the
//! end of the stream. Writing & re-reading a layout reproduces an identical
//! live-cell set.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::{Cell, Grid};

/// The errors that can occur when parsing a layout from a byte stream.
///
/// Any of these aborts the load attempt; the caller's prior state stays
/// untouched.
#[derive(thiserror::Error, Debug)]
#[cfg_attr(test, derive(kinded::Kinded))]
pub enum ParseError {
    /// Unable to read from the source.
    #[error("unable to read layout: {0}")]
    Io(#[from] std::io::Error),
    /// A token was not an unsigned integer, or a coordinate was missing the
    /// second half of its pair.
    #[error("layout data is not a list of `y x` integer pairs: {0:?}")]
    Malformed(Box<str>),
    /// A coordinate pointed outside the declared grid.
    #[error("coordinate ({y}, {x}) lies outside the declared {rows}x{cols} grid")]
    OutOfRange { y: u32, x: u32, rows: u32, cols: u32 },
    /// The declared dimensions describe a grid with no cells.
    #[error("grid dimensions must be nonzero, got {rows}x{cols}")]
    EmptyGrid { rows: u32, cols: u32 },
}

/// Parses a layout from a byte stream.
pub fn parse_layout(source: impl Read) -> Result<Grid, ParseError> {
    let mut text = String::new();
    BufReader::new(source).read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let rows = number(tokens.next(), "missing row count")?;
    let cols = number(tokens.next(), "missing column count")?;

    let mut coordinates = Vec::new();
    while let Some(token) = tokens.next() {
        let y = number(Some(token), "")?;
        let x = number(tokens.next(), "coordinate is missing its x half")?;
        coordinates.push((y, x));
    }
    layout_from_coordinates(rows, cols, coordinates)
}

/// Builds a `rows` x `cols` layout with one live cell per `(y, x)`
/// coordinate pair.
///
/// A coordinate outside the grid aborts the whole load; nothing the caller
/// holds has been touched at that point.
pub fn layout_from_coordinates(
    rows: u32,
    cols: u32,
    coordinates: impl IntoIterator<Item = (u32, u32)>,
) -> Result<Grid, ParseError> {
    if rows == 0 || cols == 0 {
        return Err(ParseError::EmptyGrid { rows, cols });
    }

    let mut grid = Grid::new(cols, rows);
    for (y, x) in coordinates {
        if y >= rows || x >= cols {
            return Err(ParseError::OutOfRange { y, x, rows, cols });
        }
        grid.set(x, y, Cell::Alive);
    }
    Ok(grid)
}

fn number(token: Option<&str>, missing: &str) -> Result<u32, ParseError> {
    let token = token.ok_or_else(|| ParseError::Malformed(missing.into()))?;
    token
        .parse::<u32>()
        .map_err(|_| ParseError::Malformed(token.into()))
}

/// Loads a layout from a file on disk.
pub fn load_layout(path: impl AsRef<Path>) -> Result<Grid, ParseError> {
    parse_layout(File::open(path)?)
}

/// Writes a layout in the same format [`parse_layout`] reads, one live-cell
/// coordinate pair per line.
pub fn write_layout(mut sink: impl Write, grid: &Grid) -> std::io::Result<()> {
    writeln!(sink, "{} {}", grid.height(), grid.width())?;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x, y).is_alive() {
                writeln!(sink, "{y} {x}")?;
            }
        }
    }
    Ok(())
}

/// Saves a layout to a file on disk.
pub fn save_layout(path: impl AsRef<Path>, grid: &Grid) -> std::io::Result<()> {
    let mut sink = BufWriter::new(File::create(path)?);
    write_layout(&mut sink, grid)?;
    sink.flush()
}

#[cfg(test)]
mod tests {
    use kinded::Kinded;

    use super::*;

    #[test]
    /// A well-formed stream produces exactly the listed live cells.
    fn parses_coordinate_list() {
        let grid = parse_layout("3 5\n0 0\n1 4 2 2".as_bytes()).expect("layout must parse");

        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.alive_count(), 3);
        assert_eq!(grid.get(0, 0), Cell::Alive);
        assert_eq!(grid.get(4, 1), Cell::Alive, "pairs are `y x`, not `x y`");
        assert_eq!(grid.get(2, 2), Cell::Alive);
    }

    #[test]
    /// A stream with dimensions only is an empty (but valid) layout.
    fn parses_bare_dimensions() {
        let grid = parse_layout("4 6".as_bytes()).expect("layout must parse");
        assert!(grid.is_extinct());
    }

    #[test]
    /// A coordinate outside the declared grid aborts the load.
    fn rejects_out_of_range_coordinate() {
        let error = parse_layout("3 5\n3 0".as_bytes()).expect_err("y == rows is out of range");
        assert_eq!(error.kind(), ParseErrorKind::OutOfRange);

        let error = parse_layout("3 5\n0 5".as_bytes()).expect_err("x == cols is out of range");
        assert_eq!(error.kind(), ParseErrorKind::OutOfRange);
    }

    #[test]
    /// Non-integer tokens & dangling half-pairs are malformed.
    fn rejects_malformed_streams() {
        for source in ["", "3", "3 x", "3 5\n1 one", "3 5\n1"] {
            let error =
                parse_layout(source.as_bytes()).expect_err("stream must be rejected");
            assert_eq!(
                error.kind(),
                ParseErrorKind::Malformed,
                "source {source:?} must parse as malformed"
            );
        }
    }

    #[test]
    /// Zero dimensions never produce a grid.
    fn rejects_empty_grid() {
        let error = parse_layout("0 5".as_bytes()).expect_err("zero rows must be rejected");
        assert_eq!(error.kind(), ParseErrorKind::EmptyGrid);
    }

    #[test]
    /// The coordinate builder is usable directly, without a byte stream.
    fn builds_layout_from_coordinates() {
        let grid = layout_from_coordinates(4, 4, [(0, 1), (3, 3)])
            .expect("in-range coordinates must build");
        assert_eq!(grid.alive_count(), 2);
        assert_eq!(grid.get(1, 0), Cell::Alive);

        let error = layout_from_coordinates(4, 4, [(4, 0)])
            .expect_err("y == rows must be rejected");
        assert_eq!(error.kind(), ParseErrorKind::OutOfRange);
    }

    #[test]
    /// Writing a layout & reloading it reproduces an identical live-cell set.
    fn round_trips_through_format() {
        let mut grid = Grid::new(9, 6);
        grid.set(0, 0, Cell::Alive);
        grid.set(8, 5, Cell::Alive);
        grid.set(3, 2, Cell::Alive);
        grid.set(4, 2, Cell::Alive);

        let mut written = Vec::new();
        write_layout(&mut written, &grid).expect("writing to a buffer cannot fail");

        let reloaded = parse_layout(written.as_slice()).expect("own output must parse");
        assert_eq!(
            reloaded, grid,
            "A written & reloaded layout must be identical"
        );
    }

    #[test]
    /// The disk round trip matches the in-memory one.
    fn round_trips_through_file() {
        let dir = tempfile::tempdir().expect("able to create a temp dir");
        let path = dir.path().join("layout.txt");

        let mut grid = Grid::new(4, 4);
        grid.set(1, 1, Cell::Alive);
        grid.set(2, 2, Cell::Alive);

        save_layout(&path, &grid).expect("layout must save");
        let reloaded = load_layout(&path).expect("saved layout must load");
        assert_eq!(reloaded, grid);
    }

    #[test]
    /// A missing file surfaces as an io error, not a panic.
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("able to create a temp dir");
        let error =
            load_layout(dir.path().join("absent.txt")).expect_err("file does not exist");
        assert_eq!(error.kind(), ParseErrorKind::Io);
    }
}
