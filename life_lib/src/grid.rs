use bitvec::boxed::BitBox;

use crate::Cell;

/// A fixed-size toroidal board of cells.
///
/// Coordinates wrap at the edges, so every cell has exactly 8 neighbours.
/// Cells are stored row-major: the bit for `(x, y)` lives at `y * width + x`.
/// Dimensions are fixed for the lifetime of the grid.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
pub struct Grid {
    width: u32,
    height: u32,
    cells: BitBox,
}

impl Grid {
    /// Creates a grid with every cell dead.
    ///
    /// # Panics
    /// If either dimension is zero. A zero-sized torus has no neighbour
    /// arithmetic; every loader rejects such dimensions before getting here.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be nonzero");
        Self {
            width,
            height,
            cells: bitvec::bitbox![0; width as usize * height as usize],
        }
    }

    /// The number of cells in the x axis.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The number of cells in the y axis.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    /// Gets the cell at the given position.
    pub fn get(&self, x: u32, y: u32) -> Cell {
        self.cells[self.index(x, y)].into()
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        let index = self.index(x, y);
        self.cells.set(index, cell.into());
    }

    /// The number of live cells on the whole board.
    pub fn alive_count(&self) -> u32 {
        self.cells.count_ones() as u32
    }

    /// Whether no cell on the board is alive.
    pub fn is_extinct(&self) -> bool {
        self.cells.not_any()
    }

    /// Counts the live cells in the 8 positions surrounding `(x, y)`,
    /// wrapping over the edges of the board.
    ///
    /// The offsets `width - 1` & `height - 1` are `-1` modulo the board size,
    /// so the wraparound needs no signed arithmetic.
    pub fn live_neighbours(&self, x: u32, y: u32) -> u8 {
        let mut count = 0;
        for dy in [self.height - 1, 0, 1] {
            for dx in [self.width - 1, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let neighbour_x = (x + dx) % self.width;
                let neighbour_y = (y + dy) % self.height;
                if self.get(neighbour_x, neighbour_y).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }
}
