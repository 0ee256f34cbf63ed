use crate::Grid;

/// How many generations the engine can look back on.
pub const LOOKBACK: usize = 4;

/// A bounded buffer of the last [`LOOKBACK`] generations.
///
/// Slot 0 holds the oldest snapshot & slot 3 the newest. The update engine
/// compares slots to spot extinction, stagnation & short oscillations; any
/// cycle longer than the buffer is invisible to it.
///
/// No slot is ever partially written: [`History::shift`] & the engine's full
/// rewrite of the newest slot are the only mutations during a tick, so the
/// slot comparisons always see complete generations.
pub struct History {
    worlds: [Grid; LOOKBACK],
}

impl History {
    /// Creates a history primed with the given starting layout.
    /// See [`History::replace_all`] for the slot contents.
    pub fn new(layout: Grid) -> Self {
        let empty = Grid::new(layout.width(), layout.height());
        Self {
            worlds: [empty.clone(), empty.clone(), empty, layout],
        }
    }

    /// Resets every slot for a fresh session: the three older slots are
    /// cleared to all-dead boards & the newest slot becomes the given layout,
    /// so the first tick sees the layout as the current generation & the
    /// lookback holds no stale state from before the (re)start.
    pub fn replace_all(&mut self, layout: &Grid) {
        let empty = Grid::new(layout.width(), layout.height());
        self.worlds[0] = empty.clone();
        self.worlds[1] = empty.clone();
        self.worlds[2] = empty;
        self.worlds[LOOKBACK - 1] = layout.clone();
    }

    /// Drops the oldest snapshot, moves every remaining snapshot down one
    /// slot & duplicates the previous newest into the vacated newest slot,
    /// giving the update engine a starting point to overwrite.
    pub fn shift(&mut self) {
        self.worlds.rotate_left(1);
        self.worlds[LOOKBACK - 1] = self.worlds[LOOKBACK - 2].clone();
    }

    /// Read-only access to history slot `k` (0 = oldest, 3 = newest).
    ///
    /// # Panics
    /// If `k >= LOOKBACK`.
    pub fn snapshot(&self, k: usize) -> &Grid {
        &self.worlds[k]
    }

    /// The newest snapshot; the state a renderer shows.
    pub fn newest(&self) -> &Grid {
        &self.worlds[LOOKBACK - 1]
    }

    pub(crate) fn set_newest(&mut self, grid: Grid) {
        self.worlds[LOOKBACK - 1] = grid;
    }
}
