use std::time::Duration;

use crate::{ColourPair, Grid};

/// Everything a renderer needs for one tick: an ordered snapshot of the
/// world plus the session counters & colour selectors to display alongside
/// it.
///
/// A frame is assembled by the simulation actor before any terminal I/O
/// begins & is immutable from then on.
#[derive(Clone)]
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
pub struct Frame {
    grid: Grid,
    generation: u64,
    alive_cells: u32,
    colours: ColourPair,
    interval: Duration,
}

impl Frame {
    pub(crate) fn new(
        grid: Grid,
        generation: u64,
        alive_cells: u32,
        colours: ColourPair,
        interval: Duration,
    ) -> Self {
        Self {
            grid,
            generation,
            alive_cells,
            colours,
            interval,
        }
    }

    /// The snapshot to draw.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The generation counter of the snapshot.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The live population of the snapshot.
    pub fn alive_cells(&self) -> u32 {
        self.alive_cells
    }

    /// The colour selectors to draw alive & dead cells with.
    pub fn colours(&self) -> ColourPair {
        self.colours
    }

    /// The tick interval in force when the frame was assembled.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
