use std::time::Duration;

use crate::{ColourPair, Pattern};

/// The default delay between ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Every piece of mutable session state the two actors steer between them:
/// counters, tick interval, hold & quit flags, the active pattern & the
/// colour selectors.
///
/// The simulation actor owns the value for the lifetime of the session; the
/// input actor influences it only through
/// [`Command`](crate::communication::Command) packets. Counters reset on
/// restart, everything else survives it.
pub struct Session {
    pattern: Pattern,
    generation: u64,
    alive_cells: u32,
    interval: Duration,
    hold: bool,
    quit: bool,
    colours: ColourPair,
}

impl Session {
    /// Opens a session on the given pattern with the given tuning.
    pub fn new(pattern: Pattern, interval: Duration, colours: ColourPair) -> Self {
        let alive_cells = pattern.layout().alive_count();
        Self {
            pattern,
            generation: 1,
            alive_cells,
            interval,
            hold: false,
            quit: false,
            colours,
        }
    }

    /// The pattern the session started from & will restart to.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The generation counter; starts at 1 & increments once per
    /// successfully continued tick.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The live population of the last continued tick.
    pub fn alive_cells(&self) -> u32 {
        self.alive_cells
    }

    /// The current delay between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The current alive/dead colour selectors.
    pub fn colours(&self) -> ColourPair {
        self.colours
    }

    /// Whether the simulation is paused awaiting user action.
    pub fn held(&self) -> bool {
        self.hold
    }

    /// Whether shutdown has been requested.
    pub fn quitting(&self) -> bool {
        self.quit
    }

    pub(crate) fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub(crate) fn hold(&mut self) {
        self.hold = true;
    }

    pub(crate) fn toggle_hold(&mut self) {
        self.hold = !self.hold;
    }

    pub(crate) fn clear_hold(&mut self) {
        self.hold = false;
    }

    pub(crate) fn request_quit(&mut self) {
        self.quit = true;
    }

    pub(crate) fn cycle_alive_colour(&mut self) {
        self.colours.cycle_alive();
    }

    pub(crate) fn cycle_dead_colour(&mut self) {
        self.colours.cycle_dead();
    }

    pub(crate) fn set_alive_cells(&mut self, alive_cells: u32) {
        self.alive_cells = alive_cells;
    }

    pub(crate) fn bump_generation(&mut self) {
        self.generation += 1;
    }

    /// Resets the counters for a restarted session: the generation is back
    /// to 1 & the population is the pattern's starting count.
    pub(crate) fn reset_counters(&mut self) {
        self.generation = 1;
        self.alive_cells = self.pattern.layout().alive_count();
    }
}
