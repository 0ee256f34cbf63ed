//! Built-in starting layouts & the generators that produce them.
//!
//! Presets are plain data tables (dimensions plus a row bitmap where `'X'`
//! marks a live cell); the loader logic never constructs them procedurally.

use rand::Rng;

use crate::{Cell, Grid};

/// Probability for an interior cell of a random layout to start alive.
/// 2 in 7 ≈ 30%.
const RANDOM_DENSITY: f64 = 2.0 / 7.0;

/// A named built-in starting layout.
#[derive(Clone, Copy, PartialEq, Eq, Debug, derive_more::Display)]
pub enum Preset {
    #[display("Glider gun")]
    GliderGun,
    #[display("Spaceship")]
    Spaceship,
    #[display("Oscillator")]
    Oscillator,
    #[display("Six bits")]
    SixBits,
}

impl Preset {
    /// Every preset, in menu order.
    pub const ALL: [Preset; 4] = [
        Preset::GliderGun,
        Preset::Spaceship,
        Preset::Oscillator,
        Preset::SixBits,
    ];

    fn table(self) -> &'static PresetTable {
        match self {
            Preset::GliderGun => &GLIDER_GUN,
            Preset::Spaceship => &SPACESHIP,
            Preset::Oscillator => &OSCILLATOR,
            Preset::SixBits => &SIX_BITS,
        }
    }

    /// Builds this preset's fixed-size layout.
    pub fn layout(self) -> Grid {
        let table = self.table();
        let mut grid = Grid::new(table.width, table.height);
        for (y, row) in table.rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                if symbol == 'X' {
                    grid.set(x as u32, y as u32, Cell::Alive);
                }
            }
        }
        grid
    }
}

/// Generates a `width` x `height` layout with every interior cell
/// independently alive with [`RANDOM_DENSITY`] probability. The border cells
/// stay dead.
pub fn random_layout<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Grid {
    let mut grid = Grid::new(width, height);
    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            if rng.gen_bool(RANDOM_DENSITY) {
                grid.set(x, y, Cell::Alive);
            }
        }
    }
    grid
}

/// A starting layout together with its user-facing name.
///
/// Restarting a session replays the stored layout unchanged, so a random
/// pattern restarts with the same cells it first came up with.
pub struct Pattern {
    name: Box<str>,
    layout: Grid,
}

impl Pattern {
    /// A pattern backed by a built-in preset.
    pub fn preset(preset: Preset) -> Self {
        Self {
            name: preset.to_string().into(),
            layout: preset.layout(),
        }
    }

    /// A freshly generated random pattern.
    pub fn random<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Self {
        Self {
            name: "Random".into(),
            layout: random_layout(width, height, rng),
        }
    }

    /// A pattern from an externally produced layout, e.g. a coordinate file.
    pub fn custom(name: impl Into<Box<str>>, layout: Grid) -> Self {
        Self {
            name: name.into(),
            layout,
        }
    }

    /// The user-facing name of this pattern.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The starting layout this pattern (re)loads.
    pub fn layout(&self) -> &Grid {
        &self.layout
    }
}

/// Dimensions & row bitmap for one preset; `'X'` marks a live cell.
struct PresetTable {
    width: u32,
    height: u32,
    rows: &'static [&'static str],
}

const GLIDER_GUN: PresetTable = PresetTable {
    width: 50,
    height: 26,
    rows: &[
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "------------------------------X-------------------",
        "----------------------------X-X-------------------",
        "------------------XX------XX------------XX--------",
        "-----------------X---X----XX------------XX--------",
        "------XX--------X-----X---XX----------------------",
        "------XX--------X---X-XX----X-X-------------------",
        "----------------X-----X-------X-------------------",
        "-----------------X---X----------------------------",
        "------------------XX------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
    ],
};

const SPACESHIP: PresetTable = PresetTable {
    width: 50,
    height: 21,
    rows: &[
        "--------------------------------------------------",
        "--------------------------------------X-----------",
        "---------------------X---------------X-X----------",
        "-----------X-X------X-----XX--------X-------------",
        "-----------X----X----X-XXXXXX----XX---------------",
        "-----------X-XXXXXXXX----------X--X-XXX-----------",
        "--------------X-----X-------XXXX----XXX-----------",
        "---------XX-----------------XXX-X-----------------",
        "------X--XX-------XX--------XX--------------------",
        "------X--X----------------------------------------",
        "-----X--------------------------------------------",
        "------X--X----------------------------------------",
        "------X--XX-------XX--------XX--------------------",
        "---------XX-----------------XXX-X-----------------",
        "--------------X-----X-------XXXX----XXX-----------",
        "-----------X-XXXXXXXX----------X--X-XXX-----------",
        "-----------X----X----X-XXXXXX----XX---------------",
        "-----------X-X------X-----XX--------X-------------",
        "---------------------X---------------X-X----------",
        "--------------------------------------X-----------",
        "--------------------------------------------------",
    ],
};

const OSCILLATOR: PresetTable = PresetTable {
    width: 39,
    height: 39,
    rows: &[
        "---------------------------------------",
        "------------XX-----------XX------------",
        "------------XX-----------XX------------",
        "---------------------------------------",
        "---------------------------------------",
        "-------X-----------------------X-------",
        "------X-X-----X---------X-----X-X------",
        "-----X--X-----X-XX---XX-X-----X--X-----",
        "------XX----------X-X----------XX------",
        "----------------X-X-X-X----------------",
        "-----------------X---X-----------------",
        "---------------------------------------",
        "-XX---------------------------------XX-",
        "-XX---------------------------------XX-",
        "------XX-----------------------XX------",
        "---------------------------------------",
        "-------X-X-------------------X-X-------",
        "-------X--X-----------------X--X-------",
        "--------XX-------------------XX--------",
        "---------------------------------------",
        "--------XX-------------------XX--------",
        "-------X--X-----------------X--X-------",
        "-------X-X-------------------X-X-------",
        "---------------------------------------",
        "------XX-----------------------XX------",
        "-XX---------------------------------XX-",
        "-XX---------------------------------XX-",
        "---------------------------------------",
        "-----------------X---X-----------------",
        "----------------X-X-X-X----------------",
        "------XX----------X-X----------XX------",
        "-----X--X-----X-XX---XX-X-----X--X-----",
        "------X-X-----X---------X-----X-X------",
        "-------X-----------------------X-------",
        "---------------------------------------",
        "---------------------------------------",
        "------------XX-----------XX------------",
        "------------XX-----------XX------------",
        "---------------------------------------",
    ],
};

const SIX_BITS: PresetTable = PresetTable {
    width: 50,
    height: 28,
    rows: &[
        "--------------------------------------------------",
        "--------------------------------------------------",
        "-------------------------X------------------------",
        "-------------------------X------------------------",
        "------------------------X-X-----------------------",
        "-------------------------X------------------------",
        "-------------------------X------------------------",
        "-------------------------X------------------------",
        "-------------------------X------------------------",
        "------------------------X-X-----------------------",
        "-------------------------X------------------------",
        "-------------------------X------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "------X--X----X--X--------------------------------",
        "----XXX--XXXXXX--XXX------------------------------",
        "------X--X----X--X--------------------------------",
        "--------------------------XX----------------------",
        "-------------------------XX-----------------------",
        "---------------------------X----------------------",
        "------------------------------------X----X--------",
        "----------------------------------XX-XXXX-XX------",
        "------------------------------------X----X--------",
        "--------------------------------------------------",
        "--------------------------------------------------",
        "--------------------------------------------------",
    ],
};
