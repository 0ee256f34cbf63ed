//! The output colour palette & the two-selector cycling used by the
//! interactive colour commands.

/// One entry of the output palette: the terminal default or one of the seven
/// ANSI foreground colours.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    derive_more::Display,
)]
pub enum Colour {
    #[display("default")]
    Default,
    #[display("red")]
    Red,
    #[display("green")]
    Green,
    #[display("yellow")]
    Yellow,
    #[display("blue")]
    Blue,
    #[display("magenta")]
    Magenta,
    #[display("cyan")]
    Cyan,
    #[display("white")]
    White,
}

/// The ordered palette the colour commands cycle through.
pub const PALETTE: [Colour; 8] = [
    Colour::Default,
    Colour::Red,
    Colour::Green,
    Colour::Yellow,
    Colour::Blue,
    Colour::Magenta,
    Colour::Cyan,
    Colour::White,
];

impl Colour {
    /// The next colour in the palette, wrapping at the end.
    pub fn successor(self) -> Colour {
        let at = PALETTE.iter().position(|&colour| colour == self).unwrap_or(0);
        PALETTE[(at + 1) % PALETTE.len()]
    }
}

/// The colours currently assigned to alive & dead cells.
///
/// The two selectors never alias: cycling one of them steps over the palette
/// entry the other holds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ColourPair {
    alive: Colour,
    dead: Colour,
}

impl Default for ColourPair {
    fn default() -> Self {
        Self {
            alive: Colour::Cyan,
            dead: Colour::Default,
        }
    }
}

impl ColourPair {
    /// Creates a pair, nudging the dead colour one palette step forward if
    /// the two selectors would otherwise alias.
    pub fn new(alive: Colour, dead: Colour) -> Self {
        let dead = if dead == alive { dead.successor() } else { dead };
        Self { alive, dead }
    }

    /// The colour for alive cells.
    pub fn alive(&self) -> Colour {
        self.alive
    }

    /// The colour for dead cells.
    pub fn dead(&self) -> Colour {
        self.dead
    }

    /// Advances the alive-cell colour to the next palette entry, skipping
    /// over the dead-cell colour.
    pub fn cycle_alive(&mut self) {
        self.alive = self.alive.successor();
        if self.alive == self.dead {
            self.alive = self.alive.successor();
        }
    }

    /// Advances the dead-cell colour to the next palette entry, skipping
    /// over the alive-cell colour.
    pub fn cycle_dead(&mut self) {
        self.dead = self.dead.successor();
        if self.dead == self.alive {
            self.dead = self.dead.successor();
        }
    }
}
