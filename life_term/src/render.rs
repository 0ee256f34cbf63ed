//! Draws frames to the terminal with ANSI colours through crossterm.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use life_lib::{Cell, Colour, Frame, Renderer, TickEvent};

/// The glyph a single cell occupies on screen.
const CELL_SYMBOL: &str = "██";

/// Renders frames to stdout.
///
/// Every frame is assembled into an off-screen buffer first & written with a
/// single flush, so a slow terminal never shows a half-drawn world.
pub struct AnsiRenderer {
    out: Stdout,
    buffer: Vec<u8>,
    /// The interval shown on the status line, remembered from the last frame.
    interval: Duration,
}

impl AnsiRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            buffer: Vec::new(),
            interval: Duration::ZERO,
        }
    }
}

fn terminal_colour(colour: Colour) -> Color {
    match colour {
        Colour::Default => Color::Reset,
        Colour::Red => Color::Red,
        Colour::Green => Color::Green,
        Colour::Yellow => Color::Yellow,
        Colour::Blue => Color::Blue,
        Colour::Magenta => Color::Magenta,
        Colour::Cyan => Color::Cyan,
        Colour::White => Color::White,
    }
}

impl Renderer for AnsiRenderer {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        self.interval = frame.interval();
        self.buffer.clear();
        queue!(self.buffer, Clear(ClearType::All), MoveTo(0, 0))?;

        let grid = frame.grid();
        let colours = frame.colours();
        // Equal-coloured runs of cells share one escape sequence.
        let mut active = None;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let colour = match grid.get(x, y) {
                    Cell::Alive => colours.alive(),
                    Cell::Dead => colours.dead(),
                };
                if active != Some(colour) {
                    queue!(self.buffer, SetForegroundColor(terminal_colour(colour)))?;
                    active = Some(colour);
                }
                queue!(self.buffer, Print(CELL_SYMBOL))?;
            }
            queue!(self.buffer, Print("\n"))?;
        }
        queue!(self.buffer, ResetColor)?;

        self.out.write_all(&self.buffer)?;
        self.out.flush()
    }

    fn report(&mut self, event: &TickEvent) -> io::Result<()> {
        match event {
            TickEvent::Continuing {
                generation,
                alive_cells,
            } => write!(
                self.out,
                "Generation: {generation:>3} Cells: {alive_cells:>3} {:>4} ms\n: ",
                self.interval.as_millis()
            )?,
            TickEvent::Extinct => {
                write!(self.out, "All cells are dead. 'X' quit, 'R' restart\n: ")?
            }
            TickEvent::Stagnant => write!(
                self.out,
                "The world has stagnated. 'X' quit, 'R' restart\n: "
            )?,
            TickEvent::Oscillating { period } => write!(
                self.out,
                "The species will live forever (period {period})! 'X' quit, 'R' restart\n: "
            )?,
        }
        self.out.flush()
    }
}
