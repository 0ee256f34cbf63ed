mod cell;
pub mod communication;
mod controller;
mod engine;
mod frame;
mod grid;
mod history;
mod palette;
pub mod pattern;
pub mod persistence;
mod session;

pub use cell::Cell;
pub use communication::{CommandReceiver, CommandSender, command_channel};
pub use controller::{Renderer, start_engine};
pub use engine::{Engine, OscillationPolicy, TickEvent};
pub use frame::Frame;
pub use grid::Grid;
pub use history::{History, LOOKBACK};
pub use palette::{Colour, ColourPair, PALETTE};
pub use pattern::{Pattern, Preset};
pub use session::{DEFAULT_INTERVAL, Session};
