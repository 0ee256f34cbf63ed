//! The command protocol between the input actor & the simulation actor.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

/// The commands the input actor sends to the simulation actor.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
pub enum Command {
    /// Replay the active pattern from its starting layout.
    Restart,
    /// Pause the simulation, or resume it when it is already held.
    ToggleHold,
    /// Advance the alive-cell colour to the next palette entry.
    CycleAliveColour,
    /// Advance the dead-cell colour to the next palette entry.
    CycleDeadColour,
    /// Replace the delay between ticks.
    SetInterval(Duration),
    /// Terminate the simulation actor.
    Quit,
}

/// The ways a line of user input can fail to parse.
///
/// The input loop's policy for every one of these is to drop the line & keep
/// the previous state. The variants exist so that policy is an explicit
/// decision rather than a silent catch-all.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The line held no characters at all.
    #[error("empty input line")]
    Empty,
    /// The leading character names no command.
    #[error("no command starts with {0:?}")]
    Unrecognised(char),
    /// A numeric line did not make a usable millisecond count.
    #[error("not a usable tick interval: {0:?}")]
    Interval(Box<str>),
}

impl Command {
    /// Parses one line of user input.
    ///
    /// The leading character selects the letter commands (case-insensitive;
    /// the rest of the line is ignored, as the original console UI did). A
    /// line of nothing but digits sets the tick interval in milliseconds;
    /// zero & anything that overflows are out of range.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let Some(first) = line.chars().next() else {
            return Err(CommandError::Empty);
        };

        match first.to_ascii_lowercase() {
            'r' => Ok(Command::Restart),
            'k' => Ok(Command::ToggleHold),
            'c' => Ok(Command::CycleAliveColour),
            'v' => Ok(Command::CycleDeadColour),
            'x' => Ok(Command::Quit),
            '0'..='9' => {
                if !line.bytes().all(|byte| byte.is_ascii_digit()) {
                    return Err(CommandError::Interval(line.into()));
                }
                match line.parse::<u64>() {
                    Ok(0) | Err(_) => Err(CommandError::Interval(line.into())),
                    Ok(millis) => Ok(Command::SetInterval(Duration::from_millis(millis))),
                }
            }
            _ => Err(CommandError::Unrecognised(first)),
        }
    }
}

/// The [`Receiver`] end the simulation actor drains commands from.
pub type CommandReceiver = Receiver<Command>;
/// The [`Sender`] end the input actor pushes commands into.
/// Only the input actor should ever hold this [`Sender`].
pub type CommandSender = Sender<Command>;

/// Creates the command channel linking the input actor to the simulation
/// actor.
pub fn command_channel() -> (CommandSender, CommandReceiver) {
    mpsc::channel()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Letter commands are selected by their leading character, in either
    /// case, regardless of what trails them.
    fn parses_letter_commands() {
        assert_eq!(Command::parse("r"), Ok(Command::Restart));
        assert_eq!(Command::parse("R"), Ok(Command::Restart));
        assert_eq!(Command::parse("restart please"), Ok(Command::Restart));
        assert_eq!(Command::parse("k"), Ok(Command::ToggleHold));
        assert_eq!(Command::parse("C"), Ok(Command::CycleAliveColour));
        assert_eq!(Command::parse("v"), Ok(Command::CycleDeadColour));
        assert_eq!(Command::parse("X"), Ok(Command::Quit));
    }

    #[test]
    /// A pure-digit line becomes the new tick interval in milliseconds.
    fn parses_interval() {
        assert_eq!(
            Command::parse("250"),
            Ok(Command::SetInterval(Duration::from_millis(250)))
        );
        assert_eq!(
            Command::parse("1"),
            Ok(Command::SetInterval(Duration::from_millis(1)))
        );
    }

    #[test]
    /// Digit-leading garbage, zero & overflow are all interval errors, the
    /// kind the input loop drops silently.
    fn rejects_bad_intervals() {
        for line in ["12x", "0", "99999999999999999999999"] {
            assert_eq!(
                Command::parse(line),
                Err(CommandError::Interval(line.into())),
                "line {line:?} must be an interval error"
            );
        }
    }

    #[test]
    /// Anything else is unrecognised or empty, never a panic.
    fn rejects_unknown_input() {
        assert_eq!(Command::parse(""), Err(CommandError::Empty));
        assert_eq!(Command::parse("q"), Err(CommandError::Unrecognised('q')));
        assert_eq!(Command::parse(" r"), Err(CommandError::Unrecognised(' ')));
    }
}
