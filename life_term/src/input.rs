//! The input actor: turns stdin lines into command packets.

use std::io::BufRead;

use life_lib::communication::{Command, CommandSender};

/// Reads line-oriented commands until quit (or end of input) & forwards them
/// to the simulation actor.
///
/// Unparseable lines are dropped on the floor by design; the previous
/// interval, colours & hold state simply stay in force. The only suspension
/// point here is the blocking line read.
pub fn input_loop(input: impl BufRead, commands: &CommandSender) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                log::warn!("input stream failed: {error}");
                break;
            }
        };

        match Command::parse(&line) {
            Ok(command) => {
                let quitting = command == Command::Quit;
                if commands.send(command).is_err() {
                    // The simulation actor is gone; nothing left to steer.
                    return;
                }
                if quitting {
                    return;
                }
            }
            Err(error) => log::debug!("ignoring input line: {error}"),
        }
    }

    // Input ended without an explicit quit; let the simulation actor exit too.
    let _ = commands.send(Command::Quit);
}
