//! The simulation actor: owns the engine & session, consumes command
//! packets & drives the renderer at the configured cadence.

use std::io;
use std::sync::mpsc::TryRecvError;
use std::thread;

use crate::communication::{Command, CommandReceiver};
use crate::{Engine, Frame, Session, TickEvent};

/// The output half of the interaction loop.
///
/// Implementations draw whole frames & report the outcome of each tick; the
/// simulation actor holds no lock of any kind while calling them.
pub trait Renderer: Send {
    /// Draws one full frame.
    fn render(&mut self, frame: &Frame) -> io::Result<()>;

    /// Reports the outcome of the tick that followed the rendered frame.
    /// For held outcomes this is the last output before the actor suspends,
    /// so it should tell the user how to resume.
    fn report(&mut self, event: &TickEvent) -> io::Result<()>;
}

/// Starts the simulation actor on its own thread.
///
/// Each iteration drains every pending command, renders the current state,
/// advances the engine one tick, reports the outcome & sleeps for the tick
/// interval. While the session is held the actor blocks on the command
/// channel instead of polling; it is woken exactly once per incoming command
/// & re-checks the hold & quit flags after every wakeup. A quit request is
/// honoured at the top of the next iteration, never mid-tick.
///
/// The thread ends when quit is requested (or every sender is dropped) &
/// yields the final [`Session`] on join, so the caller can persist the
/// user's tuning.
pub fn start_engine<R: Renderer + 'static>(
    mut engine: Engine,
    mut session: Session,
    commands: CommandReceiver,
    mut renderer: R,
) -> io::Result<thread::JoinHandle<Session>> {
    thread::Builder::new()
        .name("Simulation_Thread".into())
        .spawn(move || {
            let mut pacer = spin_sleep_util::interval(session.interval());
            pacer.set_missed_tick_behavior(spin_sleep_util::MissedTickBehavior::Skip);
            let mut period = session.interval();

            loop {
                // Drain every pending command; at worst a command waits one
                // full tick before it is observed.
                loop {
                    match commands.try_recv() {
                        Ok(command) => apply(command, &mut engine, &mut session),
                        Err(TryRecvError::Empty) => break,
                        Err(TryRecvError::Disconnected) => {
                            log::info!("input actor gone; shutting the simulation down");
                            session.request_quit();
                            break;
                        }
                    }
                }

                if session.quitting() {
                    break;
                }

                if session.held() {
                    // Suspend until the input actor sends something; the
                    // hold & quit flags are re-checked after every wakeup.
                    match commands.recv() {
                        Ok(command) => apply(command, &mut engine, &mut session),
                        Err(_) => session.request_quit(),
                    }
                    continue;
                }

                let frame = Frame::new(
                    engine.history().newest().clone(),
                    session.generation(),
                    session.alive_cells(),
                    session.colours(),
                    session.interval(),
                );
                if let Err(error) = renderer.render(&frame) {
                    log::error!("renderer failed, stopping the simulation: {error}");
                    break;
                }

                let event = engine.advance(&mut session);
                if let Err(error) = renderer.report(&event) {
                    log::error!("renderer failed, stopping the simulation: {error}");
                    break;
                }

                if session.interval() != period {
                    period = session.interval();
                    pacer.set_period(period);
                }
                pacer.tick();
            }

            log::info!(
                "simulation finished at generation {} with {} cells alive",
                session.generation(),
                session.alive_cells()
            );
            session
        })
}

fn apply(command: Command, engine: &mut Engine, session: &mut Session) {
    match command {
        Command::Restart => {
            log::debug!("restarting pattern {:?}", session.pattern().name());
            engine.restart(session);
        }
        Command::ToggleHold => session.toggle_hold(),
        Command::CycleAliveColour => session.cycle_alive_colour(),
        Command::CycleDeadColour => session.cycle_dead_colour(),
        Command::SetInterval(interval) => session.set_interval(interval),
        Command::Quit => session.request_quit(),
    }
}
