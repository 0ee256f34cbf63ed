//! The update engine: computes the next generation under the Life rule &
//! classifies it against the history buffer.

use crate::{Cell, Grid, History, Session};

/// Whether a reported oscillation also pauses the simulation.
///
/// `Advisory` reports the oscillation & keeps ticking (the interactive,
/// restart-capable behaviour); `Halt` enters the held state the way
/// extinction & stagnation do (the menu-driven behaviour).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OscillationPolicy {
    #[default]
    Advisory,
    Halt,
}

/// What one tick concluded about the world.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
pub enum TickEvent {
    /// The world changed. `generation` is the counter value of the state the
    /// renderer just showed; `alive_cells` is the population of the freshly
    /// computed state.
    Continuing { generation: u64, alive_cells: u32 },
    /// The previous generation had no live cell left.
    Extinct,
    /// The previous generation matched the one before it (a still life).
    Stagnant,
    /// The new generation matches one from `period` ticks ago.
    Oscillating { period: u8 },
}

/// Evolves the history buffer under the Life survival/birth rule.
///
/// Termination detection is a fixed 4-generation lookback: it catches
/// period-1, 2 & 3 cycles & nothing longer. A period-4-or-greater oscillator
/// is reported as `Continuing` forever. That bound is part of the design,
/// inherited deliberately; it is not an optimisation target.
pub struct Engine {
    history: History,
    policy: OscillationPolicy,
}

impl Engine {
    /// Creates an engine primed with the given starting layout.
    pub fn new(layout: Grid, policy: OscillationPolicy) -> Self {
        Self {
            history: History::new(layout),
            policy,
        }
    }

    /// The history buffer, newest snapshot included.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Replays the session's pattern from its starting layout & resets the
    /// session counters & hold flag.
    pub(crate) fn restart(&mut self, session: &mut Session) {
        self.history.replace_all(session.pattern().layout());
        session.reset_counters();
        session.clear_hold();
    }

    /// Advances the world one tick & classifies the outcome.
    ///
    /// The history shifts, the next generation is computed into the newest
    /// slot from slot 2, & the slots are compared in precedence order:
    /// extinction, stagnation, oscillation, continuation. Extinction &
    /// stagnation put the session into the held state; oscillation does so
    /// only under [`OscillationPolicy::Halt`]. Only a continued tick updates
    /// the generation counter & the population.
    pub fn advance(&mut self, session: &mut Session) -> TickEvent {
        self.history.shift();
        let next = next_generation(self.history.snapshot(2));
        self.history.set_newest(next);

        let current = self.history.snapshot(2);
        if current.is_extinct() {
            log::debug!("all cells dead; entering held state");
            session.hold();
            return TickEvent::Extinct;
        }
        if current == self.history.snapshot(1) {
            log::debug!("world stagnated; entering held state");
            session.hold();
            return TickEvent::Stagnant;
        }

        let newest = self.history.snapshot(3);
        let period = if newest == self.history.snapshot(1) {
            Some(2)
        } else if newest == self.history.snapshot(0) {
            Some(3)
        } else {
            None
        };
        if let Some(period) = period {
            log::debug!("world oscillates with period {period}");
            if self.policy == OscillationPolicy::Halt {
                session.hold();
            }
            return TickEvent::Oscillating { period };
        }

        session.set_alive_cells(self.history.newest().alive_count());
        let generation = session.generation();
        session.bump_generation();
        TickEvent::Continuing {
            generation,
            alive_cells: session.alive_cells(),
        }
    }
}

/// Computes the successor of `current` under the standard Life rule: a live
/// cell survives on 2 or 3 neighbours, a dead cell is born on exactly 3.
fn next_generation(current: &Grid) -> Grid {
    let mut next = Grid::new(current.width(), current.height());
    for y in 0..current.height() {
        for x in 0..current.width() {
            let neighbours = current.live_neighbours(x, y);
            let alive = match current.get(x, y) {
                Cell::Alive => neighbours == 2 || neighbours == 3,
                Cell::Dead => neighbours == 3,
            };
            if alive {
                next.set(x, y, Cell::Alive);
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{ColourPair, Pattern};

    fn session_on(layout: Grid) -> Session {
        Session::new(
            Pattern::custom("test", layout),
            Duration::from_millis(1),
            ColourPair::default(),
        )
    }

    fn engine_on(layout: Grid) -> (Engine, Session) {
        (
            Engine::new(layout.clone(), OscillationPolicy::Advisory),
            session_on(layout),
        )
    }

    /// A horizontal blinker centred on a 5x5 board.
    fn blinker() -> Grid {
        let mut layout = Grid::new(5, 5);
        layout.set(1, 2, Cell::Alive);
        layout.set(2, 2, Cell::Alive);
        layout.set(3, 2, Cell::Alive);
        layout
    }

    /// A 2x2 block (a still life) on a 6x6 board.
    fn block() -> Grid {
        let mut layout = Grid::new(6, 6);
        layout.set(2, 2, Cell::Alive);
        layout.set(3, 2, Cell::Alive);
        layout.set(2, 3, Cell::Alive);
        layout.set(3, 3, Cell::Alive);
        layout
    }

    /// A glider in the top-left corner of a 12x12 board.
    fn glider() -> Grid {
        let mut layout = Grid::new(12, 12);
        layout.set(1, 0, Cell::Alive);
        layout.set(2, 1, Cell::Alive);
        layout.set(0, 2, Cell::Alive);
        layout.set(1, 2, Cell::Alive);
        layout.set(2, 2, Cell::Alive);
        layout
    }

    #[test]
    /// An all-dead board classifies as extinct on the very first tick &
    /// holds the session.
    fn empty_board_is_extinct() {
        let (mut engine, mut session) = engine_on(Grid::new(5, 5));

        assert_eq!(engine.advance(&mut session), TickEvent::Extinct);
        assert!(session.held(), "Extinction must enter the held state");
        assert_eq!(session.generation(), 1, "No generation was completed");
    }

    #[test]
    /// A still life continues once (nothing to compare against yet), then
    /// classifies as stagnant on the following tick.
    fn block_stagnates_on_second_tick() {
        let (mut engine, mut session) = engine_on(block());

        assert_eq!(
            engine.advance(&mut session),
            TickEvent::Continuing {
                generation: 1,
                alive_cells: 4
            }
        );
        assert_eq!(engine.advance(&mut session), TickEvent::Stagnant);
        assert!(session.held(), "Stagnation must enter the held state");
    }

    #[test]
    /// A blinker settles into its cycle immediately & is reported as a
    /// period-2 oscillation within two ticks.
    fn blinker_oscillates_with_period_two() {
        let (mut engine, mut session) = engine_on(blinker());

        assert_eq!(
            engine.advance(&mut session),
            TickEvent::Continuing {
                generation: 1,
                alive_cells: 3
            }
        );
        assert_eq!(
            engine.advance(&mut session),
            TickEvent::Oscillating { period: 2 }
        );
        assert!(
            !session.held(),
            "An advisory oscillation must not pause the session"
        );
        assert_eq!(
            session.generation(),
            2,
            "Oscillating ticks must not advance the generation counter"
        );
    }

    #[test]
    /// Under the halting policy the same oscillation pauses the session.
    fn halting_policy_holds_on_oscillation() {
        let mut engine = Engine::new(blinker(), OscillationPolicy::Halt);
        let mut session = session_on(blinker());

        engine.advance(&mut session);
        assert_eq!(
            engine.advance(&mut session),
            TickEvent::Oscillating { period: 2 }
        );
        assert!(session.held());
    }

    #[test]
    /// The blinker keeps reporting its oscillation: the cycle re-matches the
    /// lookback on every subsequent tick.
    fn blinker_keeps_oscillating() {
        let (mut engine, mut session) = engine_on(blinker());
        engine.advance(&mut session);

        for _ in 0..4 {
            assert_eq!(
                engine.advance(&mut session),
                TickEvent::Oscillating { period: 2 }
            );
        }
    }

    #[test]
    /// A glider keeps continuing; its cycle is far longer than the lookback
    /// window, so the engine never reports it.
    fn glider_continues_past_the_lookback() {
        let (mut engine, mut session) = engine_on(glider());

        for generation in 1..=10 {
            assert_eq!(
                engine.advance(&mut session),
                TickEvent::Continuing {
                    generation,
                    alive_cells: 5
                },
                "A glider must continue on tick {generation}"
            );
        }
        assert_eq!(session.generation(), 11);
    }

    #[test]
    /// The rule itself: survival on 2 or 3 neighbours, birth on exactly 3.
    fn applies_survival_and_birth_rule() {
        // A lone pair starves; the corner of an L-tromino births a block.
        let mut lonely = Grid::new(5, 5);
        lonely.set(1, 1, Cell::Alive);
        lonely.set(2, 1, Cell::Alive);
        assert!(next_generation(&lonely).is_extinct());

        let mut tromino = Grid::new(5, 5);
        tromino.set(1, 1, Cell::Alive);
        tromino.set(2, 1, Cell::Alive);
        tromino.set(1, 2, Cell::Alive);
        let next = next_generation(&tromino);
        assert_eq!(next.alive_count(), 4);
        assert_eq!(next.get(2, 2), Cell::Alive, "Three neighbours give birth");
    }

    #[test]
    /// The rule honours the torus: a row spanning the full board width acts
    /// like an infinite line, not a blinker with loose ends.
    fn rule_wraps_around_the_torus() {
        let mut ring = Grid::new(4, 4);
        for x in 0..4 {
            ring.set(x, 1, Cell::Alive);
        }

        let next = next_generation(&ring);
        for x in 0..4 {
            assert_eq!(
                next.get(x, 1),
                Cell::Alive,
                "Every cell of a wrapped row has exactly 2 neighbours & survives"
            );
        }
    }

    #[test]
    /// Restarting replays the pattern & resets the counters, whatever state
    /// the session was in.
    fn restart_resets_session() {
        let (mut engine, mut session) = engine_on(block());
        engine.advance(&mut session);
        engine.advance(&mut session);
        assert!(session.held());

        engine.restart(&mut session);
        assert!(!session.held(), "Restart must clear the held state");
        assert_eq!(session.generation(), 1);
        assert_eq!(session.alive_cells(), 4);
        assert_eq!(
            engine.history().newest(),
            session.pattern().layout(),
            "Restart must replay the starting layout"
        );

        // The replay behaves like a fresh session.
        assert_eq!(
            engine.advance(&mut session),
            TickEvent::Continuing {
                generation: 1,
                alive_cells: 4
            }
        );
    }
}
