//! Persisted user tuning: tick interval, colours & oscillation policy.
//!
//! Settings seed the session at startup & are written back from the final
//! session state on a clean exit. They are never allowed to break a launch:
//! a missing or invalid file just means defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use life_lib::{Colour, ColourPair, DEFAULT_INTERVAL, OscillationPolicy, Session};

#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
#[serde(default)]
pub struct Settings {
    pub interval_ms: u64,
    pub alive_colour: Colour,
    pub dead_colour: Colour,
    pub halt_on_oscillation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let colours = ColourPair::default();
        Self {
            interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            alive_colour: colours.alive(),
            dead_colour: colours.dead(),
            halt_on_oscillation: false,
        }
    }
}

impl Settings {
    /// Loads settings from the given file, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load(path: &Path) -> Settings {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) => {
                if error.kind() != ErrorKind::NotFound {
                    log::warn!("could not read settings file {path:?}: {error}");
                }
                return Settings::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(settings) => settings,
            Err(error) => {
                log::warn!("ignoring invalid settings file {path:?}: {error}");
                Settings::default()
            }
        }
    }

    /// Writes the settings back, creating the directory if needed. Failure
    /// costs the user their tuning, nothing more, so it only warns.
    pub fn save(&self, path: &Path) {
        if let Some(directory) = path.parent() {
            if let Err(error) = fs::create_dir_all(directory) {
                log::warn!("could not create settings directory {directory:?}: {error}");
                return;
            }
        }

        let text = match serde_json::to_string_pretty(self) {
            Ok(text) => text,
            Err(error) => {
                log::warn!("could not serialise settings: {error}");
                return;
            }
        };
        if let Err(error) = fs::write(path, text) {
            log::warn!("could not write settings file {path:?}: {error}");
        }
    }

    /// Records the tuning of a finished session.
    pub fn update_from(&mut self, session: &Session) {
        self.interval_ms = session.interval().as_millis() as u64;
        let colours = session.colours();
        self.alive_colour = colours.alive();
        self.dead_colour = colours.dead();
    }

    /// The tick interval to start with; a hand-edited zero is clamped up
    /// rather than allowed to stall the pacer.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }

    /// The colour selectors to start with.
    pub fn colours(&self) -> ColourPair {
        ColourPair::new(self.alive_colour, self.dead_colour)
    }

    /// The oscillation policy to run with.
    pub fn policy(&self) -> OscillationPolicy {
        if self.halt_on_oscillation {
            OscillationPolicy::Halt
        } else {
            OscillationPolicy::Advisory
        }
    }
}
