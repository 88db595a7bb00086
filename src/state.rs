#![warn(clippy::all, clippy::pedantic)]

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::observable::Holder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(StateError::InvalidTheme(other.to_string())),
        }
    }
}

/// Difficulty level, stored and serialized as 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Level {
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Level::Easy => 0,
            Level::Medium => 1,
            Level::Hard => 2,
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = StateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::Easy),
            1 => Ok(Level::Medium),
            2 => Ok(Level::Hard),
            other => Err(StateError::InvalidLevel(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.as_u8()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

// Rejected raw values for the closed enums above
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    InvalidTheme(String),
    InvalidLevel(u8),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::InvalidTheme(theme) => {
                write!(f, "invalid theme {theme:?}, expected \"light\" or \"dark\"")
            }
            StateError::InvalidLevel(level) => {
                write!(f, "invalid level {level}, expected 0, 1 or 2")
            }
        }
    }
}

impl std::error::Error for StateError {}

/// Plain copy of every holder's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub step: u32,
    pub theme: Theme,
    pub level: Level,
    pub score: i64,
    pub pause: bool,
    pub pre_star: bool,
}

/// Shared game state: six independent observable holders. Construct one per
/// session and hand out references.
#[derive(Debug)]
pub struct GameState {
    step: Holder<u32>,
    theme: Holder<Theme>,
    level: Holder<Level>,
    score: Holder<i64>,
    pause: Holder<bool>,
    pre_star: Holder<bool>,
    // Values the holders started with, restored by reset
    initial: StateSnapshot,
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_snapshot(StateSnapshot::default())
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        debug!(
            "Initializing game state with theme {} and level {}",
            config.preferences.theme, config.preferences.level
        );
        Self::from_snapshot(StateSnapshot {
            theme: config.preferences.theme,
            level: config.preferences.level,
            ..StateSnapshot::default()
        })
    }

    fn from_snapshot(snapshot: StateSnapshot) -> Self {
        Self {
            step: Holder::new(snapshot.step),
            theme: Holder::new(snapshot.theme),
            level: Holder::new(snapshot.level),
            score: Holder::new(snapshot.score),
            pause: Holder::new(snapshot.pause),
            pre_star: Holder::new(snapshot.pre_star),
            initial: snapshot,
        }
    }

    #[must_use]
    pub fn step(&self) -> &Holder<u32> {
        &self.step
    }

    #[must_use]
    pub fn theme(&self) -> &Holder<Theme> {
        &self.theme
    }

    #[must_use]
    pub fn level(&self) -> &Holder<Level> {
        &self.level
    }

    #[must_use]
    pub fn score(&self) -> &Holder<i64> {
        &self.score
    }

    #[must_use]
    pub fn pause(&self) -> &Holder<bool> {
        &self.pause
    }

    #[must_use]
    pub fn pre_star(&self) -> &Holder<bool> {
        &self.pre_star
    }

    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            step: self.step.get(),
            theme: self.theme.get(),
            level: self.level.get(),
            score: self.score.get(),
            pause: self.pause.get(),
            pre_star: self.pre_star.get(),
        }
    }

    // Back to the starting values, preferences included. Subscribers stay
    // registered and see each write.
    pub fn reset(&self) {
        trace!("Resetting game state");
        let initial = self.initial;
        self.step.set(initial.step);
        self.theme.set(initial.theme);
        self.level.set(initial.level);
        self.score.set(initial.score);
        self.pause.set(initial.pause);
        self.pre_star.set(initial.pre_star);
    }
}
