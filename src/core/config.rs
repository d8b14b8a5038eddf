//! Session configuration types.
//!
//! A session is configured once at start:
//! - `Level`: starting level, which fixes the disk count (level + 2)
//! - `Difficulty`: full layout on tower 1, or a half-completed layout
//! - `SessionConfig`: combines the above with the level-advance delay
//!
//! The host page supplies the first two through its query string, e.g.
//! `?level=3&difficulty=easy`. Parsing is forgiving: anything unusable falls
//! back to the default without reporting an error.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use url::form_urlencoded;

use super::error::HanoiError;

/// Highest reachable level. Level 62 plays with 64 disks.
pub const MAX_LEVEL: u32 = 62;

/// Delay between a win and the next level's setup.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(1000);

/// A puzzle level (1-based).
///
/// ```
/// use rust_hanoi::core::Level;
///
/// let level = Level::new(1);
/// assert_eq!(level.disk_count(), 3);
/// assert_eq!(level.next().disk_count(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Level(u32);

impl Level {
    /// The first level.
    pub const FIRST: Level = Level(1);

    /// Create a level, clamped into `1..=MAX_LEVEL`.
    #[must_use]
    pub fn new(level: u32) -> Self {
        Self(level.clamp(1, MAX_LEVEL))
    }

    /// Parse a level parameter.
    ///
    /// Returns `None` for anything that is not a positive integer.
    /// Surrounding whitespace is ignored, but trailing junk is not: `"3abc"`
    /// is rejected rather than read as 3. Values above `MAX_LEVEL` are
    /// clamped rather than rejected.
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim().parse::<u32>() {
            Ok(0) | Err(_) => None,
            Ok(level) => Some(Self::new(level)),
        }
    }

    /// Get the raw level number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of disks in play at this level.
    #[must_use]
    pub const fn disk_count(self) -> u32 {
        self.0 + 2
    }

    /// The following level.
    ///
    /// The level stops increasing at `MAX_LEVEL`: the next level after the
    /// cap is the cap itself.
    #[must_use]
    pub fn next(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Initial layout style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Larger half of the disks on tower 1, smaller half already on tower 3.
    Easy,
    /// Every disk on tower 1.
    #[default]
    Hard,
}

impl FromStr for Difficulty {
    type Err = HanoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(HanoiError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Level the session starts at.
    pub initial_level: Level,

    /// Initial layout style. Kept across restarts and level advances.
    pub difficulty: Difficulty,

    /// How long the win message stays up before the next level is set up.
    pub advance_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_level: Level::FIRST,
            difficulty: Difficulty::Hard,
            advance_delay: DEFAULT_ADVANCE_DELAY,
        }
    }
}

impl SessionConfig {
    /// Build a configuration from a URL query string.
    ///
    /// Recognised keys are `level` and `difficulty`; the first occurrence of
    /// each wins. A leading `?` is optional. Keys and values are
    /// percent-decoded, with `+` read as a space.
    ///
    /// ```
    /// use rust_hanoi::core::{Difficulty, Level, SessionConfig};
    ///
    /// let config = SessionConfig::from_query("?level=4&difficulty=easy");
    /// assert_eq!(config.initial_level, Level::new(4));
    /// assert_eq!(config.difficulty, Difficulty::Easy);
    ///
    /// let fallback = SessionConfig::from_query("level=banana");
    /// assert_eq!(fallback.initial_level, Level::FIRST);
    /// ```
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let mut level_seen = false;
        let mut difficulty_seen = false;

        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "level" if !level_seen => {
                    level_seen = true;
                    if let Some(level) = Level::from_param(&value) {
                        config.initial_level = level;
                    }
                }
                "difficulty" if !difficulty_seen => {
                    difficulty_seen = true;
                    if let Ok(difficulty) = value.parse() {
                        config.difficulty = difficulty;
                    }
                }
                _ => {}
            }
        }

        config
    }

    /// Set the starting level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.initial_level = level;
        self
    }

    /// Set the layout style.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the delay before the next level is set up.
    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }
}
