use crate::{BoardConfig, Coord};
use serde::{Deserialize, Serialize};

/// The fixed set of selectable board sizes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Expert,
}

impl Level {
    pub const fn count(self) -> Coord {
        use Level::*;
        match self {
            Beginner => 10,
            Intermediate => 15,
            Expert => 20,
        }
    }

    pub const fn config(self) -> BoardConfig {
        // every level side length satisfies the density formula
        BoardConfig::new_unchecked(self.count())
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::Beginner
    }
}

/// Cosmetic theme flag, never consulted by game logic.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    Original,
    Lego,
}

impl Theme {
    pub const fn toggle(self) -> Self {
        use Theme::*;
        match self {
            Original => Lego,
            Lego => Original,
        }
    }

    /// Stylesheet class suffix for the presentation layer.
    pub const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Original => "original",
            Lego => "lego",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Original
    }
}

/// Adapter-side preferences, persisted by the embedding between sessions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub level: Level,
    pub theme: Theme,
}

impl Settings {
    pub fn board_config(&self) -> BoardConfig {
        self.level.config()
    }
}
