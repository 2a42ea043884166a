//! Core domain: shared resources for pause state and player-facing settings.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }

    /// Flip a single pause source, returning whether it is now active.
    pub fn toggle(&mut self, source: impl Into<String>) -> bool {
        let source = source.into();
        if self.sources.remove(&source) {
            false
        } else {
            self.sources.insert(source);
            true
        }
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum DifficultyMode {
    /// Very forgiving, vehicles available
    #[default]
    Easy,
    Normal,
    /// Challenge mode: vehicles can't be mounted
    WalkOnly,
}

impl DifficultyMode {
    pub fn vehicles_allowed(self) -> bool {
        !matches!(self, DifficultyMode::WalkOnly)
    }
}

/// Settings a parent can change from the menu.
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplaySettings {
    pub difficulty: DifficultyMode,
    /// Mutes every sound cue
    pub baby_safe_mode: bool,
}
