//! Collection domain: the score accumulator.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::collection::CollectibleKind;

/// How many of each kind a level contains.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelCollectionTargets {
    pub stars: u32,
    pub cookies: u32,
    pub hearts: u32,
}

impl Default for LevelCollectionTargets {
    fn default() -> Self {
        Self {
            stars: 50,
            cookies: 15,
            hearts: 10,
        }
    }
}

impl LevelCollectionTargets {
    pub fn target(&self, kind: CollectibleKind) -> u32 {
        match kind {
            CollectibleKind::Star => self.stars,
            CollectibleKind::Cookie => self.cookies,
            CollectibleKind::Heart => self.hearts,
        }
    }

    pub fn total(&self) -> u32 {
        self.stars
            .saturating_add(self.cookies)
            .saturating_add(self.hearts)
    }

    /// Exact sum, or `None` if it doesn't fit in a `u32`.
    pub fn checked_total(&self) -> Option<u32> {
        self.stars.checked_add(self.cookies)?.checked_add(self.hearts)
    }
}

/// Session and lifetime counts per collectible kind.
#[derive(Resource, Debug, Default)]
pub struct CollectionTally {
    pub targets: LevelCollectionTargets,
    session: HashMap<CollectibleKind, u32>,
    lifetime: HashMap<CollectibleKind, u32>,
}

impl CollectionTally {
    pub fn new(targets: LevelCollectionTargets) -> Self {
        Self {
            targets,
            ..default()
        }
    }

    /// Add `amount` and report whether this pickup completed the kind.
    /// Completion fires only on the pickup that crosses the level total.
    pub fn collect(&mut self, kind: CollectibleKind, amount: u32) -> bool {
        let target = self.targets.target(kind);
        let count = self.session.entry(kind).or_default();
        let before = *count;
        *count = count.saturating_add(amount);
        let lifetime = self.lifetime.entry(kind).or_default();
        *lifetime = lifetime.saturating_add(amount);

        before < target && *count >= target
    }

    pub fn count(&self, kind: CollectibleKind) -> u32 {
        self.session.get(&kind).copied().unwrap_or(0)
    }

    pub fn lifetime_count(&self, kind: CollectibleKind) -> u32 {
        self.lifetime.get(&kind).copied().unwrap_or(0)
    }

    /// Call at level start. Lifetime totals are kept.
    pub fn reset_session(&mut self) {
        self.session.clear();
    }

    pub fn completion_percentage(&self) -> f32 {
        let available = self.targets.total();
        if available == 0 {
            return 100.0;
        }
        let collected = CollectibleKind::ALL
            .iter()
            .fold(0u32, |sum, k| sum.saturating_add(self.count(*k)));
        collected as f32 / available as f32 * 100.0
    }

    pub fn is_perfect_run(&self) -> bool {
        CollectibleKind::ALL
            .iter()
            .all(|kind| self.count(*kind) >= self.targets.target(*kind))
    }

    pub fn session_summary(&self) -> String {
        format!(
            "Stars: {}/{}, Cookies: {}/{}, Hearts: {}/{}",
            self.count(CollectibleKind::Star),
            self.targets.stars,
            self.count(CollectibleKind::Cookie),
            self.targets.cookies,
            self.count(CollectibleKind::Heart),
            self.targets.hearts
        )
    }
}
