//! Collection domain: collectible items.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CollectibleKind {
    Star,
    Cookie,
    Heart,
}

impl CollectibleKind {
    pub const ALL: [CollectibleKind; 3] = [
        CollectibleKind::Star,
        CollectibleKind::Cookie,
        CollectibleKind::Heart,
    ];

    pub fn sound_name(self) -> &'static str {
        match self {
            CollectibleKind::Star => "CollectStar",
            CollectibleKind::Cookie => "CollectCookie",
            CollectibleKind::Heart => "CollectHeart",
        }
    }
}

impl std::fmt::Display for CollectibleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectibleKind::Star => write!(f, "Star"),
            CollectibleKind::Cookie => write!(f, "Cookie"),
            CollectibleKind::Heart => write!(f, "Heart"),
        }
    }
}

/// A pickup that auto-collects on contact with the player.
#[derive(Component, Debug, Clone)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub value: u32,
    collected: bool,
}

impl Collectible {
    pub fn new(kind: CollectibleKind, value: u32) -> Self {
        Self {
            kind,
            value,
            collected: false,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// One-shot latch: returns true only the first time it is called.
    pub fn collect(&mut self) -> bool {
        !std::mem::replace(&mut self.collected, true)
    }
}
