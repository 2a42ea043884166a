//! Audio domain: loaded sound clips keyed by cue name.

use bevy::prelude::*;
use std::collections::HashMap;

/// Every cue name the router can emit.
pub const SFX_CUES: [&str; 10] = [
    "Jump",
    "DoubleJump",
    "Land",
    "MountVehicle",
    "DismountVehicle",
    "Horn",
    "Bell",
    "CollectStar",
    "CollectCookie",
    "CollectHeart",
];

/// Clips the audio player can render. Cues with no clip are logged and
/// skipped.
#[derive(Resource, Debug, Default)]
pub struct SfxLibrary {
    clips: HashMap<&'static str, Handle<AudioSource>>,
}

impl SfxLibrary {
    pub fn register(&mut self, name: &'static str, clip: Handle<AudioSource>) {
        self.clips.insert(name, clip);
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Handle<AudioSource>> {
        self.clips.get(name)
    }
}
