//! Audio domain: sound cues for jumps, landings, vehicles and pickups.

mod events;
mod resources;
mod systems;


pub use events::PlaySfxEvent;
pub use resources::{SFX_CUES, SfxLibrary};

use bevy::prelude::*;

use crate::audio::systems::{load_sfx_library, play_sfx, route_sound_cues};

pub struct SfxPlugin;

impl Plugin for SfxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SfxLibrary>()
            .add_message::<PlaySfxEvent>()
            .add_systems(Startup, load_sfx_library)
            .add_systems(PostUpdate, (route_sound_cues, play_sfx).chain());
    }
}
