//! Core domain: pause state, settings and camera wiring.

mod resources;
mod systems;


pub use resources::{DifficultyMode, GameplayPaused, GameplaySettings, gameplay_active};

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>()
            .init_resource::<GameplaySettings>()
            .add_systems(Startup, setup_camera)
            .add_systems(PostUpdate, follow_player);
    }
}
