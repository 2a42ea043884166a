//! Core domain: core setup systems.

use bevy::prelude::*;

use crate::movement::Player;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Keep the camera trailing the auto-walking player horizontally.
pub(crate) fn follow_player(
    player: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };

    for mut camera_transform in &mut camera {
        camera_transform.translation.x = player_transform.translation.x + 160.0;
    }
}
