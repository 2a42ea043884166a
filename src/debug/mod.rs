//! Debug domain: keyboard shortcuts for fast iteration (dev-tools only).
//!
//! - `T` toggles tiptoe
//! - `X` dismounts the current vehicle
//! - `P` pauses or resumes gameplay

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::GameplayPaused;
use crate::movement::{Locomotion, LocomotionState, Player, SetTiptoeEvent};
use crate::vehicles::DismountRequest;


const DEBUG_PAUSE_SOURCE: &str = "debug";

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        // Pause toggling must keep working while gameplay is paused
        app.add_systems(Update, (handle_debug_hotkeys, toggle_debug_pause));
    }
}

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    players: Query<(Entity, &Locomotion), With<Player>>,
    mut tiptoe_events: MessageWriter<SetTiptoeEvent>,
    mut dismount_requests: MessageWriter<DismountRequest>,
) {
    let Ok((player, locomotion)) = players.single() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::KeyT) {
        let enabled = locomotion.state != LocomotionState::Tiptoeing;
        debug!("Debug: tiptoe {}", if enabled { "on" } else { "off" });
        tiptoe_events.write(SetTiptoeEvent { player, enabled });
    }

    if keyboard.just_pressed(KeyCode::KeyX) {
        debug!("Debug: dismount");
        dismount_requests.write(DismountRequest { player });
    }
}

pub(crate) fn toggle_debug_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
) {
    if keyboard.just_pressed(KeyCode::KeyP) {
        let now_paused = paused.toggle(DEBUG_PAUSE_SOURCE);
        info!("Debug: gameplay {}", if now_paused { "paused" } else { "resumed" });
    }
}
