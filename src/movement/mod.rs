//! Movement domain: ground sensing, jump arbitration and the player
//! locomotion state machine.

mod bootstrap;
mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use bootstrap::{PLAYER_SPAWN, spawn_player};
pub use components::{
    GameLayer, Ground, GroundSensor, GroundTransition, JumpKind, JumpState, Locomotion,
    LocomotionSignals, LocomotionState, Player, RiderAnchor, SetupError,
};
pub use events::{JumpEvent, LandEvent, SetTiptoeEvent};
pub use resources::{MovementTuning, TapInput};

pub(crate) use systems::{
    apply_gravity, apply_horizontal_movement, apply_tiptoe_requests, arbitrate_jump,
    detect_ground, publish_signals, read_tap_input, resolve_landing, update_timers,
};

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::bootstrap::bootstrap_player;

/// Ordering of the fixed tick: sense, then decide, then write velocity.
/// The physics step integrates afterwards in `FixedPostUpdate`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    Sense,
    Arbitrate,
    Apply,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<TapInput>()
            .add_message::<JumpEvent>()
            .add_message::<LandEvent>()
            .add_message::<SetTiptoeEvent>()
            .add_systems(Startup, bootstrap_player)
            .configure_sets(
                FixedUpdate,
                (
                    LocomotionSet::Sense,
                    LocomotionSet::Arbitrate,
                    LocomotionSet::Apply,
                )
                    .chain()
                    .run_if(gameplay_active),
            )
            .add_systems(
                FixedUpdate,
                (
                    (detect_ground, update_timers)
                        .chain()
                        .in_set(LocomotionSet::Sense),
                    arbitrate_jump.in_set(LocomotionSet::Arbitrate),
                    (apply_gravity, apply_horizontal_movement)
                        .chain()
                        .in_set(LocomotionSet::Apply),
                ),
            )
            .add_systems(
                Update,
                (
                    read_tap_input,
                    apply_tiptoe_requests,
                    resolve_landing,
                    publish_signals,
                )
                    .chain()
                    .run_if(gameplay_active),
            );
    }
}
