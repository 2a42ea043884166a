//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    GroundSensor, GroundTransition, JumpState, LandEvent, Locomotion, MovementTuning, Player,
};

/// Probe the ground sensor of every walking body. Runs first in the fixed
/// tick so arbitration never sees a stale reading.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &Transform, &GroundSensor, &Locomotion, &mut JumpState), With<Player>>,
    mut land_events: MessageWriter<LandEvent>,
) {
    for (entity, transform, sensor, locomotion, mut jump) in &mut query {
        // The vehicle carries its rider; no independent ground contact
        if locomotion.is_riding() {
            continue;
        }

        let grounded = sensor.probe(&spatial_query, transform.translation.truncate());

        match jump.sense_ground(grounded, &tuning) {
            GroundTransition::Landed => {
                land_events.write(LandEvent { player: entity });
                debug!(
                    "Landed: can_double_jump={}, coyote={:.2}",
                    jump.can_double_jump, jump.coyote_timer
                );
            }
            GroundTransition::LeftGround => {
                debug!("Left ground: coyote window {:.2}s", jump.coyote_timer);
            }
            GroundTransition::Unchanged => {}
        }
    }
}
