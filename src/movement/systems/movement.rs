//! Movement domain: locomotion systems for timers, jumping and velocity.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    JumpEvent, JumpState, Locomotion, LocomotionSignals, MovementTuning, Player, SetTiptoeEvent,
    TapInput,
};
use crate::vehicles::{SpecialAbilityRequest, Vehicle};

pub(crate) fn update_timers(time: Res<Time>, mut query: Query<&mut JumpState, With<Player>>) {
    let dt = time.delta_secs();

    for mut jump in &mut query {
        jump.tick(dt);
    }
}

/// Consume the latched tap and run jump arbitration. While riding, the tap
/// goes to the vehicle's special ability instead.
pub(crate) fn arbitrate_jump(
    mut tap: ResMut<TapInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (Entity, &mut Locomotion, &mut JumpState, &mut LinearVelocity),
        With<Player>,
    >,
    mut jump_events: MessageWriter<JumpEvent>,
    mut ability_requests: MessageWriter<SpecialAbilityRequest>,
) {
    let tapped = tap.take();

    for (entity, mut locomotion, mut jump, mut velocity) in &mut query {
        if let Some(vehicle) = locomotion.mounted_vehicle() {
            if tapped {
                ability_requests.write(SpecialAbilityRequest { vehicle });
            }
            continue;
        }

        if tapped {
            jump.buffer_tap(&tuning);
        }

        // Retry every tick while the buffer is live so an early tap
        // still jumps on the tick ground contact is detected
        if !jump.wants_jump() {
            continue;
        }

        let Some(kind) = jump.try_jump() else {
            continue;
        };

        // Zero vertical speed first so rapid taps don't stack impulses
        velocity.y = 0.0;
        velocity.y += tuning.jump_velocity;
        locomotion.begin_jump();

        jump_events.write(JumpEvent {
            player: entity,
            double_jump: kind.is_double(),
        });

        debug!(
            "{}: on_ground={}, can_double_jump={}",
            if kind.is_double() { "Double jump" } else { "Jump" },
            jump.on_ground,
            jump.can_double_jump
        );
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Locomotion, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (locomotion, mut velocity) in &mut query {
        if locomotion.is_riding() {
            continue;
        }

        velocity.y -= tuning.gravity * dt;
    }
}

/// Auto-walk. Riders move at the vehicle's speed with no vertical motion.
pub(crate) fn apply_horizontal_movement(
    vehicles: Query<&Vehicle>,
    mut query: Query<(&Locomotion, &mut LinearVelocity), With<Player>>,
) {
    for (locomotion, mut velocity) in &mut query {
        let vehicle_speed = locomotion
            .mounted_vehicle()
            .and_then(|vehicle| vehicles.get(vehicle).ok())
            .map(|vehicle| vehicle.current_speed);

        velocity.x = locomotion.effective_speed(vehicle_speed);

        if locomotion.is_riding() {
            velocity.y = 0.0;
        }
    }
}

pub(crate) fn resolve_landing(
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Locomotion, &JumpState, &LinearVelocity), With<Player>>,
) {
    for (mut locomotion, jump, velocity) in &mut query {
        if locomotion.resolve_landing(jump.on_ground, velocity.y, tuning.landing_epsilon) {
            debug!("Back to walking at {}", locomotion.current_speed);
        }
    }
}

pub(crate) fn apply_tiptoe_requests(
    mut requests: MessageReader<SetTiptoeEvent>,
    mut query: Query<&mut Locomotion, With<Player>>,
) {
    for request in requests.read() {
        let Ok(mut locomotion) = query.get_mut(request.player) else {
            continue;
        };

        if locomotion.set_tiptoe(request.enabled) {
            info!(
                "Tiptoe {}: speed now {}",
                if request.enabled { "on" } else { "off" },
                locomotion.current_speed
            );
        } else {
            debug!(
                "Tiptoe request ignored in state {:?}",
                locomotion.state
            );
        }
    }
}

pub(crate) fn publish_signals(
    mut query: Query<
        (&Locomotion, &JumpState, &LinearVelocity, &mut LocomotionSignals),
        With<Player>,
    >,
) {
    for (locomotion, jump, velocity, mut signals) in &mut query {
        let next = LocomotionSignals {
            speed: velocity.x.abs(),
            grounded: jump.on_ground || locomotion.is_riding(),
            riding: locomotion.is_riding(),
        };

        if *signals != next {
            *signals = next;
        }
    }
}
