//! Movement domain: player bootstrap with validated setup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, GroundSensor, JumpState, Locomotion, LocomotionSignals, MovementTuning, Player,
    SetupError,
};

pub const PLAYER_SPAWN: Vec2 = Vec2::new(-300.0, -120.0);

/// Spawn the player for this level session. Invalid tuning or sensor
/// geometry aborts the spawn rather than producing a half-built entity.
pub fn spawn_player(
    commands: &mut Commands,
    tuning: &MovementTuning,
    position: Vec2,
) -> Result<Entity, SetupError> {
    tuning.validate()?;
    let sensor = GroundSensor::new(tuning.ground_check_offset(), tuning.ground_check_radius)?;
    let size = tuning.body_size();

    let entity = commands
        .spawn((
            // Identity & Movement
            (
                Player,
                Locomotion::from_tuning(tuning),
                JumpState {
                    can_double_jump: tuning.allow_double_jump,
                    ..default()
                },
                sensor,
                LocomotionSignals::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.95, 0.75, 0.55),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 1.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(size.x, size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // Gravity is applied manually in the fixed tick
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Vehicle, GameLayer::Collectible],
                ),
            ),
        ))
        .id();

    Ok(entity)
}

pub(crate) fn bootstrap_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    match spawn_player(&mut commands, &tuning, PLAYER_SPAWN) {
        Ok(entity) => info!(
            "Spawned player {:?}: walk_speed={}, jump_height={:.1}",
            entity,
            tuning.walk_speed,
            tuning.single_jump_height()
        ),
        Err(e) => error!("Player setup failed: {}", e),
    }
}
