//! Vehicles domain: spawning scene-placed vehicles.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::vehicles::{DismountZone, Vehicle, VehicleDef, VehicleKind};

const VEHICLE_SIZE: Vec2 = Vec2::new(56.0, 28.0);

pub fn spawn_vehicle(
    commands: &mut Commands,
    def: &VehicleDef,
    base_walk_speed: f32,
    position: Vec2,
) -> Entity {
    let vehicle = Vehicle::new(def, base_walk_speed);
    let color = match def.kind {
        VehicleKind::ToyCar => Color::srgb(0.9, 0.3, 0.3),
        VehicleKind::Scooter => Color::srgb(0.3, 0.6, 0.95),
    };

    info!(
        "Spawning {} at {}: current_speed={}",
        def.kind, position, vehicle.current_speed
    );

    commands
        .spawn((
            vehicle,
            Sprite {
                color,
                custom_size: Some(VEHICLE_SIZE),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.5),
            // Physics: a kinematic mount trigger that never blocks the player
            (
                RigidBody::Kinematic,
                Collider::rectangle(VEHICLE_SIZE.x, VEHICLE_SIZE.y),
                Sensor,
                LinearVelocity::default(),
                CollisionLayers::new(GameLayer::Vehicle, [GameLayer::Player]),
            ),
        ))
        .id()
}

pub fn spawn_dismount_zone(commands: &mut Commands, position: Vec2, size: Vec2) -> Entity {
    commands
        .spawn((
            DismountZone,
            Sprite {
                color: Color::srgba(1.0, 1.0, 1.0, 0.15),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.1),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionLayers::new(GameLayer::Vehicle, [GameLayer::Player]),
        ))
        .id()
}
