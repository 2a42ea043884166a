//! Collection domain: spawning scene-placed pickups.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::collection::{Collectible, CollectibleKind};
use crate::movement::GameLayer;

const PICKUP_RADIUS: f32 = 10.0;

pub fn spawn_collectible(
    commands: &mut Commands,
    kind: CollectibleKind,
    value: u32,
    position: Vec2,
) -> Entity {
    let color = match kind {
        CollectibleKind::Star => Color::srgb(1.0, 0.9, 0.2),
        CollectibleKind::Cookie => Color::srgb(0.75, 0.5, 0.25),
        CollectibleKind::Heart => Color::srgb(0.95, 0.35, 0.55),
    };

    commands
        .spawn((
            Collectible::new(kind, value),
            Sprite {
                color,
                custom_size: Some(Vec2::splat(PICKUP_RADIUS * 2.0)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.25),
            RigidBody::Static,
            Collider::circle(PICKUP_RADIUS),
            Sensor,
            CollisionLayers::new(GameLayer::Collectible, [GameLayer::Player]),
        ))
        .id()
}
