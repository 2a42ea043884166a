//! Level domain: the playable demo stretch the player auto-walks across.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::collection::{
    CollectibleKind, CollectionTally, LevelCollectionTargets, spawn_collectible,
};
use crate::movement::{GameLayer, Ground, MovementTuning};
use crate::vehicles::{VehicleCatalog, VehicleKind, spawn_dismount_zone, spawn_vehicle};


const GROUND_TOP: f32 = -180.0;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_demo_level);
    }
}

/// Every pickup placed in the demo stretch, each worth one.
pub(crate) fn demo_pickups() -> Vec<(CollectibleKind, Vec2)> {
    let mut pickups: Vec<_> = (0..12)
        .map(|i| {
            (
                CollectibleKind::Star,
                Vec2::new(-150.0 + i as f32 * 120.0, GROUND_TOP + 40.0),
            )
        })
        .collect();
    for x in [300.0, 1500.0, 3000.0] {
        pickups.push((CollectibleKind::Cookie, Vec2::new(x, 20.0)));
    }
    pickups.push((CollectibleKind::Heart, Vec2::new(900.0, 80.0)));
    pickups
}

pub(crate) fn pickup_totals(pickups: &[(CollectibleKind, Vec2)]) -> LevelCollectionTargets {
    let count = |kind| pickups.iter().filter(|(k, _)| *k == kind).count() as u32;
    LevelCollectionTargets {
        stars: count(CollectibleKind::Star),
        cookies: count(CollectibleKind::Cookie),
        hearts: count(CollectibleKind::Heart),
    }
}

fn spawn_ground(commands: &mut Commands, center: Vec2, size: Vec2, color: Color) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

fn spawn_demo_level(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    catalog: Res<VehicleCatalog>,
    mut tally: ResMut<CollectionTally>,
) {
    tally.reset_session();

    let ground_color = Color::srgb(0.45, 0.7, 0.4);
    let platform_color = Color::srgb(0.6, 0.45, 0.3);

    // Long floor, then a gap the player has to jump
    spawn_ground(
        &mut commands,
        Vec2::new(1000.0, GROUND_TOP - 20.0),
        Vec2::new(2800.0, 40.0),
        ground_color,
    );
    spawn_ground(
        &mut commands,
        Vec2::new(3700.0, GROUND_TOP - 20.0),
        Vec2::new(2400.0, 40.0),
        ground_color,
    );

    for (x, y) in [(300.0, -60.0), (900.0, 0.0), (1500.0, -60.0), (3000.0, -40.0)] {
        spawn_ground(
            &mut commands,
            Vec2::new(x, y),
            Vec2::new(160.0, 20.0),
            platform_color,
        );
    }

    // Vehicles sit on the floor
    let vehicle_y = GROUND_TOP + 14.0;
    for (kind, x) in [(VehicleKind::ToyCar, 600.0), (VehicleKind::Scooter, 3300.0)] {
        let def = catalog.def_for(kind);
        spawn_vehicle(&mut commands, &def, tuning.walk_speed, Vec2::new(x, vehicle_y));
    }

    // Step off before the gap and before the end; vehicles don't jump
    for x in [2300.0, 4700.0] {
        spawn_dismount_zone(
            &mut commands,
            Vec2::new(x, GROUND_TOP + 40.0),
            Vec2::new(40.0, 120.0),
        );
    }

    let pickups = demo_pickups();
    for &(kind, position) in &pickups {
        spawn_collectible(&mut commands, kind, 1, position);
    }

    let layout = pickup_totals(&pickups);
    if layout != tally.targets {
        warn!(
            "Level targets {:?} don't match the {:?} pickups placed",
            tally.targets, layout
        );
    }

    info!("Spawned demo level with {} collectibles", pickups.len());
}
