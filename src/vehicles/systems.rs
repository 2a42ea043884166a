//! Vehicles domain: systems driving the mount protocol and vehicle motion.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::GameplaySettings;
use crate::movement::{Locomotion, Player, RiderAnchor};
use crate::vehicles::protocol::{MountRejection, dismount, mount};
use crate::vehicles::{
    DismountEvent, DismountRequest, DismountZone, MountEvent, MountRequest, SpecialAbilityEvent,
    SpecialAbilityRequest, Vehicle,
};

/// Touching an idle vehicle asks to ride it.
pub(crate) fn detect_vehicle_contact(
    mut collision_events: MessageReader<CollisionStart>,
    players: Query<&Locomotion, With<Player>>,
    vehicles: Query<&Vehicle>,
    mut mount_requests: MessageWriter<MountRequest>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, vehicle_entity) in pairs {
            let Ok(locomotion) = players.get(player_entity) else {
                continue;
            };
            let Ok(vehicle) = vehicles.get(vehicle_entity) else {
                continue;
            };

            if locomotion.is_riding() || vehicle.is_mounted() {
                debug!("Touched {} but a mount isn't possible", vehicle.kind);
                continue;
            }

            debug!("Near {} - tap to ride!", vehicle.kind);
            mount_requests.write(MountRequest {
                player: player_entity,
                vehicle: vehicle_entity,
            });
        }
    }
}

/// Riders passing through a dismount zone step off.
pub(crate) fn detect_dismount_zone_contact(
    mut collision_events: MessageReader<CollisionStart>,
    players: Query<&Locomotion, With<Player>>,
    zones: Query<(), With<DismountZone>>,
    mut dismount_requests: MessageWriter<DismountRequest>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, zone_entity) in pairs {
            let Ok(locomotion) = players.get(player_entity) else {
                continue;
            };
            if zones.get(zone_entity).is_err() || !locomotion.is_riding() {
                continue;
            }

            dismount_requests.write(DismountRequest {
                player: player_entity,
            });
        }
    }
}

pub(crate) fn process_mount_requests(
    mut commands: Commands,
    settings: Res<GameplaySettings>,
    mut requests: MessageReader<MountRequest>,
    mut players: Query<&mut Locomotion, With<Player>>,
    mut vehicles: Query<&mut Vehicle>,
    mut mount_events: MessageWriter<MountEvent>,
) {
    for request in requests.read() {
        let Ok(mut locomotion) = players.get_mut(request.player) else {
            continue;
        };
        let Ok(mut vehicle) = vehicles.get_mut(request.vehicle) else {
            continue;
        };

        if !settings.difficulty.vehicles_allowed() {
            debug!("Mount rejected: {:?}", MountRejection::VehiclesDisabled);
            continue;
        }

        match mount(request.player, &mut locomotion, request.vehicle, &mut vehicle) {
            Ok(anchor) => {
                commands.entity(request.player).insert(anchor);
                mount_events.write(MountEvent {
                    player: request.player,
                    vehicle: request.vehicle,
                    kind: vehicle.kind,
                });
                info!("Mounted {} ({})", vehicle.kind, vehicle.summary());
            }
            Err(reason) => debug!("Mount rejected: {:?}", reason),
        }
    }
}

pub(crate) fn process_dismount_requests(
    mut commands: Commands,
    mut requests: MessageReader<DismountRequest>,
    mut players: Query<&mut Locomotion, With<Player>>,
    mut vehicles: Query<&mut Vehicle>,
    mut dismount_events: MessageWriter<DismountEvent>,
) {
    for request in requests.read() {
        let Ok(mut locomotion) = players.get_mut(request.player) else {
            continue;
        };
        let Some(vehicle_entity) = locomotion.mounted_vehicle() else {
            continue;
        };

        let vehicle = vehicles.get_mut(vehicle_entity).ok();
        let kind = vehicle.as_ref().map(|v| v.kind);

        if let Some(left) = dismount(
            request.player,
            &mut locomotion,
            vehicle.map(|v| v.into_inner()),
        ) {
            commands.entity(request.player).remove::<RiderAnchor>();
            dismount_events.write(DismountEvent {
                player: request.player,
                vehicle: left,
            });
            match kind {
                Some(kind) => info!("Dismounted {}", kind),
                None => info!("Dismounted missing vehicle {:?}", left),
            }
        }
    }
}

/// Release riders whose vehicle was despawned (level teardown).
pub(crate) fn release_orphaned_riders(
    players: Query<(Entity, &Locomotion), With<Player>>,
    vehicles: Query<(), With<Vehicle>>,
    mut dismount_requests: MessageWriter<DismountRequest>,
) {
    for (entity, locomotion) in &players {
        if let Some(vehicle) = locomotion.mounted_vehicle()
            && vehicles.get(vehicle).is_err()
        {
            warn!("Vehicle {:?} vanished under its rider", vehicle);
            dismount_requests.write(DismountRequest { player: entity });
        }
    }
}

pub(crate) fn process_special_ability_requests(
    time: Res<Time>,
    mut requests: MessageReader<SpecialAbilityRequest>,
    mut vehicles: Query<&mut Vehicle>,
    mut ability_events: MessageWriter<SpecialAbilityEvent>,
) {
    let now = time.elapsed();

    for request in requests.read() {
        let Ok(mut vehicle) = vehicles.get_mut(request.vehicle) else {
            continue;
        };

        if let Some(ability) = vehicle.try_special_ability(now) {
            ability_events.write(SpecialAbilityEvent {
                vehicle: request.vehicle,
                ability,
            });
            debug!("{} special ability: {:?}", vehicle.kind, ability);
        }
    }
}

/// Mounted vehicles drive forward; idle ones stay put.
pub(crate) fn drive_vehicles(mut vehicles: Query<(&Vehicle, &mut LinearVelocity), Without<Player>>) {
    for (vehicle, mut velocity) in &mut vehicles {
        velocity.x = if vehicle.is_mounted() {
            vehicle.current_speed
        } else {
            0.0
        };
        velocity.y = 0.0;
    }
}

/// Pin each rider to its vehicle's seat.
pub(crate) fn sync_rider_positions(
    vehicles: Query<&Transform, (With<Vehicle>, Without<Player>)>,
    mut riders: Query<(&RiderAnchor, &mut Transform), With<Player>>,
) {
    for (anchor, mut transform) in &mut riders {
        let Ok(vehicle_transform) = vehicles.get(anchor.vehicle) else {
            continue;
        };

        let seat = vehicle_transform.translation.truncate() + anchor.offset;
        transform.translation.x = seat.x;
        transform.translation.y = seat.y;
    }
}
