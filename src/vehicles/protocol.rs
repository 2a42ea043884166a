//! Vehicles domain: the mount/dismount handshake.
//!
//! Both sides gate on their own half of the link, so a single check of
//! `player not riding && vehicle has no rider` is enough to keep the pair
//! mutually consistent on the single-threaded schedule.

use bevy::prelude::*;

use crate::movement::{Locomotion, RiderAnchor};
use crate::vehicles::Vehicle;

/// Why a mount request was turned into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountRejection {
    PlayerAlreadyRiding,
    VehicleOccupied,
    VehiclesDisabled,
}

/// Link `player` and `vehicle`. On success the returned anchor must be
/// attached to the player so its position follows the vehicle.
pub fn mount(
    player: Entity,
    locomotion: &mut Locomotion,
    vehicle_entity: Entity,
    vehicle: &mut Vehicle,
) -> Result<RiderAnchor, MountRejection> {
    if locomotion.is_riding() {
        return Err(MountRejection::PlayerAlreadyRiding);
    }
    if vehicle.is_mounted() {
        return Err(MountRejection::VehicleOccupied);
    }

    locomotion.enter_vehicle(vehicle_entity);
    vehicle.rider = Some(player);

    Ok(RiderAnchor {
        vehicle: vehicle_entity,
        offset: vehicle.rider_offset,
    })
}

/// Unlink the player from its vehicle. Returns the vehicle that was left,
/// or `None` if the player wasn't riding.
///
/// `vehicle` may be `None` when the vehicle was despawned underneath the
/// rider; the player side is still released.
pub fn dismount(
    player: Entity,
    locomotion: &mut Locomotion,
    vehicle: Option<&mut Vehicle>,
) -> Option<Entity> {
    let vehicle_entity = locomotion.mounted_vehicle()?;

    if let Some(vehicle) = vehicle
        && vehicle.rider == Some(player)
    {
        vehicle.rider = None;
    }

    locomotion.leave_vehicle();
    Some(vehicle_entity)
}
