//! Vehicles domain: ride-on vehicles, the mount protocol and special
//! abilities.

mod components;
mod events;
mod protocol;
mod resources;
mod spawn;
mod systems;


pub use components::{DismountZone, SpecialAbility, Vehicle, VehicleKind};
pub use events::{
    DismountEvent, DismountRequest, MountEvent, MountRequest, SpecialAbilityEvent,
    SpecialAbilityRequest,
};
pub use protocol::{MountRejection, dismount, mount};
pub use resources::{VehicleCatalog, VehicleDef};
pub use spawn::{spawn_dismount_zone, spawn_vehicle};

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::LocomotionSet;
use crate::vehicles::systems::{
    detect_dismount_zone_contact, detect_vehicle_contact, drive_vehicles,
    process_dismount_requests, process_mount_requests, process_special_ability_requests,
    release_orphaned_riders, sync_rider_positions,
};

pub struct VehiclesPlugin;

impl Plugin for VehiclesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VehicleCatalog>()
            .add_message::<MountRequest>()
            .add_message::<DismountRequest>()
            .add_message::<SpecialAbilityRequest>()
            .add_message::<MountEvent>()
            .add_message::<DismountEvent>()
            .add_message::<SpecialAbilityEvent>()
            .add_systems(FixedUpdate, drive_vehicles.in_set(LocomotionSet::Apply))
            .add_systems(
                Update,
                (
                    detect_vehicle_contact,
                    detect_dismount_zone_contact,
                    release_orphaned_riders,
                    process_mount_requests,
                    process_dismount_requests,
                    process_special_ability_requests,
                    sync_rider_positions,
                )
                    .chain()
                    .run_if(gameplay_active),
            );
    }
}
