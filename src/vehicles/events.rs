//! Vehicles domain: mount protocol requests and notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::vehicles::{SpecialAbility, VehicleKind};

/// Ask for `player` to climb onto `vehicle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountRequest {
    pub player: Entity,
    pub vehicle: Entity,
}

impl Message for MountRequest {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismountRequest {
    pub player: Entity,
}

impl Message for DismountRequest {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialAbilityRequest {
    pub vehicle: Entity,
}

impl Message for SpecialAbilityRequest {}

/// A mount was granted. Carries both sides of the handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountEvent {
    pub player: Entity,
    pub vehicle: Entity,
    pub kind: VehicleKind,
}

impl Message for MountEvent {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismountEvent {
    pub player: Entity,
    pub vehicle: Entity,
}

impl Message for DismountEvent {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialAbilityEvent {
    pub vehicle: Entity,
    pub ability: SpecialAbility,
}

impl Message for SpecialAbilityEvent {}
