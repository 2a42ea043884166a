//! Movement domain: locomotion events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted when a jump is authorized and applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpEvent {
    pub player: Entity,
    pub double_jump: bool,
}

impl Message for JumpEvent {}

/// Emitted on the airborne -> grounded edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandEvent {
    pub player: Entity,
}

impl Message for LandEvent {}

/// External request to enter or leave tiptoe mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetTiptoeEvent {
    pub player: Entity,
    pub enabled: bool,
}

impl Message for SetTiptoeEvent {}
