//! Audio domain: fire-and-forget sound cues.

use bevy::ecs::message::Message;

/// Play a sound effect by symbolic name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySfxEvent {
    pub name: &'static str,
}

impl Message for PlaySfxEvent {}
