//! Collection domain: pickup notifications.

use bevy::ecs::message::Message;

use crate::collection::CollectibleKind;

/// An item was picked up; forwarded to the tally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCollectedEvent {
    pub kind: CollectibleKind,
    pub amount: u32,
}

impl Message for ItemCollectedEvent {}

/// Every item of one kind in the level has been collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionCompleteEvent {
    pub kind: CollectibleKind,
}

impl Message for CollectionCompleteEvent {}
