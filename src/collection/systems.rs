//! Collection domain: pickup detection and the relay to the tally.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::collection::{Collectible, CollectionCompleteEvent, CollectionTally, ItemCollectedEvent};
use crate::movement::Player;

/// Player contact collects an item exactly once, then despawns it.
pub(crate) fn detect_collectible_contact(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    players: Query<(), With<Player>>,
    mut collectibles: Query<&mut Collectible>,
    mut collected_events: MessageWriter<ItemCollectedEvent>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, item_entity) in pairs {
            if players.get(player_entity).is_err() {
                continue;
            }
            let Ok(mut collectible) = collectibles.get_mut(item_entity) else {
                continue;
            };

            if !collectible.collect() {
                continue;
            }

            collected_events.write(ItemCollectedEvent {
                kind: collectible.kind,
                amount: collectible.value,
            });
            commands.entity(item_entity).despawn();
        }
    }
}

pub(crate) fn relay_to_tally(
    mut collected_events: MessageReader<ItemCollectedEvent>,
    mut tally: ResMut<CollectionTally>,
    mut complete_events: MessageWriter<CollectionCompleteEvent>,
) {
    for event in collected_events.read() {
        let completed = tally.collect(event.kind, event.amount);
        debug!(
            "Collected {}! Total: {} (lifetime {})",
            event.kind,
            tally.count(event.kind),
            tally.lifetime_count(event.kind)
        );

        if completed {
            complete_events.write(CollectionCompleteEvent { kind: event.kind });
            info!("All {}s collected! {}", event.kind, tally.session_summary());

            if tally.is_perfect_run() {
                info!(
                    "Perfect run: {:.0}% collected",
                    tally.completion_percentage()
                );
            }
        }
    }
}
