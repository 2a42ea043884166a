//! Collection domain: collectibles and the score tally they feed.

mod components;
mod events;
mod resources;
mod spawn;
mod systems;


pub use components::{Collectible, CollectibleKind};
pub use events::{CollectionCompleteEvent, ItemCollectedEvent};
pub use resources::{CollectionTally, LevelCollectionTargets};
pub use spawn::spawn_collectible;

use bevy::prelude::*;

use crate::collection::systems::{detect_collectible_contact, relay_to_tally};
use crate::core::gameplay_active;

pub struct CollectionPlugin;

impl Plugin for CollectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollectionTally>()
            .add_message::<ItemCollectedEvent>()
            .add_message::<CollectionCompleteEvent>()
            .add_systems(
                Update,
                (detect_collectible_contact, relay_to_tally)
                    .chain()
                    .run_if(gameplay_active),
            );
    }
}
