//! Content domain: data-driven tuning loaded from `assets/data/tuning.ron`.

mod data;
mod loader;
mod validation;


pub use loader::{load_tuning_file, parse_tuning};
pub use validation::validate_tuning;

use bevy::prelude::*;
use std::path::Path;

use crate::collection::CollectionTally;
use crate::core::GameplaySettings;
use crate::movement::MovementTuning;
use crate::vehicles::VehicleCatalog;

pub const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // PreStartup so tuning is in place before anything spawns
        app.add_systems(PreStartup, load_content);
    }
}

fn load_content(
    mut movement: ResMut<MovementTuning>,
    mut catalog: ResMut<VehicleCatalog>,
    mut tally: ResMut<CollectionTally>,
    mut settings: ResMut<GameplaySettings>,
) {
    let file = match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(file) => file,
        Err(e) => {
            warn!("{}; using built-in tuning", e);
            return;
        }
    };

    let errors = validate_tuning(&file);
    if !errors.is_empty() {
        for error in &errors {
            error!("Tuning validation: {}", error);
        }
        warn!("Tuning rejected with {} error(s); using built-in tuning", errors.len());
        return;
    }

    info!(
        "Loaded tuning v{}: walk_speed={}, {} vehicle(s)",
        file.schema_version,
        file.movement.walk_speed,
        file.vehicles.len()
    );

    *movement = file.movement;
    if !file.vehicles.is_empty() {
        catalog.defs = file.vehicles;
    }
    *tally = CollectionTally::new(file.collection);
    *settings = file.settings;
}
