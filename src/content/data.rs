//! Content domain: the tuning file schema.

use serde::{Deserialize, Serialize};

use crate::collection::LevelCollectionTargets;
use crate::core::GameplaySettings;
use crate::movement::MovementTuning;
use crate::vehicles::VehicleDef;

// ============================================================================
// Tuning (tuning.ron) - Single struct, not a list
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    #[serde(default)]
    pub movement: MovementTuning,
    #[serde(default)]
    pub vehicles: Vec<VehicleDef>,
    #[serde(default)]
    pub collection: LevelCollectionTargets,
    #[serde(default)]
    pub settings: GameplaySettings,
}
