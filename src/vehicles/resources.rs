//! Vehicles domain: data-driven vehicle definitions.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vehicles::VehicleKind;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VehicleDef {
    pub kind: VehicleKind,
    pub speed_multiplier: f32,
    pub jump_multiplier: f32,
    pub special_ability_cooldown: f32,
    /// Height above the vehicle centre where the rider sits
    pub rider_height: f32,
}

impl VehicleDef {
    pub fn fallback(kind: VehicleKind) -> Self {
        Self {
            kind,
            speed_multiplier: 1.5,
            jump_multiplier: 1.33,
            special_ability_cooldown: 1.0,
            rider_height: 30.0,
        }
    }

    pub fn rider_offset(&self) -> Vec2 {
        Vec2::new(0.0, self.rider_height)
    }
}

/// Vehicle definitions keyed by kind, loaded from content.
#[derive(Resource, Debug, Clone)]
pub struct VehicleCatalog {
    pub defs: Vec<VehicleDef>,
}

impl Default for VehicleCatalog {
    fn default() -> Self {
        Self {
            defs: vec![
                VehicleDef::fallback(VehicleKind::ToyCar),
                VehicleDef {
                    speed_multiplier: 1.25,
                    jump_multiplier: 1.2,
                    ..VehicleDef::fallback(VehicleKind::Scooter)
                },
            ],
        }
    }
}

impl VehicleCatalog {
    pub fn def_for(&self, kind: VehicleKind) -> VehicleDef {
        self.defs
            .iter()
            .find(|def| def.kind == kind)
            .cloned()
            .unwrap_or_else(|| {
                warn!("No vehicle definition for {}, using fallback", kind);
                VehicleDef::fallback(kind)
            })
    }
}
