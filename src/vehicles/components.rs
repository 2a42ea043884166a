//! Vehicles domain: vehicle components and per-vehicle state.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::vehicles::VehicleDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum VehicleKind {
    ToyCar,
    Scooter,
}

impl VehicleKind {
    pub fn ability(self) -> SpecialAbility {
        match self {
            VehicleKind::ToyCar => SpecialAbility::Horn,
            VehicleKind::Scooter => SpecialAbility::Bell,
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleKind::ToyCar => write!(f, "ToyCar"),
            VehicleKind::Scooter => write!(f, "Scooter"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialAbility {
    Horn,
    Bell,
}

impl SpecialAbility {
    pub fn sound_name(self) -> &'static str {
        match self {
            SpecialAbility::Horn => "Horn",
            SpecialAbility::Bell => "Bell",
        }
    }
}

/// A ride-on vehicle. Idle while `rider` is `None`, mounted otherwise.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub kind: VehicleKind,
    pub speed_multiplier: f32,
    /// Reported in the stats summary
    pub jump_multiplier: f32,
    /// base walk speed * speed multiplier, fixed at spawn
    pub current_speed: f32,
    pub rider_offset: Vec2,
    pub special_ability_cooldown: Duration,
    /// Elapsed game time of the last fired ability
    pub last_special_ability_use: Option<Duration>,
    pub(crate) rider: Option<Entity>,
}

impl Vehicle {
    pub fn new(def: &VehicleDef, base_walk_speed: f32) -> Self {
        Self {
            kind: def.kind,
            speed_multiplier: def.speed_multiplier,
            jump_multiplier: def.jump_multiplier,
            current_speed: base_walk_speed * def.speed_multiplier,
            rider_offset: def.rider_offset(),
            special_ability_cooldown: Duration::try_from_secs_f32(def.special_ability_cooldown)
                .unwrap_or(Duration::ZERO),
            last_special_ability_use: None,
            rider: None,
        }
    }

    pub fn rider(&self) -> Option<Entity> {
        self.rider
    }

    pub fn is_mounted(&self) -> bool {
        self.rider.is_some()
    }

    /// Fire the ability if a rider is aboard and the cooldown has elapsed.
    /// Calls during cooldown are dropped, not queued.
    pub fn try_special_ability(&mut self, now: Duration) -> Option<SpecialAbility> {
        if !self.is_mounted() {
            return None;
        }

        if let Some(last) = self.last_special_ability_use
            && now.saturating_sub(last) < self.special_ability_cooldown
        {
            return None;
        }

        self.last_special_ability_use = Some(now);
        Some(self.kind.ability())
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: Speed x{}, Jump x{}",
            self.kind, self.speed_multiplier, self.jump_multiplier
        )
    }
}

/// Trigger volume that ends a ride when the rider passes through it.
#[derive(Component, Debug, Default)]
pub struct DismountZone;
