//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{GroundSensor, SetupError};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Auto-walk speed; vehicles multiply this
    pub walk_speed: f32,
    pub tiptoe_speed_factor: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub allow_double_jump: bool,
    /// Vertical speed at or below which a grounded jump counts as landed
    pub landing_epsilon: f32,
    /// Sensor circle sits this far below the body centre
    pub ground_check_depth: f32,
    pub ground_check_radius: f32,
    pub body_width: f32,
    pub body_height: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 120.0,
            tiptoe_speed_factor: 0.5,
            jump_velocity: 520.0,
            gravity: 1400.0,
            coyote_time: 0.2,
            jump_buffer_time: 0.2,
            allow_double_jump: true,
            landing_epsilon: 0.1,
            ground_check_depth: 24.0,
            ground_check_radius: 6.0,
            body_width: 24.0,
            body_height: 48.0,
        }
    }
}

impl MovementTuning {
    /// Reject values that would break the timing windows or physics.
    pub fn validate(&self) -> Result<(), SetupError> {
        let positive = [
            ("walk_speed", self.walk_speed),
            ("jump_velocity", self.jump_velocity),
            ("gravity", self.gravity),
            ("coyote_time", self.coyote_time),
            ("jump_buffer_time", self.jump_buffer_time),
            ("body_width", self.body_width),
            ("body_height", self.body_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SetupError::InvalidTuning { field, value });
            }
        }

        let non_negative = [
            ("landing_epsilon", self.landing_epsilon),
            ("ground_check_depth", self.ground_check_depth),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SetupError::InvalidTuning { field, value });
            }
        }

        if !(self.tiptoe_speed_factor > 0.0 && self.tiptoe_speed_factor <= 1.0) {
            return Err(SetupError::InvalidTuning {
                field: "tiptoe_speed_factor",
                value: self.tiptoe_speed_factor,
            });
        }

        // The sensor is built from these same fields at spawn
        GroundSensor::new(self.ground_check_offset(), self.ground_check_radius)?;

        Ok(())
    }

    pub fn ground_check_offset(&self) -> Vec2 {
        Vec2::new(0.0, -self.ground_check_depth)
    }

    pub fn body_size(&self) -> Vec2 {
        Vec2::new(self.body_width, self.body_height)
    }

    /// Peak height of a single jump: h = v^2 / (2g)
    pub fn single_jump_height(&self) -> f32 {
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }
}

/// Latched tap edge. Set by input sampling every frame and consumed by the
/// next fixed tick so a tap is never lost between fixed steps.
#[derive(Resource, Debug, Default)]
pub struct TapInput {
    pending: bool,
}

impl TapInput {
    pub fn register_tap(&mut self) {
        self.pending = true;
    }

    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
