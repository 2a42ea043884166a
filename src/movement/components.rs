//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::MovementTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Ride-on vehicles (mount triggers)
    Vehicle,
    /// Stars, cookies and hearts
    Collectible,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Player locomotion state. The mounted vehicle lives inside the riding
/// variant so a rider without a vehicle can't be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionState {
    #[default]
    Walking,
    Jumping,
    RidingVehicle {
        vehicle: Entity,
    },
    Tiptoeing,
}

#[derive(Component, Debug, Clone)]
pub struct Locomotion {
    pub state: LocomotionState,
    pub walk_speed: f32,
    pub current_speed: f32,
    pub tiptoe_factor: f32,
}

impl Locomotion {
    pub fn new(walk_speed: f32, tiptoe_factor: f32) -> Self {
        Self {
            state: LocomotionState::Walking,
            walk_speed,
            current_speed: walk_speed,
            tiptoe_factor,
        }
    }

    pub fn from_tuning(tuning: &MovementTuning) -> Self {
        Self::new(tuning.walk_speed, tuning.tiptoe_speed_factor)
    }

    pub fn mounted_vehicle(&self) -> Option<Entity> {
        match self.state {
            LocomotionState::RidingVehicle { vehicle } => Some(vehicle),
            _ => None,
        }
    }

    pub fn is_riding(&self) -> bool {
        self.mounted_vehicle().is_some()
    }

    pub fn is_jumping(&self) -> bool {
        self.state == LocomotionState::Jumping
    }

    /// Horizontal speed for this tick. Riders take the vehicle's speed.
    pub fn effective_speed(&self, vehicle_speed: Option<f32>) -> f32 {
        match (self.state, vehicle_speed) {
            (LocomotionState::RidingVehicle { .. }, Some(speed)) => speed,
            _ => self.current_speed,
        }
    }

    /// Enter or leave tiptoe mode. Returns true if the state changed.
    pub fn set_tiptoe(&mut self, enabled: bool) -> bool {
        match (self.state, enabled) {
            (LocomotionState::Walking, true) => {
                self.state = LocomotionState::Tiptoeing;
                self.current_speed = self.walk_speed * self.tiptoe_factor;
                true
            }
            (LocomotionState::Tiptoeing, false) => {
                self.state = LocomotionState::Walking;
                self.current_speed = self.walk_speed;
                true
            }
            _ => false,
        }
    }

    pub fn begin_jump(&mut self) {
        self.state = LocomotionState::Jumping;
    }

    /// Jumping -> Walking once the body is grounded and no longer rising.
    /// The epsilon keeps the apex/landing frame from flickering.
    pub fn resolve_landing(&mut self, grounded: bool, vertical_velocity: f32, epsilon: f32) -> bool {
        if self.is_jumping() && grounded && vertical_velocity <= epsilon {
            self.state = LocomotionState::Walking;
            self.current_speed = self.walk_speed;
            return true;
        }
        false
    }

    pub(crate) fn enter_vehicle(&mut self, vehicle: Entity) {
        self.state = LocomotionState::RidingVehicle { vehicle };
    }

    pub(crate) fn leave_vehicle(&mut self) {
        self.state = LocomotionState::Walking;
        self.current_speed = self.walk_speed;
    }
}

/// Result of feeding one sensor reading into the jump state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    Landed,
    LeftGround,
    Unchanged,
}

/// Outcome of a single arbitration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Double,
}

impl JumpKind {
    pub fn is_double(self) -> bool {
        matches!(self, JumpKind::Double)
    }
}

/// Coyote-time, jump-buffer and double-jump bookkeeping for one body.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct JumpState {
    pub on_ground: bool,
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
    pub can_double_jump: bool,
}

impl JumpState {
    /// Record this tick's sensor reading and refresh the coyote window.
    pub fn sense_ground(&mut self, grounded: bool, tuning: &MovementTuning) -> GroundTransition {
        let was_on_ground = self.on_ground;
        self.on_ground = grounded;

        if grounded {
            self.coyote_timer = tuning.coyote_time;
        }

        match (was_on_ground, grounded) {
            (false, true) => {
                self.can_double_jump = tuning.allow_double_jump;
                GroundTransition::Landed
            }
            (true, false) => GroundTransition::LeftGround,
            _ => GroundTransition::Unchanged,
        }
    }

    /// Decay the airborne coyote window and the jump buffer.
    pub fn tick(&mut self, dt: f32) {
        if !self.on_ground {
            self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        }
        self.jump_buffer_timer = (self.jump_buffer_timer - dt).max(0.0);
    }

    pub fn buffer_tap(&mut self, tuning: &MovementTuning) {
        self.jump_buffer_timer = tuning.jump_buffer_time;
    }

    pub fn wants_jump(&self) -> bool {
        self.jump_buffer_timer > 0.0
    }

    /// Authorize and consume a jump. Coyote time takes priority, so a
    /// double jump is only spent once the grace window is gone.
    pub fn try_jump(&mut self) -> Option<JumpKind> {
        let kind = if self.coyote_timer > 0.0 {
            JumpKind::Ground
        } else if self.can_double_jump && !self.on_ground {
            self.can_double_jump = false;
            JumpKind::Double
        } else {
            return None;
        };

        self.coyote_timer = 0.0;
        self.jump_buffer_timer = 0.0;
        Some(kind)
    }
}

/// Circle overlap probe placed at the body's feet.
#[derive(Component, Debug, Clone)]
pub struct GroundSensor {
    pub offset: Vec2,
    pub radius: f32,
    shape: Collider,
}

impl GroundSensor {
    pub fn new(offset: Vec2, radius: f32) -> Result<Self, SetupError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SetupError::InvalidGroundSensor {
                reason: format!("radius must be positive, got {radius}"),
            });
        }
        if !offset.is_finite() {
            return Err(SetupError::InvalidGroundSensor {
                reason: format!("offset must be finite, got {offset}"),
            });
        }

        Ok(Self {
            offset,
            radius,
            shape: Collider::circle(radius),
        })
    }

    pub fn origin(&self, body_position: Vec2) -> Vec2 {
        body_position + self.offset
    }

    /// Returns true if the probe circle overlaps anything on the ground layer.
    pub fn probe(&self, spatial_query: &SpatialQuery, body_position: Vec2) -> bool {
        let filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
        !spatial_query
            .shape_intersections(&self.shape, self.origin(body_position), 0.0, &filter)
            .is_empty()
    }
}

/// Read-only signals published for animation each frame.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct LocomotionSignals {
    pub speed: f32,
    pub grounded: bool,
    pub riding: bool,
}

/// Positional dependency on a vehicle while riding.
#[derive(Component, Debug, Clone, Copy)]
pub struct RiderAnchor {
    pub vehicle: Entity,
    pub offset: Vec2,
}

/// Configuration errors detected while setting up an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    InvalidGroundSensor { reason: String },
    InvalidTuning { field: &'static str, value: f32 },
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::InvalidGroundSensor { reason } => {
                write!(f, "Invalid ground sensor: {}", reason)
            }
            SetupError::InvalidTuning { field, value } => {
                write!(f, "Invalid tuning value for {}: {}", field, value)
            }
        }
    }
}

impl std::error::Error for SetupError {}
