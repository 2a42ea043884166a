//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_tap_input;
pub(crate) use movement::{
    apply_gravity, apply_horizontal_movement, apply_tiptoe_requests, arbitrate_jump,
    publish_signals, resolve_landing, update_timers,
};
