//! Movement domain: tests for jump arbitration and the locomotion state
//! machine.

use avian2d::prelude::LinearVelocity;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use std::time::Duration;

use super::systems::{
    apply_gravity, apply_tiptoe_requests, arbitrate_jump, publish_signals, update_timers,
};
use super::{
    GroundSensor, GroundTransition, JumpEvent, JumpKind, JumpState, Locomotion,
    LocomotionSignals, LocomotionState, MovementTuning, Player, SetTiptoeEvent, SetupError,
    TapInput, spawn_player,
};
use crate::vehicles::SpecialAbilityRequest;

const DT: f32 = 1.0 / 64.0;

fn tuning() -> MovementTuning {
    MovementTuning {
        walk_speed: 2.0,
        coyote_time: 0.2,
        jump_buffer_time: 0.2,
        ..default()
    }
}

/// Drives a `JumpState` through the fixed-tick order: sense, decay, tap,
/// arbitrate.
struct Sim {
    tuning: MovementTuning,
    jump: JumpState,
    locomotion: Locomotion,
}

impl Sim {
    fn grounded() -> Self {
        let tuning = tuning();
        let mut jump = JumpState::default();
        jump.sense_ground(true, &tuning);
        Self {
            locomotion: Locomotion::from_tuning(&tuning),
            jump,
            tuning,
        }
    }

    fn step(&mut self, grounded: bool, tapped: bool) -> (GroundTransition, Option<JumpKind>) {
        let transition = self.jump.sense_ground(grounded, &self.tuning);
        self.jump.tick(DT);
        if tapped {
            self.jump.buffer_tap(&self.tuning);
        }
        let jumped = if self.jump.wants_jump() {
            self.jump.try_jump()
        } else {
            None
        };
        if jumped.is_some() {
            self.locomotion.begin_jump();
        }
        (transition, jumped)
    }
}

// -----------------------------------------------------------------------------
// Ground sensing
// -----------------------------------------------------------------------------

#[test]
fn test_landing_rearms_double_jump_once() {
    let tuning = tuning();
    let mut jump = JumpState::default();

    assert_eq!(jump.sense_ground(true, &tuning), GroundTransition::Landed);
    assert!(jump.can_double_jump);

    jump.can_double_jump = false;
    assert_eq!(jump.sense_ground(true, &tuning), GroundTransition::Unchanged);
    assert!(!jump.can_double_jump, "only the rising edge re-arms");
}

#[test]
fn test_landing_respects_double_jump_toggle() {
    let tuning = MovementTuning {
        allow_double_jump: false,
        ..tuning()
    };
    let mut jump = JumpState::default();
    jump.sense_ground(true, &tuning);
    assert!(!jump.can_double_jump);
}

#[test]
fn test_coyote_refills_on_ground_and_decays_in_air() {
    let tuning = tuning();
    let mut jump = JumpState::default();

    jump.sense_ground(true, &tuning);
    jump.tick(0.1);
    assert_eq!(jump.coyote_timer, 0.2, "grounded bodies keep a full window");

    assert_eq!(jump.sense_ground(false, &tuning), GroundTransition::LeftGround);
    jump.tick(0.05);
    assert!((jump.coyote_timer - 0.15).abs() < 1e-6);

    jump.tick(1.0);
    assert_eq!(jump.coyote_timer, 0.0, "floored at zero");
}

#[test]
fn test_jump_buffer_decays_regardless_of_ground() {
    let tuning = tuning();
    let mut jump = JumpState::default();
    jump.sense_ground(true, &tuning);
    jump.buffer_tap(&tuning);

    jump.tick(0.15);
    assert!(jump.wants_jump());
    jump.tick(0.15);
    assert!(!jump.wants_jump());
    assert_eq!(jump.jump_buffer_timer, 0.0);
}

#[test]
fn test_ground_sensor_rejects_bad_geometry() {
    assert!(GroundSensor::new(Vec2::new(0.0, -24.0), 6.0).is_ok());

    assert!(matches!(
        GroundSensor::new(Vec2::ZERO, 0.0),
        Err(SetupError::InvalidGroundSensor { .. })
    ));
    assert!(matches!(
        GroundSensor::new(Vec2::ZERO, f32::NAN),
        Err(SetupError::InvalidGroundSensor { .. })
    ));
    assert!(matches!(
        GroundSensor::new(Vec2::new(f32::INFINITY, 0.0), 6.0),
        Err(SetupError::InvalidGroundSensor { .. })
    ));
}

#[test]
fn test_ground_sensor_origin_is_offset_from_body() {
    let sensor = GroundSensor::new(Vec2::new(0.0, -24.0), 6.0).unwrap();
    assert_eq!(sensor.origin(Vec2::new(10.0, 100.0)), Vec2::new(10.0, 76.0));
}

// -----------------------------------------------------------------------------
// Jump arbitration
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_tap_is_regular_jump() {
    let mut sim = Sim::grounded();

    let (_, jumped) = sim.step(true, true);

    assert_eq!(jumped, Some(JumpKind::Ground));
    assert_eq!(sim.locomotion.state, LocomotionState::Jumping);
    assert_eq!(sim.jump.coyote_timer, 0.0);
    assert!(sim.jump.can_double_jump, "regular jump leaves double jump armed");
}

#[test]
fn test_coyote_jump_never_classified_double() {
    let mut sim = Sim::grounded();
    assert!(sim.jump.can_double_jump);

    // Walk off a ledge, tap inside the grace window
    sim.step(false, false);
    sim.step(false, false);
    let (_, jumped) = sim.step(false, true);

    assert_eq!(jumped, Some(JumpKind::Ground));
    assert!(sim.jump.can_double_jump);
}

#[test]
fn test_coyote_window_expires() {
    let mut sim = Sim::grounded();

    // 0.25s airborne is past the 0.2s window; this tap spends the double jump
    for _ in 0..16 {
        sim.step(false, false);
    }
    assert_eq!(sim.jump.coyote_timer, 0.0);

    let (_, jumped) = sim.step(false, true);
    assert_eq!(jumped, Some(JumpKind::Double));
}

#[test]
fn test_one_double_jump_per_airborne_excursion() {
    let mut sim = Sim::grounded();

    assert_eq!(sim.step(true, true).1, Some(JumpKind::Ground));
    assert_eq!(sim.step(false, true).1, Some(JumpKind::Double));
    assert!(!sim.jump.can_double_jump);

    let before = sim.jump.clone();
    let (_, third) = sim.step(false, true);
    assert_eq!(third, None);
    assert_eq!(sim.jump.can_double_jump, before.can_double_jump);
    assert_eq!(sim.jump.coyote_timer, 0.0);
}

#[test]
fn test_double_jump_keeps_coyote_untouched() {
    let mut jump = JumpState {
        on_ground: false,
        coyote_timer: 0.0,
        jump_buffer_timer: 0.2,
        can_double_jump: true,
    };

    assert_eq!(jump.try_jump(), Some(JumpKind::Double));
    assert_eq!(jump.coyote_timer, 0.0);
    assert!(!jump.can_double_jump);
    assert!(!jump.wants_jump(), "a successful jump clears the buffer");
}

#[test]
fn test_unauthorized_jump_changes_nothing() {
    let mut jump = JumpState {
        on_ground: false,
        coyote_timer: 0.0,
        jump_buffer_timer: 0.2,
        can_double_jump: false,
    };
    let before = jump.clone();

    assert_eq!(jump.try_jump(), None);
    assert_eq!(jump, before);
}

#[test]
fn test_buffered_tap_jumps_on_landing() {
    let mut sim = Sim::grounded();
    sim.step(true, true);
    sim.step(false, true); // double jump spent

    // Fall for a while, tap a few ticks before touching down
    for _ in 0..20 {
        sim.step(false, false);
    }
    let (_, early) = sim.step(false, true);
    assert_eq!(early, None);
    assert!(sim.jump.wants_jump());

    sim.step(false, false);
    let (transition, jumped) = sim.step(true, false);

    assert_eq!(transition, GroundTransition::Landed);
    assert_eq!(jumped, Some(JumpKind::Ground));
}

#[test]
fn test_stale_buffer_does_not_jump_on_landing() {
    let mut sim = Sim::grounded();
    sim.step(true, true);
    sim.step(false, true);

    sim.step(false, true);
    // Buffer is 0.2s; stay airborne well past it
    for _ in 0..20 {
        sim.step(false, false);
    }

    let (_, jumped) = sim.step(true, false);
    assert_eq!(jumped, None);
}

#[test]
fn test_jump_land_scenario() {
    let mut sim = Sim::grounded();

    let (_, first) = sim.step(true, true);
    assert_eq!(first, Some(JumpKind::Ground));
    assert_eq!(sim.locomotion.state, LocomotionState::Jumping);
    assert_eq!(sim.jump.coyote_timer, 0.0);

    let (_, second) = sim.step(false, true);
    assert_eq!(second, Some(JumpKind::Double));
    assert!(!sim.jump.can_double_jump);

    let (transition, _) = sim.step(true, false);
    assert_eq!(transition, GroundTransition::Landed);
    assert!(sim.locomotion.resolve_landing(sim.jump.on_ground, 0.0, sim.tuning.landing_epsilon));
    assert_eq!(sim.locomotion.state, LocomotionState::Walking);
    assert!(sim.jump.can_double_jump);
}

// -----------------------------------------------------------------------------
// Locomotion state machine
// -----------------------------------------------------------------------------

#[test]
fn test_landing_waits_for_downward_velocity() {
    let mut locomotion = Locomotion::new(2.0, 0.5);
    locomotion.begin_jump();

    assert!(!locomotion.resolve_landing(true, 5.0, 0.1), "still rising");
    assert!(!locomotion.resolve_landing(false, -3.0, 0.1), "still airborne");
    assert!(locomotion.is_jumping());

    assert!(locomotion.resolve_landing(true, 0.1, 0.1));
    assert_eq!(locomotion.state, LocomotionState::Walking);
}

#[test]
fn test_resolve_landing_only_applies_to_jumping() {
    let mut locomotion = Locomotion::new(2.0, 0.5);
    locomotion.set_tiptoe(true);

    assert!(!locomotion.resolve_landing(true, 0.0, 0.1));
    assert_eq!(locomotion.state, LocomotionState::Tiptoeing);
}

#[test]
fn test_tiptoe_halves_speed_and_back() {
    let mut locomotion = Locomotion::new(2.0, 0.5);

    assert!(locomotion.set_tiptoe(true));
    assert_eq!(locomotion.state, LocomotionState::Tiptoeing);
    assert_eq!(locomotion.effective_speed(None), 1.0);

    assert!(!locomotion.set_tiptoe(true), "already tiptoeing");

    assert!(locomotion.set_tiptoe(false));
    assert_eq!(locomotion.state, LocomotionState::Walking);
    assert_eq!(locomotion.effective_speed(None), 2.0);
}

#[test]
fn test_tiptoe_ignored_while_jumping() {
    let mut locomotion = Locomotion::new(2.0, 0.5);
    locomotion.begin_jump();

    assert!(!locomotion.set_tiptoe(true));
    assert!(locomotion.is_jumping());
    assert_eq!(locomotion.current_speed, 2.0);
}

#[test]
fn test_jump_from_tiptoe_lands_walking_at_full_speed() {
    let mut locomotion = Locomotion::new(2.0, 0.5);
    locomotion.set_tiptoe(true);
    locomotion.begin_jump();

    assert!(locomotion.resolve_landing(true, 0.0, 0.1));
    assert_eq!(locomotion.state, LocomotionState::Walking);
    assert_eq!(locomotion.current_speed, 2.0);
}

// -----------------------------------------------------------------------------
// Tuning & input
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert_eq!(MovementTuning::default().validate(), Ok(()));
}

#[test]
fn test_tuning_validation_names_field() {
    let bad = MovementTuning {
        coyote_time: 0.0,
        ..default()
    };
    assert_eq!(
        bad.validate(),
        Err(SetupError::InvalidTuning {
            field: "coyote_time",
            value: 0.0
        })
    );

    let bad = MovementTuning {
        tiptoe_speed_factor: 1.5,
        ..default()
    };
    assert!(matches!(
        bad.validate(),
        Err(SetupError::InvalidTuning {
            field: "tiptoe_speed_factor",
            ..
        })
    ));
}

#[test]
fn test_zero_jump_buffer_is_rejected() {
    // A zero buffer would swallow every tap, grounded ones included
    let bad = MovementTuning {
        jump_buffer_time: 0.0,
        ..default()
    };
    assert_eq!(
        bad.validate(),
        Err(SetupError::InvalidTuning {
            field: "jump_buffer_time",
            value: 0.0
        })
    );
}

#[test]
fn test_tuning_validation_covers_sensor_geometry() {
    let bad = MovementTuning {
        ground_check_radius: 0.0,
        ..default()
    };
    assert!(matches!(
        bad.validate(),
        Err(SetupError::InvalidGroundSensor { .. })
    ));

    let bad = MovementTuning {
        ground_check_depth: f32::NAN,
        ..default()
    };
    assert!(matches!(
        bad.validate(),
        Err(SetupError::InvalidTuning {
            field: "ground_check_depth",
            ..
        })
    ));
}

#[test]
fn test_spawn_player_with_bad_tuning_spawns_nothing() {
    let mut world = World::new();
    let bad = MovementTuning {
        ground_check_radius: -1.0,
        ..default()
    };

    let result = spawn_player(&mut world.commands(), &bad, Vec2::ZERO);
    world.flush();

    assert!(matches!(result, Err(SetupError::InvalidGroundSensor { .. })));
    assert_eq!(world.query::<&Player>().iter(&world).count(), 0);
}

#[test]
fn test_single_jump_height() {
    let tuning = MovementTuning {
        jump_velocity: 100.0,
        gravity: 500.0,
        ..default()
    };
    assert_eq!(tuning.single_jump_height(), 10.0);
}

#[test]
fn test_tap_input_is_consumed_once() {
    let mut tap = TapInput::default();
    assert!(!tap.take());

    tap.register_tap();
    tap.register_tap();
    assert!(tap.is_pending());
    assert!(tap.take());
    assert!(!tap.take());
}

// -----------------------------------------------------------------------------
// App wiring
// -----------------------------------------------------------------------------

#[derive(Resource, Default)]
struct Recorded {
    jumps: Vec<JumpEvent>,
    ability_requests: Vec<SpecialAbilityRequest>,
}

fn record_events(
    mut jumps: MessageReader<JumpEvent>,
    mut abilities: MessageReader<SpecialAbilityRequest>,
    mut recorded: ResMut<Recorded>,
) {
    recorded.jumps.extend(jumps.read().copied());
    recorded.ability_requests.extend(abilities.read().copied());
}

fn arbitration_app() -> App {
    let mut app = App::new();
    app.insert_resource(tuning())
        .init_resource::<TapInput>()
        .init_resource::<Recorded>()
        .add_message::<JumpEvent>()
        .add_message::<SpecialAbilityRequest>()
        .add_systems(
            Update,
            (arbitrate_jump, publish_signals, record_events).chain(),
        );
    app
}

fn spawn_grounded_player(app: &mut App, locomotion: Locomotion) -> Entity {
    let tuning = tuning();
    let mut jump = JumpState::default();
    jump.sense_ground(true, &tuning);

    app.world_mut()
        .spawn((
            Player,
            locomotion,
            jump,
            LinearVelocity(Vec2::new(2.0, -4.0)),
            LocomotionSignals::default(),
        ))
        .id()
}

#[test]
fn test_tap_applies_clean_impulse() {
    let mut app = arbitration_app();
    let player = spawn_grounded_player(&mut app, Locomotion::new(2.0, 0.5));

    app.world_mut().resource_mut::<TapInput>().register_tap();
    app.update();

    let world = app.world();
    let velocity = world.get::<LinearVelocity>(player).unwrap();
    assert_eq!(velocity.y, tuning().jump_velocity, "old fall speed discarded");
    assert!(world.get::<Locomotion>(player).unwrap().is_jumping());
    assert!(!world.resource::<TapInput>().is_pending());

    let recorded = world.resource::<Recorded>();
    assert_eq!(
        recorded.jumps,
        vec![JumpEvent {
            player,
            double_jump: false
        }]
    );
}

#[test]
fn test_no_tap_no_jump() {
    let mut app = arbitration_app();
    let player = spawn_grounded_player(&mut app, Locomotion::new(2.0, 0.5));

    app.update();

    let world = app.world();
    assert_eq!(world.get::<LinearVelocity>(player).unwrap().y, -4.0);
    assert!(world.resource::<Recorded>().jumps.is_empty());

    let signals = world.get::<LocomotionSignals>(player).unwrap();
    assert_eq!(signals.speed, 2.0);
    assert!(signals.grounded);
    assert!(!signals.riding);
}

#[test]
fn test_tap_while_riding_requests_special_ability() {
    let mut app = arbitration_app();
    let vehicle = app.world_mut().spawn_empty().id();
    let mut locomotion = Locomotion::new(2.0, 0.5);
    locomotion.state = LocomotionState::RidingVehicle { vehicle };
    let player = spawn_grounded_player(&mut app, locomotion);

    app.world_mut().resource_mut::<TapInput>().register_tap();
    app.update();

    let world = app.world();
    let recorded = world.resource::<Recorded>();
    assert!(recorded.jumps.is_empty());
    assert_eq!(recorded.ability_requests, vec![SpecialAbilityRequest { vehicle }]);

    let locomotion = world.get::<Locomotion>(player).unwrap();
    assert_eq!(locomotion.mounted_vehicle(), Some(vehicle));
    assert!(world.get::<LocomotionSignals>(player).unwrap().riding);
}

// -----------------------------------------------------------------------------
// Fixed-tick systems
// -----------------------------------------------------------------------------

fn fixed_tick_app() -> App {
    let mut app = App::new();
    app.insert_resource(tuning())
        .init_resource::<Time>()
        .add_message::<SetTiptoeEvent>()
        .add_systems(
            Update,
            (apply_tiptoe_requests, update_timers, apply_gravity).chain(),
        );
    app
}

fn spawn_airborne_player(app: &mut App, locomotion: Locomotion) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            locomotion,
            JumpState {
                on_ground: false,
                coyote_timer: 0.2,
                jump_buffer_timer: 0.1,
                can_double_jump: true,
            },
            LinearVelocity::default(),
        ))
        .id()
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_timers_and_gravity_advance_with_delta() {
    let mut app = fixed_tick_app();
    let player = spawn_airborne_player(&mut app, Locomotion::new(2.0, 0.5));

    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(50));
    app.update();

    let world = app.world();
    let jump = world.get::<JumpState>(player).unwrap();
    assert_close(jump.coyote_timer, 0.15);
    assert_close(jump.jump_buffer_timer, 0.05);
    assert_close(
        world.get::<LinearVelocity>(player).unwrap().y,
        -tuning().gravity * 0.05,
    );
}

#[test]
fn test_gravity_suspended_while_riding() {
    let mut app = fixed_tick_app();
    let vehicle = app.world_mut().spawn_empty().id();
    let mut locomotion = Locomotion::new(2.0, 0.5);
    locomotion.state = LocomotionState::RidingVehicle { vehicle };
    let player = spawn_airborne_player(&mut app, locomotion);

    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(50));
    app.update();

    assert_eq!(app.world().get::<LinearVelocity>(player).unwrap().y, 0.0);
}

#[test]
fn test_tiptoe_requests_apply_by_state() {
    let mut app = fixed_tick_app();
    let walker = spawn_airborne_player(&mut app, Locomotion::new(2.0, 0.5));
    let mut jumping = Locomotion::new(2.0, 0.5);
    jumping.begin_jump();
    let jumper = spawn_airborne_player(&mut app, jumping);

    app.world_mut().write_message(SetTiptoeEvent {
        player: walker,
        enabled: true,
    });
    app.world_mut().write_message(SetTiptoeEvent {
        player: jumper,
        enabled: true,
    });
    app.update();

    let world = app.world();
    let walker_state = world.get::<Locomotion>(walker).unwrap();
    assert_eq!(walker_state.state, LocomotionState::Tiptoeing);
    assert_eq!(walker_state.current_speed, 1.0);

    let jumper_state = world.get::<Locomotion>(jumper).unwrap();
    assert_eq!(jumper_state.state, LocomotionState::Jumping);
    assert_eq!(jumper_state.current_speed, 2.0);

    app.world_mut().write_message(SetTiptoeEvent {
        player: walker,
        enabled: false,
    });
    app.update();

    let walker_state = app.world().get::<Locomotion>(walker).unwrap();
    assert_eq!(walker_state.state, LocomotionState::Walking);
    assert_eq!(walker_state.current_speed, 2.0);
}
