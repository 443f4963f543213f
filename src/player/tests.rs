//! Player domain: unit tests for countdowns, the mode precedence, and the
//! per-mechanic decision helpers.

use avian2d::prelude::LinearVelocity;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::components::{
    CharacterState, ContactEdges, DashPhase, DashState, Facing, MovementMode, Player,
};
use super::events::{GroundDustCue, StretchCue};
use super::resources::{MovementTuning, PlayerInput};
use super::systems::movement::{
    apply_freeze, apply_jump, flip_for, gravity_shaping_delta, mode_for, snapshot_edges,
    wall_jump, wall_jump_launch, wall_slide, wall_slide_clamp, walk_speed,
};
use super::timers::{Countdown, MoveTimers};

const DT: f32 = 1.0 / 60.0;

// -----------------------------------------------------------------------------
// Countdown tests
// -----------------------------------------------------------------------------

#[test]
fn test_countdown_default_is_inert() {
    let countdown = Countdown::default();
    assert!(!countdown.is_active());
}

#[test]
fn test_countdown_reset_activates() {
    let mut countdown = Countdown::default();
    countdown.reset(0.2);
    assert!(countdown.is_active());
    assert_eq!(countdown.remaining(), 0.2);
}

#[test]
fn test_countdown_tick_decays_and_floors_at_zero() {
    let mut countdown = Countdown::default();
    countdown.reset(0.05);
    countdown.tick(DT);
    assert!(countdown.is_active());
    countdown.tick(DT);
    countdown.tick(DT);
    assert!(!countdown.is_active());
    assert_eq!(countdown.remaining(), 0.0);
}

#[test]
fn test_countdown_inert_tick_is_noop() {
    let mut countdown = Countdown::default();
    countdown.tick(10.0);
    assert_eq!(countdown.remaining(), 0.0);
    assert!(!countdown.is_active());
}

#[test]
fn test_countdown_clear_consumes_window() {
    let mut countdown = Countdown::default();
    countdown.reset(0.2);
    countdown.clear();
    assert!(!countdown.is_active());
}

#[test]
fn test_countdown_reset_after_tick_keeps_full_window() {
    // A timer reset during this tick's event handling must not be
    // re-decayed in the same tick: tick first, then reset.
    let mut countdown = Countdown::default();
    countdown.reset(0.1);
    countdown.tick(DT);
    countdown.reset(0.1);
    assert_eq!(countdown.remaining(), 0.1);
}

#[test]
fn test_move_timers_tick_all() {
    let mut timers = MoveTimers::default();
    timers.wall_jump_grace.reset(0.2);
    timers.dash_active.reset(0.2);
    timers.freeze.reset(0.1);

    timers.tick_all(0.15);

    assert!(timers.wall_jump_grace.is_active());
    assert!(timers.dash_active.is_active());
    assert!(!timers.freeze.is_active());
    assert!(!timers.wall_jump_lock.is_active());
}

// -----------------------------------------------------------------------------
// Mode precedence tests
// -----------------------------------------------------------------------------

#[test]
fn test_mode_dashing_preempts_everything() {
    assert_eq!(mode_for(true, true, true, true), MovementMode::Dashing);
    assert_eq!(mode_for(true, false, false, false), MovementMode::Dashing);
}

#[test]
fn test_wall_slide_preempts_wall_jump_lock() {
    // Reaching the next wall mid-lock resumes sliding: clamp, grace
    // refresh, and the chance to chain another wall jump.
    assert_eq!(mode_for(false, true, true, false), MovementMode::WallSliding);
}

#[test]
fn test_wall_jump_lock_holds_while_airborne_off_wall() {
    assert_eq!(mode_for(false, true, false, false), MovementMode::WallJumping);
}

#[test]
fn test_mode_wall_slide_requires_wall_and_air() {
    assert_eq!(mode_for(false, false, true, false), MovementMode::WallSliding);
    assert_eq!(mode_for(false, false, true, true), MovementMode::Grounded);
    assert_eq!(mode_for(false, false, false, false), MovementMode::Airborne);
}

#[test]
fn test_mode_grounded_vs_airborne() {
    assert_eq!(mode_for(false, false, false, true), MovementMode::Grounded);
    assert_eq!(mode_for(false, false, false, false), MovementMode::Airborne);
}

// -----------------------------------------------------------------------------
// Facing tests
// -----------------------------------------------------------------------------

#[test]
fn test_flip_on_disagreeing_input() {
    assert_eq!(flip_for(Facing::Right, -1.0), Some(Facing::Left));
    assert_eq!(flip_for(Facing::Left, 1.0), Some(Facing::Right));
}

#[test]
fn test_no_flip_on_agreeing_or_neutral_input() {
    assert_eq!(flip_for(Facing::Right, 1.0), None);
    assert_eq!(flip_for(Facing::Left, -1.0), None);
    assert_eq!(flip_for(Facing::Right, 0.0), None);
}

#[test]
fn test_facing_sign_and_flip() {
    assert_eq!(Facing::Right.sign(), 1.0);
    assert_eq!(Facing::Left.sign(), -1.0);
    assert_eq!(Facing::Right.flipped(), Facing::Left);
    assert_eq!(Facing::Left.flipped().flipped(), Facing::Left);
}

// -----------------------------------------------------------------------------
// Walk tests
// -----------------------------------------------------------------------------

#[test]
fn test_walk_writes_full_speed_on_ground() {
    let tuning = MovementTuning::default();
    // Grounded, horizontal input 1.0: velocity.x is exactly `speed`.
    assert_eq!(1.0 * walk_speed(MovementMode::Grounded, &tuning), tuning.speed);
}

#[test]
fn test_walk_speed_reduced_while_wall_sliding() {
    let tuning = MovementTuning::default();
    assert_eq!(walk_speed(MovementMode::WallSliding, &tuning), tuning.air_speed);
    assert_eq!(walk_speed(MovementMode::Airborne, &tuning), tuning.speed);
}

// -----------------------------------------------------------------------------
// Gravity shaping tests
// -----------------------------------------------------------------------------

#[test]
fn test_gravity_shaping_heavier_fall() {
    let tuning = MovementTuning::default();
    let gravity_y = -1200.0;
    let delta = gravity_shaping_delta(-5.0, false, gravity_y, &tuning, DT);
    // Extra acceleration matches (fall_multiplier - 1) * gravity * dt.
    assert_eq!(delta, gravity_y * (tuning.fall_multiplier - 1.0) * DT);
    assert!(delta < 0.0);
}

#[test]
fn test_gravity_shaping_low_jump_on_release() {
    let tuning = MovementTuning::default();
    let gravity_y = -1200.0;
    let delta = gravity_shaping_delta(200.0, false, gravity_y, &tuning, DT);
    assert_eq!(delta, gravity_y * (tuning.low_jump_multiplier - 1.0) * DT);
}

#[test]
fn test_gravity_shaping_unmodified_while_rising_held() {
    let tuning = MovementTuning::default();
    assert_eq!(gravity_shaping_delta(200.0, true, -1200.0, &tuning, DT), 0.0);
}

#[test]
fn test_gravity_shaping_unmodified_at_apex() {
    let tuning = MovementTuning::default();
    assert_eq!(gravity_shaping_delta(0.0, false, -1200.0, &tuning, DT), 0.0);
}

// -----------------------------------------------------------------------------
// Wall slide tests
// -----------------------------------------------------------------------------

#[test]
fn test_wall_slide_clamps_fast_fall() {
    assert_eq!(wall_slide_clamp(-900.0, 160.0), -160.0);
}

#[test]
fn test_wall_slide_leaves_slow_fall_and_rise_alone() {
    assert_eq!(wall_slide_clamp(-80.0, 160.0), -80.0);
    assert_eq!(wall_slide_clamp(300.0, 160.0), 300.0);
}

// -----------------------------------------------------------------------------
// Wall jump tests
// -----------------------------------------------------------------------------

#[test]
fn test_wall_jump_launches_away_from_facing() {
    let power = Vec2::new(260.0, 420.0);

    let (velocity, facing) = wall_jump_launch(Facing::Right, power);
    assert_eq!(velocity, Vec2::new(-260.0, 420.0));
    assert_eq!(facing, Facing::Left);

    let (velocity, facing) = wall_jump_launch(Facing::Left, power);
    assert_eq!(velocity, Vec2::new(260.0, 420.0));
    assert_eq!(facing, Facing::Right);
}

#[test]
fn test_grace_window_boundary() {
    let window = 0.2;
    let epsilon = 0.01;

    // Jump at window - epsilon after leaving the wall: still succeeds.
    let mut grace = Countdown::default();
    grace.reset(window);
    grace.tick(window - epsilon);
    assert!(grace.is_active());

    // Jump at window + epsilon: falls through to normal jump rules.
    let mut grace = Countdown::default();
    grace.reset(window);
    grace.tick(window + epsilon);
    assert!(!grace.is_active());
}

#[test]
fn test_grace_consumed_on_wall_jump_cannot_stack() {
    let mut grace = Countdown::default();
    grace.reset(0.2);
    grace.clear();
    assert!(!grace.is_active());
}

#[test]
fn test_facing_flip_suppressed_for_lock_duration() {
    let lock_duration = 0.4;
    let mut lock = Countdown::default();
    lock.reset(lock_duration);

    // Suppressed on every tick inside the window, regardless of input sign.
    let mut elapsed = 0.0;
    while elapsed + DT < lock_duration {
        lock.tick(DT);
        elapsed += DT;
        assert_eq!(
            mode_for(false, lock.is_active(), false, false),
            MovementMode::WallJumping
        );
    }

    lock.tick(DT);
    assert_eq!(
        mode_for(false, lock.is_active(), false, false),
        MovementMode::Airborne
    );
}

// -----------------------------------------------------------------------------
// Jump / double jump tests
// -----------------------------------------------------------------------------

#[test]
fn test_ground_jump_arms_air_charge() {
    let mut state = CharacterState {
        grounded: true,
        ..default()
    };
    assert!(state.try_jump());
    assert!(state.double_jump);
}

#[test]
fn test_air_jump_permitted_once() {
    let mut state = CharacterState {
        grounded: true,
        ..default()
    };
    assert!(state.try_jump());

    // Airborne now: one charge, spent by the second jump.
    state.grounded = false;
    assert!(state.try_jump());
    assert!(!state.double_jump);

    // A third press in the air is denied.
    assert!(!state.try_jump());
}

#[test]
fn test_charge_refills_only_grounded_with_jump_released() {
    let mut state = CharacterState {
        grounded: true,
        double_jump: true,
        ..default()
    };

    // Holding jump across the landing keeps the stale charge in place.
    state.settle_jump_charge(true);
    assert!(state.double_jump);

    // Released on the ground: disarmed, ready for a fresh ground jump.
    state.settle_jump_charge(false);
    assert!(!state.double_jump);

    // Airborne release never disarms.
    state.double_jump = true;
    state.grounded = false;
    state.settle_jump_charge(false);
    assert!(state.double_jump);
}

#[test]
fn test_walking_off_ledge_grants_no_air_jump() {
    let mut state = CharacterState {
        grounded: true,
        ..default()
    };
    state.settle_jump_charge(false);

    state.grounded = false;
    assert!(!state.try_jump());
}

// -----------------------------------------------------------------------------
// Dash tests
// -----------------------------------------------------------------------------

#[test]
fn test_dash_entry_captures_velocity_and_gravity() {
    let tuning = MovementTuning::default();
    let mut dash = DashState::default();

    dash.begin(Vec2::new(1.0, -0.5), tuning.dash_power, 1.7);

    assert_eq!(dash.phase, DashPhase::Active);
    assert_eq!(dash.velocity, Vec2::new(1.0, -0.5) * tuning.dash_power);
    assert_eq!(dash.stored_gravity, 1.7);
}

#[test]
fn test_dash_exit_restores_gravity_exactly() {
    let mut dash = DashState::default();
    dash.begin(Vec2::X, 900.0, 1.7);

    let restored = dash.finish_active();
    assert_eq!(restored, 1.7);
    assert_eq!(dash.phase, DashPhase::Cooldown);

    dash.finish_cooldown();
    assert_eq!(dash.phase, DashPhase::Idle);
}

#[test]
fn test_dash_unavailable_until_active_plus_cooldown_elapse() {
    // Step the two-phase task the way drive_dash does and check the
    // re-entry gate over the whole window.
    let tuning = MovementTuning::default();
    let mut dash = DashState::default();
    let mut timers = MoveTimers::default();

    dash.begin(Vec2::X, tuning.dash_power, 1.0);
    let mut can_dash = false;
    timers.dash_active.reset(tuning.dash_active_time);

    let total = tuning.dash_active_time + tuning.dash_cooldown_time;
    let mut elapsed = 0.0;
    while elapsed < total + 2.0 * DT {
        timers.tick_all(DT);
        elapsed += DT;

        match dash.phase {
            DashPhase::Active => {
                if !timers.dash_active.is_active() {
                    dash.finish_active();
                    timers.dash_cooldown.reset(tuning.dash_cooldown_time);
                }
            }
            DashPhase::Cooldown => {
                if !timers.dash_cooldown.is_active() {
                    dash.finish_cooldown();
                    can_dash = true;
                }
            }
            DashPhase::Idle => {}
        }

        if elapsed < total {
            assert!(!can_dash, "dash available too early at t={elapsed}");
        }
    }

    assert!(can_dash);
    assert_eq!(dash.phase, DashPhase::Idle);
}

#[test]
fn test_dash_velocity_holds_for_active_window() {
    // The captured entry velocity is the command for every active tick.
    let tuning = MovementTuning::default();
    let mut dash = DashState::default();
    let mut timers = MoveTimers::default();

    let entry_axis = Vec2::new(-1.0, 1.0);
    dash.begin(entry_axis, tuning.dash_power, 1.0);
    timers.dash_active.reset(tuning.dash_active_time);

    while timers.dash_active.is_active() {
        timers.tick_all(DT);
        assert_eq!(dash.velocity, entry_axis * tuning.dash_power);
    }
}

// -----------------------------------------------------------------------------
// Frame-order tests: run the real systems against a bare world
// -----------------------------------------------------------------------------

#[test]
fn test_wall_jump_launch_survives_contact_freeze() {
    // A wall jump fired inside the contact-freeze window must not be zeroed
    // by the freeze hold later in the same tick.
    let tuning = MovementTuning::default();
    let mut world = World::new();
    world.insert_resource(MovementTuning::default());
    world.insert_resource(PlayerInput {
        jump_pressed: true,
        ..default()
    });
    world.insert_resource(Messages::<GroundDustCue>::default());

    let mut timers = MoveTimers::default();
    timers.wall_jump_grace.reset(tuning.wall_jump_grace_window);
    timers.freeze.reset(tuning.freeze_duration);

    let player = world
        .spawn((
            Player,
            CharacterState {
                mode: MovementMode::WallSliding,
                walled: true,
                ..default()
            },
            timers,
            LinearVelocity::default(),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems((wall_jump, apply_freeze).chain());
    schedule.run(&mut world);

    let velocity = world.get::<LinearVelocity>(player).unwrap();
    let expected = Vec2::new(-tuning.wall_jump_power[0], tuning.wall_jump_power[1]);
    assert_eq!(velocity.0, expected);
    assert!(!world.get::<MoveTimers>(player).unwrap().freeze.is_active());
}

#[test]
fn test_jump_launch_clears_contact_freeze() {
    let tuning = MovementTuning::default();
    let mut world = World::new();
    world.insert_resource(MovementTuning::default());
    world.insert_resource(PlayerInput {
        jump_pressed: true,
        jump_held: true,
        ..default()
    });
    world.insert_resource(Messages::<GroundDustCue>::default());
    world.insert_resource(Messages::<StretchCue>::default());

    let mut timers = MoveTimers::default();
    timers.freeze.reset(tuning.freeze_duration);

    let player = world
        .spawn((
            Player,
            CharacterState {
                mode: MovementMode::Grounded,
                grounded: true,
                ..default()
            },
            timers,
            LinearVelocity::default(),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems((apply_jump, apply_freeze).chain());
    schedule.run(&mut world);

    let velocity = world.get::<LinearVelocity>(player).unwrap();
    assert_eq!(velocity.y, tuning.jump_velocity);
    assert!(!world.get::<MoveTimers>(player).unwrap().freeze.is_active());
}

#[test]
fn test_wall_slide_cancels_lock_and_refills_grace() {
    // Attaching to the next wall mid-lock resumes sliding: the lock-out is
    // cancelled, the grace window refills, and the clamp applies.
    let tuning = MovementTuning::default();
    let mut world = World::new();
    world.insert_resource(MovementTuning::default());

    let mut timers = MoveTimers::default();
    timers.wall_jump_lock.reset(tuning.wall_jump_lock_duration);

    let player = world
        .spawn((
            Player,
            CharacterState {
                mode: MovementMode::WallSliding,
                walled: true,
                ..default()
            },
            timers,
            LinearVelocity(Vec2::new(0.0, -900.0)),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(wall_slide);
    schedule.run(&mut world);

    let timers = world.get::<MoveTimers>(player).unwrap();
    assert!(!timers.wall_jump_lock.is_active());
    assert_eq!(
        timers.wall_jump_grace.remaining(),
        tuning.wall_jump_grace_window
    );
    assert_eq!(
        world.get::<LinearVelocity>(player).unwrap().y,
        -tuning.wall_slide_speed
    );
}

#[test]
fn test_edge_snapshot_pauses_during_dash() {
    let mut world = World::new();

    let player = world
        .spawn((
            Player,
            CharacterState {
                mode: MovementMode::Dashing,
                walled: true,
                ..default()
            },
            ContactEdges::default(),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(snapshot_edges);
    schedule.run(&mut world);

    // The pre-dash snapshot survives the dash, so the attach edge is still
    // seen on the first tick afterwards.
    let edges = world.get::<ContactEdges>(player).unwrap();
    assert!(!edges.was_walled);

    world.get_mut::<CharacterState>(player).unwrap().mode = MovementMode::Airborne;
    schedule.run(&mut world);
    assert!(world.get::<ContactEdges>(player).unwrap().was_walled);
}

// -----------------------------------------------------------------------------
// Tuning tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_tuning_file_parses() {
    let tuning = super::config::load_tuning(std::path::Path::new("assets/data/movement.ron"))
        .expect("shipped tuning file should parse");
    assert_eq!(tuning.wall_jump_grace_window, 0.2);
    assert_eq!(tuning.dash_power, 900.0);
}

#[test]
fn test_tuning_missing_fields_fall_back_to_defaults() {
    let partial = "(speed: 400.0)";
    let tuning: MovementTuning = ron::Options::default()
        .from_str(partial)
        .expect("partial tuning should parse");
    assert_eq!(tuning.speed, 400.0);
    assert_eq!(tuning.jump_velocity, MovementTuning::default().jump_velocity);
}

#[test]
fn test_tuning_defaults_are_sane() {
    let tuning = MovementTuning::default();
    assert!(tuning.air_speed < tuning.speed);
    assert!(tuning.fall_multiplier > 1.0);
    assert!(tuning.low_jump_multiplier > 1.0);
    assert!(tuning.wall_jump_grace_window > 0.0);
    assert!(tuning.dash_cooldown_time > tuning.dash_active_time);
}
