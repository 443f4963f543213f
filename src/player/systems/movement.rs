//! Player domain: the per-tick movement state machine.
//!
//! Systems run chained in the order laid out in `PlayerPlugin`. Each one
//! owns a single step of the frame and guards on the exclusive mode, so the
//! precedence Dashing > WallSliding > WallJumping > Grounded/Airborne is the
//! only arbitration between mechanics.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::player::{
    CharacterState, ContactEdges, DashPhase, DashState, Facing, GroundDustCue, MoveTimers,
    MovementMode, MovementTuning, Player, PlayerInput, SquashCue, StretchCue, WallDustCue,
};

pub(crate) fn tick_timers(time: Res<Time>, mut query: Query<&mut MoveTimers, With<Player>>) {
    let dt = time.delta_secs();
    for mut timers in &mut query {
        timers.tick_all(dt);
    }
}

/// Re-derive the exclusive mode at the top of every tick. Dash and wall-jump
/// entries also set it directly so later systems in the same tick observe
/// the transition; both paths go through the same precedence in `mode_for`.
pub(crate) fn resolve_mode(
    mut query: Query<(&mut CharacterState, &DashState, &MoveTimers), With<Player>>,
) {
    for (mut state, dash, timers) in &mut query {
        state.mode = mode_for(
            dash.phase == DashPhase::Active,
            timers.wall_jump_lock.is_active(),
            state.walled,
            state.grounded,
        );
    }
}

pub(crate) fn mode_for(
    dashing: bool,
    wall_jump_locked: bool,
    walled: bool,
    grounded: bool,
) -> MovementMode {
    if dashing {
        MovementMode::Dashing
    } else if walled && !grounded {
        // Reaching a wall ends the wall-jump lock-out; this is what makes
        // chained wall jumps between facing walls possible.
        MovementMode::WallSliding
    } else if wall_jump_locked {
        MovementMode::WallJumping
    } else if grounded {
        MovementMode::Grounded
    } else {
        MovementMode::Airborne
    }
}

pub(crate) fn wall_slide(
    tuning: Res<MovementTuning>,
    mut query: Query<(&CharacterState, &mut MoveTimers, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut timers, mut velocity) in &mut query {
        if state.mode != MovementMode::WallSliding {
            continue;
        }

        // The forgiveness window stays full while the slide holds; it only
        // starts decaying once the wall is left. Attaching to a wall also
        // cancels any remaining wall-jump lock-out.
        timers.wall_jump_grace.reset(tuning.wall_jump_grace_window);
        timers.wall_jump_lock.clear();

        velocity.y = wall_slide_clamp(velocity.y, tuning.wall_slide_speed);
    }
}

/// Clamp downward speed while sliding. Horizontal and upward motion are
/// untouched.
pub(crate) fn wall_slide_clamp(vertical_velocity: f32, slide_speed: f32) -> f32 {
    vertical_velocity.max(-slide_speed)
}

/// Wall-jump launch: away from the wall the character is facing. The launch
/// direction always opposes facing, so the flip is unconditional.
pub(crate) fn wall_jump_launch(facing: Facing, power: Vec2) -> (Vec2, Facing) {
    let direction = -facing.sign();
    (Vec2::new(direction * power.x, power.y), facing.flipped())
}

pub(crate) fn wall_jump(
    tuning: Res<MovementTuning>,
    mut input: ResMut<PlayerInput>,
    mut dust: MessageWriter<GroundDustCue>,
    mut query: Query<
        (Entity, &mut CharacterState, &mut MoveTimers, &mut LinearVelocity),
        With<Player>,
    >,
) {
    for (entity, mut state, mut timers, mut velocity) in &mut query {
        if state.mode == MovementMode::Dashing {
            continue;
        }
        if !input.jump_pressed || !timers.wall_jump_grace.is_active() {
            continue;
        }

        let (launch, new_facing) =
            wall_jump_launch(state.facing, Vec2::from_array(tuning.wall_jump_power));
        velocity.0 = launch;
        state.facing = new_facing;

        // Consume the window so a second wall jump cannot stack, and the
        // press so the ordinary jump branch does not also fire this tick.
        // Any running contact freeze ends now, or the hold would zero the
        // launch for the rest of its window.
        timers.wall_jump_grace.clear();
        timers.freeze.clear();
        input.jump_pressed = false;

        timers.wall_jump_lock.reset(tuning.wall_jump_lock_duration);
        state.mode = MovementMode::WallJumping;
        dust.write(GroundDustCue { entity });
        debug!("Wall jump: launch={:?}, facing={:?}", launch, state.facing);
    }
}

/// A flip happens when the horizontal input sign disagrees with facing.
pub(crate) fn flip_for(facing: Facing, input_x: f32) -> Option<Facing> {
    if input_x > 0.0 && facing == Facing::Left {
        Some(Facing::Right)
    } else if input_x < 0.0 && facing == Facing::Right {
        Some(Facing::Left)
    } else {
        None
    }
}

pub(crate) fn update_facing(
    input: Res<PlayerInput>,
    mut dust: MessageWriter<GroundDustCue>,
    mut query: Query<(Entity, &mut CharacterState), With<Player>>,
) {
    for (entity, mut state) in &mut query {
        if matches!(state.mode, MovementMode::Dashing | MovementMode::WallJumping) {
            continue;
        }
        if let Some(new_facing) = flip_for(state.facing, input.axis.x) {
            if state.grounded {
                dust.write(GroundDustCue { entity });
            }
            state.facing = new_facing;
        }
    }
}

/// Horizontal control magnitude: reduced while wall sliding.
pub(crate) fn walk_speed(mode: MovementMode, tuning: &MovementTuning) -> f32 {
    if mode == MovementMode::WallSliding {
        tuning.air_speed
    } else {
        tuning.speed
    }
}

/// Direct horizontal velocity write from input; vertical is preserved.
pub(crate) fn apply_walk(
    input: Res<PlayerInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&CharacterState, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut velocity) in &mut query {
        if matches!(state.mode, MovementMode::Dashing | MovementMode::WallJumping) {
            continue;
        }
        velocity.x = input.axis.x * walk_speed(state.mode, &tuning);
    }
}

pub(crate) fn apply_jump(
    input: Res<PlayerInput>,
    tuning: Res<MovementTuning>,
    mut stretch: MessageWriter<StretchCue>,
    mut dust: MessageWriter<GroundDustCue>,
    mut query: Query<
        (Entity, &mut CharacterState, &mut MoveTimers, &mut LinearVelocity),
        With<Player>,
    >,
) {
    for (entity, mut state, mut timers, mut velocity) in &mut query {
        if state.mode == MovementMode::Dashing {
            continue;
        }

        state.settle_jump_charge(input.jump_held);

        if input.jump_pressed {
            let from_ground = state.grounded;
            if state.try_jump() {
                velocity.y = tuning.jump_velocity;
                // A launch ends any running contact freeze.
                timers.freeze.clear();
                if from_ground {
                    stretch.write(StretchCue { entity });
                    dust.write(GroundDustCue { entity });
                    debug!("Ground jump; double jump armed");
                } else {
                    debug!("Double jump spent");
                }
            }
        }
    }
}

/// Walled-onset freeze trigger plus wall dust, and the landing squash. Both
/// fire on edges against the previous-frame snapshot, never while a contact
/// merely persists.
pub(crate) fn handle_contact_edges(
    tuning: Res<MovementTuning>,
    mut squash: MessageWriter<SquashCue>,
    mut wall_dust: MessageWriter<WallDustCue>,
    mut query: Query<(Entity, &CharacterState, &ContactEdges, &mut MoveTimers), With<Player>>,
) {
    for (entity, state, edges, mut timers) in &mut query {
        if state.mode == MovementMode::Dashing {
            continue;
        }

        if state.walled && !edges.was_walled {
            timers.freeze.reset(tuning.freeze_duration);
            if !state.grounded {
                wall_dust.write(WallDustCue { entity });
            }
        }

        if state.grounded && !edges.was_grounded {
            squash.write(SquashCue { entity });
        }
    }
}

/// Hold velocity at zero for the freeze window. The rest of the simulation
/// keeps ticking around it; only this write point pins the body.
pub(crate) fn apply_freeze(
    mut query: Query<(&CharacterState, &MoveTimers, &mut LinearVelocity), With<Player>>,
) {
    for (state, timers, mut velocity) in &mut query {
        if state.mode == MovementMode::Dashing {
            continue;
        }
        if timers.freeze.is_active() {
            velocity.0 = Vec2::ZERO;
        }
    }
}

/// Extra downward acceleration beyond the base gravity step: heavier falls,
/// and a shortened rise when jump is released early. One launch impulse plus
/// shaping replaces distinct "hold" physics.
pub(crate) fn gravity_shaping_delta(
    vertical_velocity: f32,
    jump_held: bool,
    gravity_y: f32,
    tuning: &MovementTuning,
    dt: f32,
) -> f32 {
    if vertical_velocity < 0.0 {
        gravity_y * (tuning.fall_multiplier - 1.0) * dt
    } else if vertical_velocity > 0.0 && !jump_held {
        gravity_y * (tuning.low_jump_multiplier - 1.0) * dt
    } else {
        0.0
    }
}

pub(crate) fn shape_gravity(
    time: Res<Time>,
    gravity: Res<Gravity>,
    input: Res<PlayerInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&CharacterState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();
    for (state, mut velocity) in &mut query {
        // The dash overrides gravity entirely; the wall slide runs its own
        // vertical regime through the clamp.
        if matches!(state.mode, MovementMode::Dashing | MovementMode::WallSliding) {
            continue;
        }
        velocity.y += gravity_shaping_delta(velocity.y, input.jump_held, gravity.0.y, &tuning, dt);
    }
}

/// Store this tick's contacts for next tick's edge detection. Runs last,
/// and pauses during a dash together with the probes.
pub(crate) fn snapshot_edges(
    mut query: Query<(&CharacterState, &mut ContactEdges), With<Player>>,
) {
    for (state, mut edges) in &mut query {
        if state.mode == MovementMode::Dashing {
            continue;
        }
        edges.was_grounded = state.grounded;
        edges.was_walled = state.walled;
    }
}
