//! Player domain: the two-phase dash.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::player::{
    CharacterState, DashPhase, DashState, DashTrailCue, MoveTimers, MovementMode, MovementTuning,
    Player, PlayerInput,
};

/// Dash trigger plus the timed active and cooldown phases. Once started the
/// dash is a scheduled task that runs to completion on its own countdowns,
/// with no further input required; re-entry is blocked by `can_dash` until
/// the cooldown expires.
pub(crate) fn drive_dash(
    input: Res<PlayerInput>,
    tuning: Res<MovementTuning>,
    mut trail: MessageWriter<DashTrailCue>,
    mut query: Query<
        (
            Entity,
            &mut CharacterState,
            &mut DashState,
            &mut MoveTimers,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    for (entity, mut state, mut dash, mut timers, mut velocity, mut gravity_scale) in &mut query {
        match dash.phase {
            DashPhase::Idle => {
                if input.dash_pressed && state.can_dash {
                    dash.begin(input.axis, tuning.dash_power, gravity_scale.0);
                    gravity_scale.0 = 0.0;
                    velocity.0 = dash.velocity;
                    state.can_dash = false;
                    state.mode = MovementMode::Dashing;
                    timers.dash_active.reset(tuning.dash_active_time);
                    trail.write(DashTrailCue {
                        entity,
                        emitting: true,
                    });
                    debug!("Dash start: velocity={:?}", dash.velocity);
                }
            }
            DashPhase::Active => {
                if timers.dash_active.is_active() {
                    // The velocity captured at entry holds for the whole
                    // active window, regardless of input.
                    velocity.0 = dash.velocity;
                } else {
                    gravity_scale.0 = dash.finish_active();
                    timers.dash_cooldown.reset(tuning.dash_cooldown_time);
                    trail.write(DashTrailCue {
                        entity,
                        emitting: false,
                    });
                    debug!("Dash end: cooldown {}s", tuning.dash_cooldown_time);
                }
            }
            DashPhase::Cooldown => {
                if !timers.dash_cooldown.is_active() {
                    dash.finish_cooldown();
                    state.can_dash = true;
                }
            }
        }
    }
}
