//! Player domain: the character-movement core.
//!
//! Converts per-frame input and collision probes into velocity commands for
//! the avian2d rigid body: walk, jump/double-jump, wall slide, wall jump,
//! and dash, with countdown-driven lock-outs, cooldowns, and contact
//! freezes. Rendering, particles, and level geometry live in their own
//! domains and only see this one through cue messages and physics layers.

mod bootstrap;
mod components;
mod config;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;
mod timers;

pub use components::{
    CharacterState, ContactEdges, DashPhase, DashState, Facing, GameLayer, MovementMode, Player,
    PlayerSprite,
};
pub use events::{DashTrailCue, GroundDustCue, SquashCue, StretchCue, WallDustCue};
pub use resources::{MovementTuning, PlayerInput};
pub use timers::MoveTimers;

use bevy::prelude::*;

use crate::player::systems::{
    apply_freeze, apply_jump, apply_walk, drive_dash, handle_contact_edges, probe_contacts,
    read_input, resolve_mode, shape_gravity, snapshot_edges, tick_timers, update_facing,
    wall_jump, wall_slide,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<PlayerInput>()
            .add_message::<SquashCue>()
            .add_message::<StretchCue>()
            .add_message::<GroundDustCue>()
            .add_message::<WallDustCue>()
            .add_message::<DashTrailCue>()
            .add_systems(
                Startup,
                (config::load_movement_tuning, bootstrap::spawn_player).chain(),
            )
            // The frame driver: one fixed order per tick. Timers advance
            // before any decision reads them, edges are snapshotted last.
            .add_systems(
                Update,
                (
                    read_input,
                    probe_contacts,
                    tick_timers,
                    resolve_mode,
                    wall_slide,
                    wall_jump,
                    update_facing,
                    apply_walk,
                    drive_dash,
                    apply_jump,
                    handle_contact_edges,
                    apply_freeze,
                    shape_gravity,
                    snapshot_edges,
                )
                    .chain(),
            );
    }
}
