//! Player domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

/// Movement tuning, loaded from `assets/data/movement.ron` at startup with
/// these values as the fallback. Two-component fields are `[f32; 2]`, which
/// RON writes as `(x, y)` tuples, so the file stays plain data.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal control magnitude on the ground.
    pub speed: f32,
    /// Reduced horizontal control magnitude while wall sliding.
    pub air_speed: f32,
    pub jump_velocity: f32,
    /// Extra downward acceleration factor while falling.
    pub fall_multiplier: f32,
    /// Extra downward acceleration factor while rising with jump released.
    pub low_jump_multiplier: f32,
    /// Maximum downward speed while wall sliding.
    pub wall_slide_speed: f32,
    /// Wall-jump launch impulse; x is mirrored by the launch direction.
    pub wall_jump_power: [f32; 2],
    /// Forgiveness window for jumping after leaving a wall slide.
    pub wall_jump_grace_window: f32,
    /// Facing-flip and walk lock-out after a wall jump.
    pub wall_jump_lock_duration: f32,
    pub dash_power: f32,
    pub dash_active_time: f32,
    pub dash_cooldown_time: f32,
    /// Velocity hold on wall contact.
    pub freeze_duration: f32,
    /// Overlap-test radius for the ground and wall probes.
    pub probe_radius: f32,
    /// Feet anchor offset from the body center.
    pub ground_anchor: [f32; 2],
    /// Side anchor offset from the body center; x is mirrored by facing.
    pub wall_anchor: [f32; 2],
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 320.0,
            air_speed: 224.0,
            jump_velocity: 560.0,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            wall_slide_speed: 160.0,
            wall_jump_power: [260.0, 420.0],
            wall_jump_grace_window: 0.2,
            wall_jump_lock_duration: 0.4,
            dash_power: 900.0,
            dash_active_time: 0.2,
            dash_cooldown_time: 1.0,
            freeze_duration: 0.1,
            probe_radius: 6.0,
            ground_anchor: [0.0, -26.0],
            wall_anchor: [14.0, 0.0],
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub dash_pressed: bool,
}
