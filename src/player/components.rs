//! Player domain: character state, physics layers, and contact snapshots.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering and probe queries.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid ground surfaces
    Ground,
    /// One-way platforms; count for both the ground and wall probes
    Platform,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for the player's sprite child, which carries facing flip and
/// squash/stretch scale so the collider stays untouched.
#[derive(Component, Debug)]
pub struct PlayerSprite;

/// The exclusive movement mode. When several conditions hold at once the
/// precedence is Dashing > WallSliding > WallJumping > Grounded/Airborne,
/// derived in one place (`mode_for`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementMode {
    Grounded,
    #[default]
    Airborne,
    WallSliding,
    WallJumping,
    Dashing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

#[derive(Component, Debug)]
pub struct CharacterState {
    pub mode: MovementMode,
    pub grounded: bool,
    pub walled: bool,
    pub facing: Facing,
    pub can_dash: bool,
    /// Air-jump charge: armed by a grounded jump, spent by the airborne one,
    /// disarmed when resting on the ground with jump released.
    pub double_jump: bool,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self {
            mode: MovementMode::Airborne,
            grounded: false,
            walled: false,
            facing: Facing::Right,
            can_dash: true,
            double_jump: false,
        }
    }
}

impl CharacterState {
    /// Jump gate with the double-jump toggle: a grounded jump arms the air
    /// charge, the airborne jump spends it. Returns whether a jump fired.
    pub fn try_jump(&mut self) -> bool {
        if self.grounded || self.double_jump {
            self.double_jump = !self.double_jump;
            true
        } else {
            false
        }
    }

    /// Disarm the air charge. Only happens on the ground with jump released,
    /// so holding jump across a landing cannot re-arm an immediate air jump.
    pub fn settle_jump_charge(&mut self, jump_held: bool) {
        if self.grounded && !jump_held {
            self.double_jump = false;
        }
    }
}

/// Two-phase dash bookkeeping. The phase is advanced each tick by
/// `drive_dash`; the launch velocity and the body's gravity scale are
/// captured at entry, and the gravity scale is restored exactly before the
/// cooldown starts.
#[derive(Component, Debug, Default)]
pub struct DashState {
    pub phase: DashPhase,
    pub velocity: Vec2,
    pub stored_gravity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashPhase {
    #[default]
    Idle,
    Active,
    Cooldown,
}

impl DashState {
    /// Enter the active phase, capturing the launch velocity for the whole
    /// window and the gravity scale to restore afterwards.
    pub fn begin(&mut self, axis: Vec2, dash_power: f32, gravity_scale: f32) {
        self.phase = DashPhase::Active;
        self.velocity = axis * dash_power;
        self.stored_gravity = gravity_scale;
    }

    /// Leave the active phase. Returns the gravity scale to restore.
    pub fn finish_active(&mut self) -> f32 {
        self.phase = DashPhase::Cooldown;
        self.stored_gravity
    }

    pub fn finish_cooldown(&mut self) {
        self.phase = DashPhase::Idle;
    }
}

/// Previous-frame contact snapshot, used solely for landing and wall-attach
/// edge detection.
#[derive(Component, Debug, Default)]
pub struct ContactEdges {
    pub was_grounded: bool,
    pub was_walled: bool,
}
