//! Player domain: fire-and-forget visual cue messages.
//!
//! The movement core emits these at transition points (landing, lift-off,
//! flip, dash start/end); the effects domain consumes them. The core never
//! awaits completion or reads anything back.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Landing impact: squash the sprite vertically.
#[derive(Debug)]
pub struct SquashCue {
    pub entity: Entity,
}

impl Message for SquashCue {}

/// Ground lift-off: stretch the sprite vertically.
#[derive(Debug)]
pub struct StretchCue {
    pub entity: Entity,
}

impl Message for StretchCue {}

/// Dust burst at the feet: grounded flip, lift-off, wall jump.
#[derive(Debug)]
pub struct GroundDustCue {
    pub entity: Entity,
}

impl Message for GroundDustCue {}

/// Dust burst on the facing-side wall contact.
#[derive(Debug)]
pub struct WallDustCue {
    pub entity: Entity,
}

impl Message for WallDustCue {}

/// Toggle the dash trail.
#[derive(Debug)]
pub struct DashTrailCue {
    pub entity: Entity,
    pub emitting: bool,
}

impl Message for DashTrailCue {}
