//! Player domain: countdown timers for short-lived movement states.

use bevy::prelude::*;

/// A one-shot countdown. Inert at zero until explicitly reset by a
/// triggering event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    pub fn reset(&mut self, value: f32) {
        self.remaining = value;
    }

    /// Advance the countdown, flooring at zero.
    pub fn tick(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
    }

    /// Active while strictly above zero.
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Force the countdown inert, consuming whatever window remained.
    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

/// The full set of movement countdowns. Ticked exactly once per frame, in
/// declaration order, before any decision system reads them — a countdown
/// reset later in the same frame keeps its full window.
#[derive(Component, Debug, Default)]
pub struct MoveTimers {
    /// Forgiveness window for jumping after leaving a wall slide.
    pub wall_jump_grace: Countdown,
    /// Facing-flip and walk suppression after a wall jump.
    pub wall_jump_lock: Countdown,
    /// Active window of the dash.
    pub dash_active: Countdown,
    /// Cooldown between dashes.
    pub dash_cooldown: Countdown,
    /// Velocity hold on wall contact.
    pub freeze: Countdown,
}

impl MoveTimers {
    pub fn tick_all(&mut self, dt: f32) {
        self.wall_jump_grace.tick(dt);
        self.wall_jump_lock.tick(dt);
        self.dash_active.tick(dt);
        self.dash_cooldown.tick(dt);
        self.freeze.tick(dt);
    }
}
