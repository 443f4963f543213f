//! Debug overlay for movement-state inspection.
//!
//! Gated behind the `dev-tools` feature. F3 toggles a text readout of the
//! current mode, contacts, velocity, and the countdown timers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{CharacterState, MoveTimers, Player};

pub struct DebugPlugin;

#[derive(Resource, Debug, Default)]
struct DebugState {
    visible: bool,
}

#[derive(Component)]
struct DebugOverlay;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(Update, (toggle_overlay, update_overlay));
    }
}

fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        DebugOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.5, 0.9, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(12.0),
            ..default()
        },
        Visibility::Hidden,
    ));
}

fn toggle_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut overlay: Query<&mut Visibility, With<DebugOverlay>>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.visible = !state.visible;
        for mut visibility in &mut overlay {
            *visibility = if state.visible {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
        }
    }
}

fn update_overlay(
    state: Res<DebugState>,
    players: Query<(&CharacterState, &MoveTimers, &LinearVelocity), With<Player>>,
    mut overlay: Query<&mut Text, With<DebugOverlay>>,
) {
    if !state.visible {
        return;
    }
    let Ok((character, timers, velocity)) = players.single() else {
        return;
    };
    for mut text in &mut overlay {
        text.0 = format!(
            "mode: {:?}\ngrounded: {}  walled: {}\nvel: ({:.0}, {:.0})\n\
             grace: {:.2}  lock: {:.2}\ndash: {:.2}/{:.2}  freeze: {:.2}",
            character.mode,
            character.grounded,
            character.walled,
            velocity.x,
            velocity.y,
            timers.wall_jump_grace.remaining(),
            timers.wall_jump_lock.remaining(),
            timers.dash_active.remaining(),
            timers.dash_cooldown.remaining(),
            timers.freeze.remaining(),
        );
    }
}
