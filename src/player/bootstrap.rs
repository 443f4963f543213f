//! Player domain: player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::{CharacterState, ContactEdges, DashState, GameLayer, MoveTimers, Player, PlayerSprite};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

pub(crate) fn spawn_player(mut commands: Commands) {
    info!("Spawning player");
    commands
        .spawn((
            (
                Player,
                CharacterState::default(),
                MoveTimers::default(),
                DashState::default(),
                ContactEdges::default(),
            ),
            Transform::from_xyz(0.0, 40.0, 0.0),
            Visibility::default(),
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(1.0),
                Friction::new(0.0),
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Platform, GameLayer::Wall],
                ),
            ),
        ))
        .with_children(|parent| {
            // The sprite is a child so squash/stretch scaling never touches
            // the collider.
            parent.spawn((
                PlayerSprite,
                Sprite {
                    color: Color::srgb(0.9, 0.9, 0.9),
                    custom_size: Some(PLAYER_SIZE),
                    ..default()
                },
                Transform::default(),
            ));
        });
}
