//! Arena domain: static test-level geometry.
//!
//! A floor, boundary walls, an interior wall column for wall-slide and
//! wall-jump practice, and a one-way platform. The player only couples to
//! this through physics layers and the probe queries.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::GameLayer;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena);
    }
}

/// Marker for solid ground colliders.
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders.
#[derive(Component, Debug)]
pub struct Wall;

/// Marker for one-way platform colliders.
#[derive(Component, Debug)]
pub struct Platform;

fn spawn_arena(mut commands: Commands) {
    // Floor
    commands.spawn((
        Ground,
        slab(Vec2::new(0.0, -260.0), Vec2::new(1200.0, 40.0), GameLayer::Ground),
        sprite(Vec2::new(1200.0, 40.0), Color::srgb(0.25, 0.23, 0.2)),
    ));

    // Boundary walls
    for x in [-580.0, 580.0] {
        commands.spawn((
            Wall,
            slab(Vec2::new(x, 20.0), Vec2::new(40.0, 600.0), GameLayer::Wall),
            sprite(Vec2::new(40.0, 600.0), Color::srgb(0.22, 0.24, 0.28)),
        ));
    }

    // Interior wall column
    commands.spawn((
        Wall,
        slab(Vec2::new(220.0, -80.0), Vec2::new(32.0, 320.0), GameLayer::Wall),
        sprite(Vec2::new(32.0, 320.0), Color::srgb(0.22, 0.24, 0.28)),
    ));

    // One-way platform; counts for both the ground and wall probes.
    commands.spawn((
        Platform,
        slab(Vec2::new(-180.0, -120.0), Vec2::new(200.0, 14.0), GameLayer::Platform),
        sprite(Vec2::new(200.0, 14.0), Color::srgb(0.32, 0.28, 0.2)),
    ));
}

fn slab(
    position: Vec2,
    size: Vec2,
    layer: GameLayer,
) -> (RigidBody, Collider, CollisionLayers, Transform) {
    (
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(layer, [GameLayer::Player]),
        Transform::from_translation(position.extend(0.0)),
    )
}

fn sprite(size: Vec2, color: Color) -> Sprite {
    Sprite {
        color,
        custom_size: Some(size),
        ..default()
    }
}
