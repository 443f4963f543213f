//! Effects domain: consumers for the movement core's visual cues.
//!
//! Dust bursts, dash trail ghosts, facing flip, and squash/stretch scale
//! animation. Everything here is fire-and-forget; nothing feeds back into
//! movement.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::player::{
    CharacterState, DashTrailCue, Facing, GroundDustCue, Player, PlayerSprite, SquashCue,
    StretchCue, WallDustCue,
};

const SCALE_RECOVERY_RATE: f32 = 10.0;
const TRAIL_SPAWN_INTERVAL: f32 = 0.02;
const DUST_LIFETIME: f32 = 0.3;
const TRAIL_LIFETIME: f32 = 0.25;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                attach_trail,
                apply_facing_to_sprite,
                start_scale_cues,
                animate_scale,
                spawn_dust_bursts,
                update_dash_trail,
                fade_particles,
            ),
        );
    }
}

/// Short-lived fading mote.
#[derive(Component, Debug)]
struct Particle {
    lifetime: f32,
    age: f32,
    velocity: Vec2,
}

/// Ghost-sprite emitter toggled by the dash trail cue.
#[derive(Component, Debug, Default)]
struct DashTrail {
    emitting: bool,
    spawn_timer: f32,
}

fn attach_trail(
    mut commands: Commands,
    players: Query<Entity, (With<Player>, Without<DashTrail>)>,
) {
    for entity in &players {
        commands.entity(entity).insert(DashTrail::default());
    }
}

fn apply_facing_to_sprite(
    players: Query<&CharacterState, With<Player>>,
    mut sprites: Query<&mut Sprite, With<PlayerSprite>>,
) {
    let Ok(state) = players.single() else {
        return;
    };
    for mut sprite in &mut sprites {
        sprite.flip_x = state.facing == Facing::Left;
    }
}

fn start_scale_cues(
    mut squash: MessageReader<SquashCue>,
    mut stretch: MessageReader<StretchCue>,
    mut sprites: Query<&mut Transform, With<PlayerSprite>>,
) {
    let squashed = squash.read().count() > 0;
    let stretched = stretch.read().count() > 0;
    if !squashed && !stretched {
        return;
    }
    for mut transform in &mut sprites {
        transform.scale = if squashed {
            Vec3::new(1.25, 0.7, 1.0)
        } else {
            Vec3::new(0.75, 1.3, 1.0)
        };
    }
}

fn animate_scale(time: Res<Time>, mut sprites: Query<&mut Transform, With<PlayerSprite>>) {
    let dt = time.delta_secs();
    for mut transform in &mut sprites {
        let scale = transform.scale.truncate();
        let recovered = scale.lerp(Vec2::ONE, (SCALE_RECOVERY_RATE * dt).min(1.0));
        transform.scale = recovered.extend(1.0);
    }
}

fn spawn_dust_bursts(
    mut commands: Commands,
    mut ground_dust: MessageReader<GroundDustCue>,
    mut wall_dust: MessageReader<WallDustCue>,
    players: Query<(&Transform, &CharacterState), With<Player>>,
) {
    for cue in ground_dust.read() {
        if let Ok((transform, _)) = players.get(cue.entity) {
            let feet = transform.translation.truncate() - Vec2::new(0.0, 24.0);
            burst(&mut commands, feet, Vec2::Y, Color::srgb(0.75, 0.7, 0.6));
        }
    }
    for cue in wall_dust.read() {
        if let Ok((transform, state)) = players.get(cue.entity) {
            let side =
                transform.translation.truncate() + Vec2::new(14.0 * state.facing.sign(), 0.0);
            let away = Vec2::new(-state.facing.sign(), 0.5).normalize();
            burst(&mut commands, side, away, Color::srgb(0.62, 0.64, 0.7));
        }
    }
}

/// A small deterministic fan of motes; no RNG needed for a handful.
fn burst(commands: &mut Commands, origin: Vec2, bias: Vec2, color: Color) {
    for i in 0..6 {
        let angle = (i as f32 / 5.0 - 0.5) * std::f32::consts::FRAC_PI_2;
        let direction = Vec2::from_angle(angle).rotate(bias);
        commands.spawn((
            Particle {
                lifetime: DUST_LIFETIME,
                age: 0.0,
                velocity: direction * 60.0,
            },
            Sprite {
                color,
                custom_size: Some(Vec2::splat(4.0)),
                ..default()
            },
            Transform::from_translation(origin.extend(5.0)),
        ));
    }
}

fn update_dash_trail(
    mut commands: Commands,
    time: Res<Time>,
    mut cues: MessageReader<DashTrailCue>,
    mut players: Query<(&Transform, &mut DashTrail), With<Player>>,
) {
    for cue in cues.read() {
        if let Ok((_, mut trail)) = players.get_mut(cue.entity) {
            trail.emitting = cue.emitting;
            trail.spawn_timer = 0.0;
        }
    }

    let dt = time.delta_secs();
    for (transform, mut trail) in &mut players {
        if !trail.emitting {
            continue;
        }
        trail.spawn_timer -= dt;
        if trail.spawn_timer <= 0.0 {
            trail.spawn_timer = TRAIL_SPAWN_INTERVAL;
            commands.spawn((
                Particle {
                    lifetime: TRAIL_LIFETIME,
                    age: 0.0,
                    velocity: Vec2::ZERO,
                },
                Sprite {
                    color: Color::srgba(0.6, 0.85, 1.0, 0.6),
                    custom_size: Some(Vec2::new(24.0, 48.0)),
                    ..default()
                },
                Transform::from_translation(transform.translation - Vec3::Z * 0.1),
            ));
        }
    }
}

fn fade_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut particles: Query<(Entity, &mut Particle, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (entity, mut particle, mut transform, mut sprite) in &mut particles {
        particle.age += dt;
        if particle.age >= particle.lifetime {
            commands.entity(entity).despawn();
            continue;
        }
        transform.translation += (particle.velocity * dt).extend(0.0);
        let alpha = 1.0 - particle.age / particle.lifetime;
        sprite.color = sprite.color.with_alpha(alpha);
    }
}
