//! Player domain: ground and wall contact probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{CharacterState, GameLayer, MovementMode, MovementTuning, Player};

/// Small-radius overlap queries at the feet and facing-side anchors, against
/// the solid layer OR the one-way platform layer. Pure reads; the only
/// writes are the `grounded`/`walled` booleans. An empty result set means
/// "no contact", never an error.
pub(crate) fn probe_contacts(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut CharacterState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Platform]);
    let wall_filter = SpatialQueryFilter::from_mask([GameLayer::Wall, GameLayer::Platform]);
    let probe = Collider::circle(tuning.probe_radius);

    for (transform, mut state) in &mut query {
        // Contacts hold their pre-dash values for the whole dash; the first
        // post-dash tick re-probes against the untouched snapshot, so an
        // attach edge at dash end is still seen.
        if state.mode == MovementMode::Dashing {
            continue;
        }

        let center = transform.translation.truncate();

        let feet = center + Vec2::from_array(tuning.ground_anchor);
        state.grounded = !spatial_query
            .shape_intersections(&probe, feet, 0.0, &ground_filter)
            .is_empty();

        let side = center
            + Vec2::new(
                tuning.wall_anchor[0] * state.facing.sign(),
                tuning.wall_anchor[1],
            );
        state.walled = !spatial_query
            .shape_intersections(&probe, side, 0.0, &wall_filter)
            .is_empty();
    }
}
