mod arena;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod player;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Cliffside".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * 1200.0))
    .add_plugins((
        core::CorePlugin,
        arena::ArenaPlugin,
        player::PlayerPlugin,
        effects::EffectsPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
