mod audio;
mod collection;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;
mod vehicles;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Tiny Tappers".to_string(),
            resolution: WindowResolution::new(1280, 720),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
        vehicles::VehiclesPlugin,
        collection::CollectionPlugin,
        audio::SfxPlugin,
        level::LevelPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
