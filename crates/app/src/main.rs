use bevy::prelude::*;
use bevy::window::{MonitorSelection, PresentMode, WindowMode};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Snowfall".to_string(),
                mode: WindowMode::BorderlessFullscreen(MonitorSelection::Primary),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.01, 0.01, 0.05)))
        .add_plugins((simulation::SimulationPlugin, rendering::RenderingPlugin))
        .add_systems(Update, exit_on_esc)
        .run();
}

/// Quit from the fullscreen session with Escape.
fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}
