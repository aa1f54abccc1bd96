use bevy::prelude::*;

pub mod ambient_audio;
pub mod flake_render;
pub mod flake_sprite;

use ambient_audio::AmbientAudioPlugin;
use flake_render::{setup_camera, sync_flake_sprites, sync_surface_size, FlakeSpritePool};
use flake_sprite::build_flake_sprite;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FlakeSpritePool>()
            .add_plugins(AmbientAudioPlugin)
            .add_systems(Startup, (setup_camera, build_flake_sprite))
            .add_systems(Update, (sync_surface_size, sync_flake_sprites).chain());
    }
}
