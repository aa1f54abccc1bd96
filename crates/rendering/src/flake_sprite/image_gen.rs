//! Builds the cached snowflake glyph image.

use bevy::asset::RenderAssetUsages;
use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use super::painting::{paint_disk, paint_line};

/// Side length of the square sprite raster, in pixels.
pub const SPRITE_SIZE: u32 = 32;

/// Half-length of the diagonal arms, from the glyph center.
const ARM: f32 = 6.0;
/// Half-length of the horizontal and vertical arms.
const ARM_LONG: f32 = 8.0;
/// Radius of the hub disk at the glyph center.
const HUB_RADIUS: f32 = 2.0;

/// Near-black blue underlayer, drawn first with the wider stroke so it
/// reads as an outline behind the white pass.
const SHADOW_COLOR: [u8; 4] = [1, 1, 255, 255];
const SHADOW_STROKE: f32 = 3.0;
/// White top layer, drawn second with a narrower stroke.
const HIGHLIGHT_COLOR: [u8; 4] = [255, 255, 255, 255];
const HIGHLIGHT_STROKE: f32 = 2.0;

/// Handle to the one shared snowflake image. Every flake sprite clones it.
#[derive(Resource)]
pub struct FlakeSprite(pub Handle<Image>);

/// Paint the six-armed glyph in one color pass: two diagonals, a horizontal,
/// a vertical, and the center hub.
fn draw_flake_glyph(pixels: &mut [[u8; 4]], size: usize, stroke: f32, color: [u8; 4]) {
    let c = size as f32 / 2.0;
    let center = Vec2::splat(c);

    let arms = [
        (Vec2::new(c - ARM, c - ARM), Vec2::new(c + ARM, c + ARM)),
        (Vec2::new(c - ARM, c + ARM), Vec2::new(c + ARM, c - ARM)),
        (Vec2::new(c - ARM_LONG, c), Vec2::new(c + ARM_LONG, c)),
        (Vec2::new(c, c - ARM_LONG), Vec2::new(c, c + ARM_LONG)),
    ];
    for (from, to) in arms {
        paint_line(pixels, size, from, to, stroke, color);
    }
    paint_disk(pixels, size, center, HUB_RADIUS, color);
}

/// Rasterize the snowflake glyph into a fresh RGBA image.
///
/// The raster starts fully transparent, then gets the blue underlayer and the
/// white overlay. Nearest-neighbor sampling keeps the glyph crisp when the
/// per-flake transform scales it.
pub fn generate_flake_image() -> Image {
    let size = SPRITE_SIZE as usize;
    let mut pixels = vec![[0u8; 4]; size * size];

    draw_flake_glyph(&mut pixels, size, SHADOW_STROKE, SHADOW_COLOR);
    draw_flake_glyph(&mut pixels, size, HIGHLIGHT_STROKE, HIGHLIGHT_COLOR);

    let mut image = Image::new(
        Extent3d {
            width: SPRITE_SIZE,
            height: SPRITE_SIZE,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        pixels.into_flattened(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    image.sampler = ImageSampler::nearest();
    image
}

/// Startup system: rasterize the glyph once and stash the handle.
pub fn build_flake_sprite(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let handle = images.add(generate_flake_image());
    commands.insert_resource(FlakeSprite(handle));
}
