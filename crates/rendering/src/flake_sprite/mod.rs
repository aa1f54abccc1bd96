//! Cached snowflake sprite: one 32x32 two-tone glyph built at startup.
//!
//! The glyph is painted on the CPU with anti-aliased strokes (it is built
//! exactly once, so quality wins over speed there) and sampled
//! nearest-neighbor afterwards, because the blit path runs every frame for
//! every flake. The handle lives in the `FlakeSprite` resource; nothing
//! rebuilds the image after startup.

mod image_gen;
mod painting;

#[cfg(test)]
mod tests;

pub use image_gen::{build_flake_sprite, generate_flake_image, FlakeSprite, SPRITE_SIZE};
