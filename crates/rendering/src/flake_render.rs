//! Mirrors the simulated snow field into sprite entities every frame.
//!
//! The simulation speaks surface space: origin at the top-left of the
//! drawable surface, y growing downward, matching `SurfaceSize`. Bevy's 2D
//! world puts the origin at the screen center with y growing upward, so this
//! module owns the conversion between the two.

use bevy::math::Affine2;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::snowfall::{SnowField, Snowflake};
use simulation::surface::SurfaceSize;

use crate::flake_sprite::{FlakeSprite, SPRITE_SIZE};

/// Marker for sprite entities owned by the flake pool.
#[derive(Component)]
pub struct FlakeSpriteEntity;

/// Pool of live flake sprite entities, index-aligned with
/// `SnowField::flakes`. Grown and shrunk to match the field each frame.
#[derive(Resource, Default)]
pub struct FlakeSpritePool(pub Vec<Entity>);

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Keep `SurfaceSize` in sync with the primary window's logical size.
pub fn sync_surface_size(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut surface: ResMut<SurfaceSize>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let current = SurfaceSize::new(window.width(), window.height());
    if *surface != current {
        *surface = current;
    }
}

/// The flake's placement in surface space as a single affine map, applied to
/// sprite-local pixel coordinates. Reading right to left: recenter the 32x32
/// raster on its midpoint, scale, rotate, then move to the flake's position.
pub fn surface_affine(flake: &Snowflake) -> Affine2 {
    let half = SPRITE_SIZE as f32 / 2.0;
    Affine2::from_translation(flake.position)
        * Affine2::from_angle(flake.rotation.to_radians())
        * Affine2::from_scale(Vec2::splat(flake.scale))
        * Affine2::from_translation(Vec2::splat(-half))
}

/// Convert a surface-space point (top-left origin, y down) to Bevy world
/// coordinates (center origin, y up).
pub fn surface_to_world(point: Vec2, surface: &SurfaceSize) -> Vec2 {
    Vec2::new(
        point.x - surface.width / 2.0,
        surface.height / 2.0 - point.y,
    )
}

/// Build the world transform realizing `surface_affine` for a center-anchored
/// sprite. The y-axis flip between the two spaces negates the rotation angle.
fn flake_transform(flake: &Snowflake, surface: &SurfaceSize) -> Transform {
    let world = surface_to_world(flake.position, surface);
    Transform {
        translation: world.extend(0.0),
        rotation: Quat::from_rotation_z(-flake.rotation.to_radians()),
        scale: Vec3::new(flake.scale, flake.scale, 1.0),
    }
}

/// Rebuild the sprite pool against the current field: despawn extras, spawn
/// missing sprites, and rewrite every transform from its flake.
pub fn sync_flake_sprites(
    mut commands: Commands,
    field: Res<SnowField>,
    surface: Res<SurfaceSize>,
    sprite: Option<Res<FlakeSprite>>,
    mut pool: ResMut<FlakeSpritePool>,
    mut transforms: Query<&mut Transform, With<FlakeSpriteEntity>>,
) {
    let Some(sprite) = sprite else {
        return;
    };

    while pool.0.len() > field.flakes.len() {
        if let Some(entity) = pool.0.pop() {
            commands.entity(entity).despawn();
        }
    }
    while pool.0.len() < field.flakes.len() {
        let flake = &field.flakes[pool.0.len()];
        let entity = commands
            .spawn((
                FlakeSpriteEntity,
                Sprite::from_image(sprite.0.clone()),
                flake_transform(flake, &surface),
            ))
            .id();
        pool.0.push(entity);
    }

    for (entity, flake) in pool.0.iter().zip(field.flakes.iter()) {
        if let Ok(mut transform) = transforms.get_mut(*entity) {
            *transform = flake_transform(flake, &surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flake_at(x: f32, y: f32, rotation: f32, scale: f32) -> Snowflake {
        Snowflake {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            rotation,
            rotation_velocity: 3.0,
            scale,
        }
    }

    #[test]
    fn affine_pins_the_sprite_midpoint_to_the_flake_position() {
        // The recentering step puts the raster midpoint at the map origin,
        // so scale and rotation never move it off the flake position.
        for (rotation, scale) in [(0.0, 1.0), (90.0, 1.0), (45.0, 0.75), (217.0, 1.2)] {
            let flake = flake_at(100.0, 100.0, rotation, scale);
            let mapped = surface_affine(&flake).transform_point2(Vec2::splat(16.0));
            assert!(
                mapped.distance(Vec2::new(100.0, 100.0)) < 1e-4,
                "midpoint drifted to {mapped:?} at rotation {rotation}, scale {scale}"
            );
        }
    }

    #[test]
    fn affine_maps_the_raster_corner_through_scale_then_rotation() {
        let flake = flake_at(100.0, 100.0, 0.0, 1.0);
        let corner = surface_affine(&flake).transform_point2(Vec2::ZERO);
        assert!(corner.distance(Vec2::new(84.0, 84.0)) < 1e-4);

        // At half scale the corner sits half as far from the midpoint.
        let flake = flake_at(100.0, 100.0, 0.0, 0.5);
        let corner = surface_affine(&flake).transform_point2(Vec2::ZERO);
        assert!(corner.distance(Vec2::new(92.0, 92.0)) < 1e-4);

        // A quarter turn in surface space (y down) sends the top-left
        // corner's offset (-16, -16) to (16, -16).
        let flake = flake_at(100.0, 100.0, 90.0, 1.0);
        let corner = surface_affine(&flake).transform_point2(Vec2::ZERO);
        assert!(corner.distance(Vec2::new(116.0, 84.0)) < 1e-3);
    }

    #[test]
    fn surface_to_world_flips_and_recenters() {
        let surface = SurfaceSize::new(800.0, 600.0);
        assert_eq!(
            surface_to_world(Vec2::new(0.0, 0.0), &surface),
            Vec2::new(-400.0, 300.0)
        );
        assert_eq!(
            surface_to_world(Vec2::new(400.0, 300.0), &surface),
            Vec2::ZERO
        );
        assert_eq!(
            surface_to_world(Vec2::new(800.0, 600.0), &surface),
            Vec2::new(400.0, -300.0)
        );
    }

    #[test]
    fn transform_places_offscreen_spawns_above_the_visible_world() {
        let surface = SurfaceSize::new(800.0, 600.0);
        let flake = flake_at(200.0, -15.0, 0.0, 1.0);
        let transform = flake_transform(&flake, &surface);
        assert!(transform.translation.y > surface.height / 2.0);
        assert_eq!(transform.translation.x, -200.0);
    }
}
