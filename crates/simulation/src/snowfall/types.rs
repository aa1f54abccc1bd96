//! Types and resources for the snowfall field.

use bevy::prelude::*;
use rand::Rng;

use crate::surface::SurfaceSize;

use super::constants::{
    CULL_MARGIN, FALL_SPEED_MIN, FALL_SPEED_RANGE, MAX_DRIFT_SPEED, ROTATION_FALLBACK, SCALE_MIN,
    SPAWN_MARGIN_X, SPAWN_PROBABILITY, SPAWN_TICK_INTERVAL, SPAWN_Y_MAX, SPAWN_Y_MIN, WIND_JITTER,
};

/// One falling snowflake, in surface space (origin top-left, y down).
///
/// Only `SnowField::advance` mutates flakes after creation; `rotation_velocity`
/// and `scale` are fixed for the flake's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    /// Position in pixels.
    pub position: Vec2,
    /// Velocity in pixels per tick.
    pub velocity: Vec2,
    /// Orientation in degrees.
    pub rotation: f32,
    /// Degrees per tick. Never zero.
    pub rotation_velocity: f32,
    /// Uniform sprite scale in [0.75, 1.25).
    pub scale: f32,
}

impl Snowflake {
    /// Draw a fresh flake just above the top edge of a `width`-pixel surface.
    pub fn spawn(rng: &mut impl Rng, width: f32) -> Self {
        let x = rng.gen_range(-SPAWN_MARGIN_X..width as i32 + SPAWN_MARGIN_X) as f32;
        let y = rng.gen_range(SPAWN_Y_MIN..SPAWN_Y_MAX) as f32;

        let vx = (rng.gen::<f32>() - 0.5) * 2.0;
        let vy = rng.gen::<f32>() * FALL_SPEED_RANGE + FALL_SPEED_MIN;

        let rotation = rng.gen_range(0..359) as f32;

        // Even draws in {-6, -4, -2, 0, 2, 4}; a zero draw would leave the
        // flake frozen for its whole lifetime, so it is remapped.
        let mut rotation_velocity = (rng.gen_range(-3..3) * 2) as f32;
        if rotation_velocity == 0.0 {
            rotation_velocity = ROTATION_FALLBACK;
        }

        let scale = rng.gen::<f32>() / 2.0 + SCALE_MIN;

        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            rotation,
            rotation_velocity,
            scale,
        }
    }
}

/// Which measure the cull test compares against `height + CULL_MARGIN`.
///
/// The classic rendition of this effect compared the flake's vertical
/// *velocity* to the height threshold. Fall speed never leaves [1, 4) and
/// jitter only touches the horizontal component, so under that rule nothing
/// is ever culled and the field grows without bound, almost certainly a
/// latent bug. Both behaviors are kept: `BelowSurface` culls by position
/// (the default, so the live effect actually sheds flakes),
/// `LegacyVelocity` reproduces the classic rule exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullRule {
    /// Cull once the flake's vertical position passes the bottom edge.
    #[default]
    BelowSurface,
    /// Classic rule: cull when vertical velocity exceeds the threshold.
    LegacyVelocity,
}

impl CullRule {
    /// Whether `flake` should be removed from a `height`-pixel surface.
    pub fn should_cull(self, flake: &Snowflake, height: f32) -> bool {
        let threshold = height + CULL_MARGIN;
        match self {
            CullRule::BelowSurface => flake.position.y > threshold,
            CullRule::LegacyVelocity => flake.velocity.y > threshold,
        }
    }
}

/// The live snowflake collection plus the tick counter driving the spawn gate.
///
/// Flake order carries no meaning; rendering draws them in whatever order
/// they sit in the vector.
#[derive(Resource, Debug, Default)]
pub struct SnowField {
    pub flakes: Vec<Snowflake>,
    /// Monotonic tick counter, incremented once per `advance`.
    pub tick: u64,
    pub cull_rule: CullRule,
}

impl SnowField {
    /// Advance the field by one tick: spawn gate, per-flake integration,
    /// then a separate cull phase.
    ///
    /// The update loop never mutates the collection it iterates; culled
    /// flakes are filtered out afterwards in one `retain` pass, so no flake
    /// is skipped or processed twice. The cull predicate is evaluated on
    /// post-move state.
    ///
    /// A degenerate surface skips spawn and cull (the two steps that need
    /// the surface bounds) while existing flakes still move.
    pub fn advance(&mut self, rng: &mut impl Rng, surface: SurfaceSize) {
        self.tick += 1;

        let degenerate = surface.is_degenerate();

        if !degenerate
            && self.tick % SPAWN_TICK_INTERVAL == 0
            && rng.gen::<f32>() < SPAWN_PROBABILITY
        {
            self.flakes.push(Snowflake::spawn(rng, surface.width));
        }

        for flake in &mut self.flakes {
            flake.position += flake.velocity;
            flake.rotation += flake.rotation_velocity;

            // Wind: nudge the horizontal drift, keep it within bounds.
            flake.velocity.x += (rng.gen::<f32>() - 0.5) * WIND_JITTER;
            flake.velocity.x = flake.velocity.x.clamp(-MAX_DRIFT_SPEED, MAX_DRIFT_SPEED);
        }

        if !degenerate {
            let rule = self.cull_rule;
            self.flakes
                .retain(|flake| !rule.should_cull(flake, surface.height));
        }
    }
}
