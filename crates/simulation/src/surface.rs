//! Drawable surface contract shared between simulation and rendering.

use bevy::prelude::*;

/// Current drawable surface size in pixels.
///
/// Surface space has its origin at the top-left with y increasing downward.
/// Defaults to 0x0 until the host reports a real size (the rendering crate
/// mirrors the primary window into this resource every frame; tests set it
/// directly). A degenerate size pauses spawning and culling for the tick
/// rather than crashing; a transient zero-size window is a normal host
/// state during startup and minimization.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero or negative dimension: spawn bounds cannot be computed.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
