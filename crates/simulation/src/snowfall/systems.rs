//! Fixed-update driver for the snowfall field.

use bevy::prelude::*;

use crate::sim_rng::SimRng;
use crate::surface::SurfaceSize;

use super::types::SnowField;

/// System: advance the snow field by one tick.
///
/// Runs in `FixedUpdate`, so one invocation equals one simulation tick
/// regardless of render frame rate.
pub fn advance_snowfall(
    mut field: ResMut<SnowField>,
    mut rng: ResMut<SimRng>,
    surface: Res<SurfaceSize>,
) {
    field.advance(&mut rng.0, *surface);
}
