//! Plugin registration for the snowfall field.

use bevy::prelude::*;

use crate::surface::SurfaceSize;

use super::systems::advance_snowfall;
use super::types::SnowField;

pub struct SnowfallPlugin;

impl Plugin for SnowfallPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SnowField>()
            .init_resource::<SurfaceSize>()
            .add_systems(FixedUpdate, advance_snowfall);
    }
}
