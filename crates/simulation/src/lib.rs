use bevy::prelude::*;

pub mod sim_rng;
pub mod snowfall;
pub mod surface;

#[cfg(test)]
pub mod test_harness;

pub use sim_rng::SimRng;
pub use snowfall::{CullRule, SnowField, Snowflake, SnowfallPlugin};
pub use surface::SurfaceSize;

/// Simulation tick rate in Hz. One fixed-update tick advances the whole
/// snow field once; the interval only affects perceived speed, not the
/// per-tick update rules.
pub const TICK_RATE_HZ: f64 = 50.0;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ));
        app.add_plugins((sim_rng::SimRngPlugin, snowfall::SnowfallPlugin));
    }
}
