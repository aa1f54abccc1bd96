//! # TestSky: headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` so integration tests can run
//! real fixed-update ticks without a window or renderer.

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::sim_rng::SimRng;
use crate::snowfall::SnowField;
use crate::surface::SurfaceSize;
use crate::{SimulationPlugin, TICK_RATE_HZ};

/// A headless Bevy app wrapping `SimulationPlugin` for integration testing.
///
/// Use the builder methods to set up the sky, then `tick()` to advance the
/// simulation and assert on the resulting state.
pub struct TestSky {
    app: App,
}

impl TestSky {
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        // Run one update so Startup systems execute.
        app.update();
        Self { app }
    }

    /// Seed the shared RNG for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.app.insert_resource(SimRng::from_seed_u64(seed));
        self
    }

    /// Report a drawable surface of the given size. Without this the
    /// surface stays at its degenerate 0x0 default and nothing spawns.
    pub fn with_surface(mut self, width: f32, height: f32) -> Self {
        self.app.insert_resource(SurfaceSize::new(width, height));
        self
    }

    /// Run N fixed-update ticks by advancing virtual time one fixed
    /// timestep per `update()`.
    pub fn tick(&mut self, n: u32) {
        let dt = std::time::Duration::from_secs_f64(1.0 / TICK_RATE_HZ);
        self.app
            .insert_resource(TimeUpdateStrategy::ManualDuration(dt));
        for _ in 0..n {
            self.app.update();
        }
    }

    pub fn field(&self) -> &SnowField {
        self.app.world().resource::<SnowField>()
    }

    pub fn surface(&self) -> &SurfaceSize {
        self.app.world().resource::<SurfaceSize>()
    }
}

impl Default for TestSky {
    fn default() -> Self {
        Self::new()
    }
}
