//! Falling-snow particle field.
//!
//! Snowflakes spawn just above the visible top edge, drift downward with
//! wind-like horizontal jitter, rotate, and are removed once they leave the
//! surface. The field advances once per fixed-update tick; rendering reads
//! it and never mutates it.
//!
//! Key behaviors:
//! - A spawn gate admits a new flake on ~23% of ticks (every third tick, 70% chance)
//! - Horizontal drift is jittered every tick and clamped to [-2, 2] px/tick
//! - Rotation velocity is never zero, so every flake visibly spins
//! - Removal is two-phase: the update pass never mutates the collection it iterates
//! - A degenerate (zero-size) surface pauses spawning and culling, not motion

mod constants;
mod plugin;
mod systems;
mod types;


pub use constants::{
    CULL_MARGIN, FALL_SPEED_MIN, FALL_SPEED_RANGE, MAX_DRIFT_SPEED, ROTATION_FALLBACK, SCALE_MIN,
    SPAWN_MARGIN_X, SPAWN_PROBABILITY, SPAWN_TICK_INTERVAL, SPAWN_Y_MAX, SPAWN_Y_MIN, WIND_JITTER,
};
pub use plugin::SnowfallPlugin;
pub use systems::advance_snowfall;
pub use types::{CullRule, SnowField, Snowflake};
