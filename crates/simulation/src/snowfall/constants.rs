//! Tuning constants for the snowfall field.

/// A new flake may spawn only on every Nth tick.
pub const SPAWN_TICK_INTERVAL: u64 = 3;

/// Probability that an eligible tick actually spawns a flake.
/// Combined with the tick gate, ~23% of all ticks produce a flake.
pub const SPAWN_PROBABILITY: f32 = 0.70;

/// Horizontal overscan for spawn positions (pixels past either edge), so
/// flakes can drift into and out of view at the sides.
pub const SPAWN_MARGIN_X: i32 = 50;

/// Spawn band above the visible top edge (integer pixel rows, upper bound
/// exclusive).
pub const SPAWN_Y_MIN: i32 = -20;
pub const SPAWN_Y_MAX: i32 = -7;

/// Fall speed draw: `rand * FALL_SPEED_RANGE + FALL_SPEED_MIN` px/tick,
/// so vertical velocity lies in [1, 4).
pub const FALL_SPEED_MIN: f32 = 1.0;
pub const FALL_SPEED_RANGE: f32 = 3.0;

/// Per-tick horizontal jitter amplitude: `(rand - 0.5) * WIND_JITTER`.
pub const WIND_JITTER: f32 = 0.7;

/// Horizontal drift speed clamp (closed range, px/tick).
pub const MAX_DRIFT_SPEED: f32 = 2.0;

/// Rotation velocity used when the random draw lands on zero (deg/tick).
pub const ROTATION_FALLBACK: f32 = 3.0;

/// Scale draw: `rand / 2 + SCALE_MIN`, so scale lies in [0.75, 1.25).
pub const SCALE_MIN: f32 = 0.75;

/// Extra distance past the bottom edge before a flake is culled (pixels).
pub const CULL_MARGIN: f32 = 10.0;
