use std::f64::consts::PI;

use crate::models::FloatType;

/// Obstacles farther than this from a cannon cannot block its fire.
pub const MAX_OBSTACLE_DISTANCE: FloatType = 10.0;

/// Anything closer than this is treated as the cannon's own mount and ignored.
pub const MIN_OBSTACLE_DISTANCE: FloatType = 1.0;

/// Padding added on top of the weapon's own spread when widening obstructed
/// sectors, in degrees.
pub const EXTRA_SPREAD_MARGIN_DEG: FloatType = 10.0;

/// Tolerance used for angle comparisons, including snapping obstacle
/// directions to the cardinal axes.
pub const ANGLE_EPSILON: FloatType = 1e-9;

/// Half-turn per quadrant; obstacle directions are classified against this.
pub const QUARTER_TURN: FloatType = PI * 0.5;

/// Side length of one world chunk in world units.
pub const CHUNK_SIZE: i32 = 1000;
