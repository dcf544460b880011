/// Number of highest-gain coverage groups the set-cover solver compares
/// each iteration.
pub const DEFAULT_SET_COVER_POOL_SIZE: usize = 5;

/// Half-width of the square core of the service neighborhood.
pub const SERVICE_CORE_RADIUS: i32 = 2;

/// Reach of the four axis-aligned arms of the service neighborhood.
pub const SERVICE_ARM_REACH: i32 = 3;

/// Base cost of a single tower in the penalty model.
pub const TOWER_BASE_PENALTY: f64 = 170.0;

/// Exponential growth rate of a tower's penalty per interfering neighbor.
pub const TOWER_OVERLAP_GROWTH: f64 = 0.17;
