pub mod chain;
pub mod direction;
pub mod intersection;
pub mod merge;
pub mod state;

pub(crate) const MERGE_IOU_THRESHOLD: f64 = 0.70;
pub(crate) const CLUSTER_ANGLE_THRESHOLD_DEG: f64 = 45.0;
pub(crate) const BRANCH_ANGLE_THRESHOLD_DEG: f64 = 140.0;
pub(crate) const FORWARD_DY_LIMIT: f64 = 0.5; // Normalized dy; y grows downward
pub(crate) const PROXIMITY_WIDTH_FACTOR: f64 = 3.0;
pub(crate) const ARROW_LENGTH_SCALE: f64 = 0.15; // Fraction of the image diagonal
pub(crate) const PATH_SAMPLES_PER_BOX: i32 = 4;

/// Added to denominators so degenerate geometry divides cleanly.
pub(crate) const GEOM_EPSILON: f64 = 1e-6;
