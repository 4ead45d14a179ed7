//! Semantic landmark indices and calibrated signal constants.
//!
//! Indices follow the 468-point face mesh topology; each constant names
//! the mesh position a detector reads. Threshold coefficients are
//! empirically calibrated — changing them changes classification behavior.

/// Landmark tracked for whole-face position changes.
pub const MOVEMENT_ANCHOR: usize = 0;

/// Nose tip; anchor for alignment and the blink threshold.
pub const NOSE_TIP: usize = 1;

pub const LEFT_EYE_BOTTOM: usize = 145;
pub const LEFT_EYE_TOP: usize = 159;
pub const RIGHT_EYE_BOTTOM: usize = 374;
pub const RIGHT_EYE_TOP: usize = 386;

/// Smallest set length that covers every index the detectors read.
pub const MIN_TOPOLOGY_LEN: usize = 387;

/// Blink threshold = `x * BLINK_THRESHOLD_X + y * BLINK_THRESHOLD_Y + BLINK_THRESHOLD_BIAS`
/// evaluated on the standardized nose tip.
pub const BLINK_THRESHOLD_X: f64 = 0.0308;
pub const BLINK_THRESHOLD_Y: f64 = 0.0803;
pub const BLINK_THRESHOLD_BIAS: f64 = 0.1476;

/// Horizontal alignment at or above this reads as looking right.
pub const GAZE_RIGHT_MIN: f64 = 0.3;
/// Horizontal alignment at or below this reads as looking left.
pub const GAZE_LEFT_MAX: f64 = -0.3;
/// Vertical alignment at or above this reads as looking down.
pub const GAZE_DOWN_MIN: f64 = 0.6;
/// Vertical alignment at or below this reads as looking up.
pub const GAZE_UP_MAX: f64 = -0.05;
