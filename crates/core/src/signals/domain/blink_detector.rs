//! Eye blink signal from standardized landmarks.
//!
//! Eye openness is the x/y distance between the upper and lower eyelid
//! landmarks of each eye. The blink threshold is an affine function of
//! the standardized nose tip position, which calibrates the cutoff to
//! how the face sits in the standardized coordinate frame.

use crate::shared::error::SignalError;
use crate::shared::landmark::LandmarkSet;
use crate::shared::topology::{
    BLINK_THRESHOLD_BIAS, BLINK_THRESHOLD_X, BLINK_THRESHOLD_Y, LEFT_EYE_BOTTOM, LEFT_EYE_TOP,
    NOSE_TIP, RIGHT_EYE_BOTTOM, RIGHT_EYE_TOP,
};

/// Per-eye openness distances and the adaptive blink threshold.
///
/// Lower distance means the eye is closing; an eye is classified as
/// blinking when its distance is strictly below the threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlinkSignal {
    pub left: f64,
    pub right: f64,
    pub threshold: f64,
}

impl BlinkSignal {
    pub fn is_left_blinking(&self) -> bool {
        self.left < self.threshold
    }

    pub fn is_right_blinking(&self) -> bool {
        self.right < self.threshold
    }
}

/// Computes the blink signal for one standardized landmark set.
/// Stateless; requires eyelid pairs and the nose tip to be present.
pub fn detect(landmarks: &LandmarkSet) -> Result<BlinkSignal, SignalError> {
    let left = landmarks
        .get(LEFT_EYE_TOP)?
        .distance_xy(landmarks.get(LEFT_EYE_BOTTOM)?);
    let right = landmarks
        .get(RIGHT_EYE_TOP)?
        .distance_xy(landmarks.get(RIGHT_EYE_BOTTOM)?);

    let nose = landmarks.get(NOSE_TIP)?;
    let threshold = nose.x * BLINK_THRESHOLD_X + nose.y * BLINK_THRESHOLD_Y + BLINK_THRESHOLD_BIAS;

    Ok(BlinkSignal {
        left,
        right,
        threshold,
    })
}
