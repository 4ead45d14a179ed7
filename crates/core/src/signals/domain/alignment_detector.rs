//! Gaze/orientation alignment signal from standardized landmarks.
//!
//! In the standardized coordinate frame the nose tip sits at the origin
//! for a neutral, centered face, so its offset directly encodes where
//! the face is pointing: positive horizontal = right, positive
//! vertical = down.

use crate::shared::error::SignalError;
use crate::shared::landmark::LandmarkSet;
use crate::shared::topology::{GAZE_DOWN_MIN, GAZE_LEFT_MAX, GAZE_RIGHT_MIN, GAZE_UP_MAX, NOSE_TIP};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GazeHorizontal {
    Left,
    Neutral,
    Right,
}

impl GazeHorizontal {
    pub fn label(&self) -> &'static str {
        match self {
            GazeHorizontal::Left => "Left",
            GazeHorizontal::Neutral => "Neutral",
            GazeHorizontal::Right => "Right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GazeVertical {
    Up,
    Neutral,
    Down,
}

impl GazeVertical {
    pub fn label(&self) -> &'static str {
        match self {
            GazeVertical::Up => "Up",
            GazeVertical::Neutral => "Neutral",
            GazeVertical::Down => "Down",
        }
    }
}

/// Horizontal and vertical orientation offsets; 0.0 is neutral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlignmentSignal {
    pub horizontal: f64,
    pub vertical: f64,
}

impl AlignmentSignal {
    /// Classifies the horizontal offset against the calibrated cutoffs.
    pub fn horizontal_direction(&self) -> GazeHorizontal {
        if self.horizontal >= GAZE_RIGHT_MIN {
            GazeHorizontal::Right
        } else if self.horizontal <= GAZE_LEFT_MAX {
            GazeHorizontal::Left
        } else {
            GazeHorizontal::Neutral
        }
    }

    /// Classifies the vertical offset against the calibrated cutoffs.
    ///
    /// The up cutoff (−0.05) sits much closer to neutral than the down
    /// cutoff (0.6): calibrated, not symmetric.
    pub fn vertical_direction(&self) -> GazeVertical {
        if self.vertical >= GAZE_DOWN_MIN {
            GazeVertical::Down
        } else if self.vertical <= GAZE_UP_MAX {
            GazeVertical::Up
        } else {
            GazeVertical::Neutral
        }
    }
}

/// Reads the alignment signal off the standardized nose tip. Stateless.
pub fn detect(landmarks: &LandmarkSet) -> Result<AlignmentSignal, SignalError> {
    let nose = landmarks.get(NOSE_TIP)?;
    Ok(AlignmentSignal {
        horizontal: nose.x,
        vertical: nose.y,
    })
}
