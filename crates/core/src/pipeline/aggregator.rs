//! Joins the four per-face signal streams into `ProctorResult` records.
//!
//! Inputs must already be synchronized: the caller guarantees all four
//! values (or lists) derive from the same frame's landmark data. The
//! list form additionally enforces equal cardinality — a mismatch means
//! the streams desynchronized, and the frame's result is dropped rather
//! than fabricated.

use crate::shared::error::SignalError;
use crate::signals::domain::alignment_detector::AlignmentSignal;
use crate::signals::domain::blink_detector::BlinkSignal;

use super::proctor_result::ProctorResult;

/// Combines the four signals for a single face into one result.
pub fn aggregate_face(
    alignment: &AlignmentSignal,
    blink: &BlinkSignal,
    activity: f64,
    movement: f64,
) -> ProctorResult {
    ProctorResult {
        is_left_eye_blinking: blink.is_left_blinking(),
        is_right_eye_blinking: blink.is_right_blinking(),
        horizontal_align: alignment.horizontal,
        vertical_align: alignment.vertical,
        facial_activity: activity,
        face_movement: movement,
    }
}

/// Combines four index-aligned per-face lists from one frame into an
/// index-aligned result list. All lists must have the same length.
pub fn aggregate(
    alignments: &[AlignmentSignal],
    blinks: &[BlinkSignal],
    activities: &[f64],
    movements: &[f64],
) -> Result<Vec<ProctorResult>, SignalError> {
    let expected = alignments.len();
    check_len("blink", expected, blinks.len())?;
    check_len("activity", expected, activities.len())?;
    check_len("movement", expected, movements.len())?;

    Ok(alignments
        .iter()
        .zip(blinks)
        .zip(activities)
        .zip(movements)
        .map(|(((alignment, blink), &activity), &movement)| {
            aggregate_face(alignment, blink, activity, movement)
        })
        .collect())
}

fn check_len(stream: &'static str, expected: usize, actual: usize) -> Result<(), SignalError> {
    if actual != expected {
        return Err(SignalError::CardinalityMismatch {
            stream,
            expected,
            actual,
        });
    }
    Ok(())
}
