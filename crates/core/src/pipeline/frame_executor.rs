//! Per-face signal computation and the execution-strategy seam.
//!
//! `compute_face_signals` is the whole per-face branch: standardize,
//! then run the four detectors. `FrameExecutor` abstracts how the
//! branches of one frame are executed (in order, or in parallel across
//! face indices); infrastructure provides the threaded implementation.

use crate::shared::error::SignalError;
use crate::shared::landmark::LandmarkSet;
use crate::signals::domain::alignment_detector::{self, AlignmentSignal};
use crate::signals::domain::blink_detector::{self, BlinkSignal};
use crate::signals::domain::delta_detector::DeltaDetector;
use crate::signals::domain::landmark_standardizer;

/// The join record: all four signals for one face at one frame, all
/// derived from the same landmark set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerFaceSignals {
    pub alignment: AlignmentSignal,
    pub blink: BlinkSignal,
    pub activity: f64,
    pub movement: f64,
}

/// Temporal state for one face slot, keyed by the face's position in
/// the per-frame list (no stable identity is assumed). Owned by the
/// pipeline driver; never shared across slots.
#[derive(Clone, Debug)]
pub struct FaceSlot {
    pub activity: DeltaDetector,
    pub movement: DeltaDetector,
}

impl FaceSlot {
    pub fn new() -> Self {
        Self {
            activity: DeltaDetector::activity(),
            movement: DeltaDetector::movement(),
        }
    }
}

impl Default for FaceSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one face's branch: blink, alignment, and activity on the
/// standardized set; movement on the raw set (position on screen is
/// exactly what standardization removes).
pub fn compute_face_signals(
    raw: &LandmarkSet,
    slot: &mut FaceSlot,
) -> Result<PerFaceSignals, SignalError> {
    let standardized = landmark_standardizer::standardize(raw)?;

    let blink = blink_detector::detect(&standardized)?;
    let alignment = alignment_detector::detect(&standardized)?;
    let activity = slot.activity.update(&standardized)?;
    let movement = slot.movement.update(raw)?;

    Ok(PerFaceSignals {
        alignment,
        blink,
        activity,
        movement,
    })
}

/// Execution strategy for one frame's per-face branches.
///
/// Implementations must return results index-aligned with `faces` and
/// must not emit partial frames: any failed branch fails the call.
pub trait FrameExecutor: Send {
    fn execute(
        &self,
        timestamp_us: i64,
        faces: &[LandmarkSet],
        slots: &mut [FaceSlot],
    ) -> Result<Vec<PerFaceSignals>, SignalError>;
}

/// Processes the faces of a frame one at a time, in list order.
pub struct SequentialFrameExecutor;

impl FrameExecutor for SequentialFrameExecutor {
    fn execute(
        &self,
        _timestamp_us: i64,
        faces: &[LandmarkSet],
        slots: &mut [FaceSlot],
    ) -> Result<Vec<PerFaceSignals>, SignalError> {
        check_slots(faces.len(), slots.len())?;
        faces
            .iter()
            .zip(slots.iter_mut())
            .map(|(face, slot)| compute_face_signals(face, slot))
            .collect()
    }
}

pub(crate) fn check_slots(faces: usize, slots: usize) -> Result<(), SignalError> {
    if faces != slots {
        return Err(SignalError::CardinalityMismatch {
            stream: "face slots",
            expected: faces,
            actual: slots,
        });
    }
    Ok(())
}
