//! Temporal delta detection: L2 norm of landmark change between
//! consecutive frames for one tracked face slot.
//!
//! One parameterized implementation covers both variants:
//! - `Activity` flattens every landmark's x/y/z, measuring whole-face
//!   shape change (expressions, talking).
//! - `Movement` uses only the anchor landmark, measuring face position
//!   change on screen.
//!
//! Updates must arrive in frame order; out-of-order delivery corrupts
//! the delta silently, which is why the pipeline enforces monotonic
//! timestamps before state is touched.

use crate::shared::error::SignalError;
use crate::shared::landmark::LandmarkSet;
use crate::shared::topology::MOVEMENT_ANCHOR;

/// Which landmark coordinates participate in the delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaMode {
    /// All landmarks, all three coordinates.
    Activity,
    /// The anchor landmark (index 0) only.
    Movement,
}

/// Stateful per-face-slot delta detector.
///
/// First observation seeds the stored state and reports a delta of 0.0;
/// every later update reports `‖current − previous‖` and then replaces
/// the stored state unconditionally. State is never shared across slots.
#[derive(Clone, Debug)]
pub struct DeltaDetector {
    mode: DeltaMode,
    prev: Option<Vec<f64>>,
}

impl DeltaDetector {
    pub fn new(mode: DeltaMode) -> Self {
        Self { mode, prev: None }
    }

    pub fn activity() -> Self {
        Self::new(DeltaMode::Activity)
    }

    pub fn movement() -> Self {
        Self::new(DeltaMode::Movement)
    }

    pub fn mode(&self) -> DeltaMode {
        self.mode
    }

    /// Drops the stored previous-frame state; the next update reseeds.
    pub fn reset(&mut self) {
        self.prev = None;
    }

    /// Computes the delta against the previous frame and stores the
    /// current data for the next call.
    ///
    /// A flattened-length change between frames (landmark count changed
    /// mid-stream) reseeds the comparator and reports 0.0; the stateless
    /// detectors still fail loudly on missing indices, so this only
    /// arises when the upstream topology genuinely changed.
    pub fn update(&mut self, landmarks: &LandmarkSet) -> Result<f64, SignalError> {
        let current = self.flatten(landmarks)?;

        let delta = match self.prev.as_deref() {
            None => 0.0,
            Some(prev) if prev.len() != current.len() => {
                log::warn!(
                    "landmark count changed mid-stream ({} -> {} values), reseeding delta state",
                    prev.len(),
                    current.len()
                );
                0.0
            }
            Some(prev) => l2_delta(&current, prev),
        };

        self.prev = Some(current);
        Ok(delta)
    }

    fn flatten(&self, landmarks: &LandmarkSet) -> Result<Vec<f64>, SignalError> {
        match self.mode {
            DeltaMode::Activity => {
                if landmarks.is_empty() {
                    return Err(SignalError::EmptySet);
                }
                let mut flat = Vec::with_capacity(landmarks.len() * 3);
                for lm in landmarks.iter() {
                    flat.extend_from_slice(&[lm.x, lm.y, lm.z]);
                }
                Ok(flat)
            }
            DeltaMode::Movement => {
                let lm = landmarks.get(MOVEMENT_ANCHOR)?;
                Ok(vec![lm.x, lm.y, lm.z])
            }
        }
    }
}

fn l2_delta(current: &[f64], prev: &[f64]) -> f64 {
    current
        .iter()
        .zip(prev)
        .map(|(c, p)| (c - p) * (c - p))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn set(points: Vec<(f64, f64, f64)>) -> LandmarkSet {
        LandmarkSet::from(points)
    }

    #[rstest]
    #[case::activity(DeltaMode::Activity)]
    #[case::movement(DeltaMode::Movement)]
    fn test_first_frame_seeds_and_reports_zero(#[case] mode: DeltaMode) {
        let mut detector = DeltaDetector::new(mode);
        let delta = detector
            .update(&set(vec![(0.8, 0.9, 0.7), (0.1, 0.2, 0.3)]))
            .unwrap();
        assert_relative_eq!(delta, 0.0);
    }

    #[test]
    fn test_identical_consecutive_frames_yield_zero() {
        let frame = set(vec![(0.1, 0.2, 0.0), (0.4, 0.5, 0.6)]);
        let mut detector = DeltaDetector::activity();
        detector.update(&frame).unwrap();
        assert_relative_eq!(detector.update(&frame).unwrap(), 0.0);
    }

    #[test]
    fn test_movement_scenario_identical_anchor() {
        let frame = set(vec![(0.1, 0.2, 0.0)]);
        let mut detector = DeltaDetector::movement();
        detector.update(&frame).unwrap();
        assert_relative_eq!(detector.update(&frame).unwrap(), 0.0);
    }

    #[test]
    fn test_delta_is_norm_of_difference() {
        let mut detector = DeltaDetector::movement();
        detector.update(&set(vec![(0.0, 0.0, 0.0)])).unwrap();
        let delta = detector.update(&set(vec![(3.0, 4.0, 0.0)])).unwrap();
        assert_relative_eq!(delta, 5.0);
    }

    #[test]
    fn test_state_advances_to_latest_frame() {
        // delta(A→B) = ‖B−A‖, then delta(B→C) must compare against B, not A.
        let a = set(vec![(0.0, 0.0, 0.0)]);
        let b = set(vec![(1.0, 0.0, 0.0)]);
        let c = set(vec![(1.0, 2.0, 0.0)]);

        let mut detector = DeltaDetector::movement();
        detector.update(&a).unwrap();
        assert_relative_eq!(detector.update(&b).unwrap(), 1.0);
        assert_relative_eq!(detector.update(&c).unwrap(), 2.0);
    }

    #[test]
    fn test_activity_uses_all_coordinates() {
        let mut detector = DeltaDetector::activity();
        detector
            .update(&set(vec![(0.0, 0.0, 0.0), (0.0, 0.0, 0.0)]))
            .unwrap();
        // Each of the six coordinates moves by 0.1.
        let delta = detector
            .update(&set(vec![(0.1, 0.1, 0.1), (0.1, 0.1, 0.1)]))
            .unwrap();
        assert_relative_eq!(delta, (6.0_f64 * 0.01).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_movement_ignores_non_anchor_landmarks() {
        let mut detector = DeltaDetector::movement();
        detector
            .update(&set(vec![(0.5, 0.5, 0.0), (0.0, 0.0, 0.0)]))
            .unwrap();
        // Anchor unchanged, second landmark jumps.
        let delta = detector
            .update(&set(vec![(0.5, 0.5, 0.0), (0.9, 0.9, 0.9)]))
            .unwrap();
        assert_relative_eq!(delta, 0.0);
    }

    #[test]
    fn test_empty_set_rejected_for_activity() {
        let mut detector = DeltaDetector::activity();
        assert!(matches!(
            detector.update(&LandmarkSet::default()),
            Err(SignalError::EmptySet)
        ));
    }

    #[test]
    fn test_empty_set_rejected_for_movement() {
        let mut detector = DeltaDetector::movement();
        assert!(matches!(
            detector.update(&LandmarkSet::default()),
            Err(SignalError::MissingLandmark { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_landmark_count_change_reseeds() {
        let mut detector = DeltaDetector::activity();
        detector.update(&set(vec![(0.1, 0.2, 0.3)])).unwrap();
        let delta = detector
            .update(&set(vec![(0.9, 0.9, 0.9), (0.1, 0.1, 0.1)]))
            .unwrap();
        assert_relative_eq!(delta, 0.0);

        // The reseeded state is the two-landmark frame.
        let delta = detector
            .update(&set(vec![(0.9, 0.9, 0.9), (0.1, 0.1, 0.2)]))
            .unwrap();
        assert_relative_eq!(delta, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut detector = DeltaDetector::movement();
        detector.update(&set(vec![(0.0, 0.0, 0.0)])).unwrap();
        detector.reset();
        // Post-reset update is a first observation again.
        let delta = detector.update(&set(vec![(5.0, 5.0, 5.0)])).unwrap();
        assert_relative_eq!(delta, 0.0);
    }

    #[test]
    fn test_slots_do_not_share_state() {
        let mut slot_a = DeltaDetector::movement();
        let mut slot_b = DeltaDetector::movement();

        slot_a.update(&set(vec![(0.0, 0.0, 0.0)])).unwrap();
        slot_b.update(&set(vec![(1.0, 1.0, 1.0)])).unwrap();

        let probe = set(vec![(1.0, 1.0, 1.0)]);
        assert_relative_eq!(slot_a.update(&probe).unwrap(), 3.0_f64.sqrt());
        assert_relative_eq!(slot_b.update(&probe).unwrap(), 0.0);
    }
}
