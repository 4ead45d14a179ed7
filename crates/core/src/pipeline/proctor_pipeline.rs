//! Frame-level pipeline driver.
//!
//! Owns the per-face-slot temporal state and a timestamp watermark,
//! delegates branch execution to a `FrameExecutor`, and aggregates the
//! joined signals into `ProctorResult` records. Frames must arrive in
//! strict timestamp order; a rejected or failed frame aborts only that
//! frame — subsequent in-order frames proceed normally.

use crate::shared::error::SignalError;
use crate::shared::frame::FaceFrame;

use super::aggregator;
use super::frame_executor::{FaceSlot, FrameExecutor, SequentialFrameExecutor};
use super::proctor_result::ProctorResult;

pub struct ProctorPipeline {
    executor: Box<dyn FrameExecutor>,
    slots: Vec<FaceSlot>,
    last_timestamp_us: Option<i64>,
}

impl ProctorPipeline {
    pub fn new() -> Self {
        Self::with_executor(Box::new(SequentialFrameExecutor))
    }

    pub fn with_executor(executor: Box<dyn FrameExecutor>) -> Self {
        Self {
            executor,
            slots: Vec::new(),
            last_timestamp_us: None,
        }
    }

    /// Number of face slots currently carrying temporal state.
    pub fn tracked_faces(&self) -> usize {
        self.slots.len()
    }

    /// Processes one frame into per-face results, index-aligned with
    /// the frame's face list.
    ///
    /// Zero faces is a no-op frame and yields an empty list (the slot
    /// arena resets, since slot index is positional rather than a
    /// stable identity). A non-monotonic timestamp rejects the frame
    /// before any state is touched.
    pub fn process(&mut self, frame: &FaceFrame) -> Result<Vec<ProctorResult>, SignalError> {
        let timestamp_us = frame.timestamp_us();
        if let Some(last_us) = self.last_timestamp_us {
            if timestamp_us <= last_us {
                return Err(SignalError::NonMonotonicTimestamp {
                    last_us,
                    got_us: timestamp_us,
                });
            }
        }
        self.last_timestamp_us = Some(timestamp_us);

        let face_count = frame.face_count();
        if face_count != self.slots.len() {
            if !self.slots.is_empty() {
                log::warn!(
                    "face count changed from {} to {} at timestamp {}, resetting delta state",
                    self.slots.len(),
                    face_count,
                    timestamp_us
                );
            }
            self.slots = (0..face_count).map(|_| FaceSlot::new()).collect();
        }

        if face_count == 0 {
            log::debug!("frame {timestamp_us}: no faces");
            return Ok(Vec::new());
        }

        let signals = self
            .executor
            .execute(timestamp_us, frame.faces(), &mut self.slots)?;

        log::debug!("frame {timestamp_us}: {face_count} faces processed");

        Ok(signals
            .iter()
            .map(|s| aggregator::aggregate_face(&s.alignment, &s.blink, s.activity, s.movement))
            .collect())
    }
}

impl Default for ProctorPipeline {
    fn default() -> Self {
        Self::new()
    }
}
