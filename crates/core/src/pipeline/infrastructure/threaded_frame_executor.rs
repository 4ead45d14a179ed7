//! Parallel per-face execution with an ordered join barrier.
//!
//! Layout: one scoped worker thread per face branch, results re-joined
//! on the calling thread through `FanIn`. Each branch owns its slot's
//! mutable state exclusively, so branches never contend; the join
//! blocks until every branch for the frame has reported. A failed or
//! vanished branch fails the whole frame — no partial or reordered
//! emission.

use crate::pipeline::fan::{FanIn, LoopItem, LoopTag};
use crate::pipeline::frame_executor::{
    check_slots, compute_face_signals, FaceSlot, FrameExecutor, PerFaceSignals,
};
use crate::shared::error::SignalError;
use crate::shared::landmark::LandmarkSet;

const DEFAULT_CHANNEL_CAPACITY: usize = 8;

/// Executes face branches on scoped threads, one per face index.
///
/// Worth it when per-face work dominates (large topologies, many
/// faces); for single-face frames `SequentialFrameExecutor` avoids the
/// thread overhead. Both produce identical output for identical input.
pub struct ThreadedFrameExecutor {
    channel_capacity: usize,
}

impl ThreadedFrameExecutor {
    pub fn new() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl Default for ThreadedFrameExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameExecutor for ThreadedFrameExecutor {
    fn execute(
        &self,
        timestamp_us: i64,
        faces: &[LandmarkSet],
        slots: &mut [FaceSlot],
    ) -> Result<Vec<PerFaceSignals>, SignalError> {
        check_slots(faces.len(), slots.len())?;
        if faces.is_empty() {
            return Ok(Vec::new());
        }

        let total = faces.len();
        let (result_tx, result_rx) = crossbeam_channel::bounded::<
            LoopItem<Result<PerFaceSignals, SignalError>>,
        >(self.channel_capacity.min(total));

        std::thread::scope(|scope| {
            for (index, (face, slot)) in faces.iter().zip(slots.iter_mut()).enumerate() {
                let branch_tx = result_tx.clone();
                scope.spawn(move || {
                    let item = LoopItem {
                        tag: LoopTag {
                            timestamp_us,
                            index,
                            total,
                        },
                        value: compute_face_signals(face, slot),
                    };
                    // Send fails only when the join already gave up on
                    // the frame; the branch result is discarded then.
                    let _ = branch_tx.send(item);
                });
            }
            drop(result_tx);

            join_branches(result_rx, timestamp_us, total)
        })
    }
}

/// Drains branch results and joins them in face-index order.
fn join_branches(
    result_rx: crossbeam_channel::Receiver<LoopItem<Result<PerFaceSignals, SignalError>>>,
    timestamp_us: i64,
    total: usize,
) -> Result<Vec<PerFaceSignals>, SignalError> {
    let mut fan_in = FanIn::new();

    for item in result_rx {
        let LoopItem { tag, value } = item;
        let signals = value.map_err(|e| SignalError::BranchFailed {
            index: tag.index,
            message: e.to_string(),
        })?;

        if let Some((_, joined)) = fan_in.push(LoopItem {
            tag,
            value: signals,
        })? {
            return Ok(joined);
        }
    }

    // Channel closed before the frame completed: a branch panicked.
    let index = fan_in.first_missing(timestamp_us).unwrap_or(total);
    Err(SignalError::BranchFailed {
        index,
        message: "branch terminated without reporting a result".to_string(),
    })
}
