//! Fan-out/fan-in over the per-frame face list.
//!
//! `fan_out` splits one frame's ordered list into independently
//! processable items, each tagged with its frame timestamp, positional
//! index, and the expected total. `FanIn` is the matching join barrier:
//! it re-assembles per-item outputs into the original order and emits a
//! frame's list exactly once, only when every expected item has arrived.
//! Protocol violations (duplicate index, inconsistent totals, index out
//! of range) fail loudly instead of reordering or partially emitting.

use std::collections::BTreeMap;

use crate::shared::error::SignalError;

/// Identifies one fanned-out item: which frame, which position, and how
/// many siblings the frame has.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopTag {
    pub timestamp_us: i64,
    pub index: usize,
    pub total: usize,
}

#[derive(Clone, Debug)]
pub struct LoopItem<T> {
    pub tag: LoopTag,
    pub value: T,
}

/// Tags each element of a frame's list for independent processing,
/// preserving order. An empty list fans out to nothing; the caller
/// emits the empty frame result directly without a join.
pub fn fan_out<T>(timestamp_us: i64, values: Vec<T>) -> Vec<LoopItem<T>> {
    let total = values.len();
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| LoopItem {
            tag: LoopTag {
                timestamp_us,
                index,
                total,
            },
            value,
        })
        .collect()
}

struct PendingFrame<T> {
    total: usize,
    received: usize,
    slots: Vec<Option<T>>,
}

/// Ordered join barrier for fanned-out items, keyed by frame timestamp.
///
/// Multiple frames may be pending at once (items can arrive in any
/// order, including interleaved across frames); each frame emits
/// independently when complete.
pub struct FanIn<T> {
    pending: BTreeMap<i64, PendingFrame<T>>,
}

impl<T> FanIn<T> {
    pub fn new() -> Self {
        Self {
            pending: BTreeMap::new(),
        }
    }

    /// Accepts one item. Returns the frame's complete, index-ordered
    /// list when this item was the last one expected for its timestamp.
    pub fn push(&mut self, item: LoopItem<T>) -> Result<Option<(i64, Vec<T>)>, SignalError> {
        let LoopTag {
            timestamp_us,
            index,
            total,
        } = item.tag;

        if index >= total {
            return Err(SignalError::LoopIndexOutOfRange { index, total });
        }

        let frame = self
            .pending
            .entry(timestamp_us)
            .or_insert_with(|| PendingFrame {
                total,
                received: 0,
                slots: (0..total).map(|_| None).collect(),
            });

        if frame.total != total {
            return Err(SignalError::LoopTotalMismatch {
                timestamp_us,
                expected: frame.total,
                actual: total,
            });
        }
        if frame.slots[index].is_some() {
            return Err(SignalError::DuplicateLoopIndex {
                timestamp_us,
                index,
            });
        }

        frame.slots[index] = Some(item.value);
        frame.received += 1;

        if frame.received < frame.total {
            return Ok(None);
        }

        let complete = self
            .pending
            .remove(&timestamp_us)
            .expect("pending frame exists, it was just updated");
        let values = complete.slots.into_iter().flatten().collect();
        Ok(Some((timestamp_us, values)))
    }

    /// Number of frames still waiting on items.
    pub fn pending_frames(&self) -> usize {
        self.pending.len()
    }

    /// Lowest index still missing for a pending frame, if any.
    pub fn first_missing(&self, timestamp_us: i64) -> Option<usize> {
        self.pending
            .get(&timestamp_us)
            .and_then(|frame| frame.slots.iter().position(Option::is_none))
    }
}

impl<T> Default for FanIn<T> {
    fn default() -> Self {
        Self::new()
    }
}
