use thiserror::Error;

/// Errors surfaced by the signal detectors and the frame pipeline.
///
/// Detector-local errors (`MissingLandmark`, `EmptySet`, `DegenerateAxis`)
/// fail a single invocation; synchronization errors abort aggregation for
/// one frame only — the pipeline keeps processing subsequent frames.
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("landmark set has no landmark at index {index} (set length {len})")]
    MissingLandmark { index: usize, len: usize },

    #[error("landmark set is empty")]
    EmptySet,

    #[error("zero variance on {axis} axis, standardization undefined")]
    DegenerateAxis { axis: char },

    #[error("{stream} stream has {actual} entries, expected {expected}")]
    CardinalityMismatch {
        stream: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate loop item index {index} at timestamp {timestamp_us}")]
    DuplicateLoopIndex { timestamp_us: i64, index: usize },

    #[error("loop total changed from {expected} to {actual} at timestamp {timestamp_us}")]
    LoopTotalMismatch {
        timestamp_us: i64,
        expected: usize,
        actual: usize,
    },

    #[error("loop item index {index} out of range for total {total}")]
    LoopIndexOutOfRange { index: usize, total: usize },

    #[error("frame timestamp {got_us} is not after previous timestamp {last_us}")]
    NonMonotonicTimestamp { last_us: i64, got_us: i64 },

    #[error("per-face branch {index} failed: {message}")]
    BranchFailed { index: usize, message: String },
}
