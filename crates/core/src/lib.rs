//! Per-frame behavioral signals for tracked faces.
//!
//! Takes a stream of timestamped, normalized facial landmark frames
//! (zero or more faces per frame) and computes four signals per face —
//! eye blink, gaze alignment, facial activity, and face movement —
//! then joins them into one `ProctorResult` per face per frame for
//! downstream visualization or decision logic.
//!
//! The crate does not capture video, detect landmarks, or draw; those
//! are external collaborators. Entry point: `pipeline::proctor_pipeline::ProctorPipeline`.

pub mod pipeline;
pub mod render;
pub mod shared;
pub mod signals;
