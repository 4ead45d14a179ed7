pub mod alignment_detector;
pub mod blink_detector;
pub mod delta_detector;
pub mod landmark_standardizer;
