pub mod error;
pub mod frame;
pub mod landmark;
pub mod signal_map;
pub mod topology;
