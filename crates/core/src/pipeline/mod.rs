pub mod aggregator;
pub mod fan;
pub mod frame_executor;
pub mod infrastructure;
pub mod proctor_pipeline;
pub mod proctor_result;
