/// Aggregated behavioral record for one face at one frame.
///
/// Created by the aggregator, consumed by rendering or decision logic;
/// never mutated after creation. One instance exists per (face, frame).
#[derive(Clone, Debug, PartialEq)]
pub struct ProctorResult {
    pub is_left_eye_blinking: bool,
    pub is_right_eye_blinking: bool,
    pub horizontal_align: f64,
    pub vertical_align: f64,
    pub facial_activity: f64,
    pub face_movement: f64,
}
