//! String-keyed boundary form of detector outputs.
//!
//! Internally every detector produces a typed record; the map form exists
//! only at the external interface, where consumers expect the original
//! string-keyed wire format. Keys are fixed per detector and a missing
//! key is a contract violation on the consumer's side.

use std::collections::BTreeMap;

use crate::signals::domain::alignment_detector::AlignmentSignal;
use crate::signals::domain::blink_detector::BlinkSignal;

pub type SignalMap = BTreeMap<String, f64>;

pub const KEY_LEFT: &str = "left";
pub const KEY_RIGHT: &str = "right";
pub const KEY_THRESHOLD: &str = "threshold";
pub const KEY_HORIZONTAL_ALIGN: &str = "horizontal_align";
pub const KEY_VERTICAL_ALIGN: &str = "vertical_align";

impl From<&BlinkSignal> for SignalMap {
    fn from(signal: &BlinkSignal) -> Self {
        SignalMap::from([
            (KEY_LEFT.to_string(), signal.left),
            (KEY_RIGHT.to_string(), signal.right),
            (KEY_THRESHOLD.to_string(), signal.threshold),
        ])
    }
}

impl From<&AlignmentSignal> for SignalMap {
    fn from(signal: &AlignmentSignal) -> Self {
        SignalMap::from([
            (KEY_HORIZONTAL_ALIGN.to_string(), signal.horizontal),
            (KEY_VERTICAL_ALIGN.to_string(), signal.vertical),
        ])
    }
}
