use crate::shared::landmark::LandmarkSet;

/// One timestamped unit of input: zero or more landmark sets, one per
/// detected face, all sharing a single logical timestamp.
///
/// The timestamp is in microseconds and must be strictly increasing
/// across the frames fed to a pipeline; face order within a frame is the
/// detector's order and is preserved through every downstream stage.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceFrame {
    timestamp_us: i64,
    faces: Vec<LandmarkSet>,
}

impl FaceFrame {
    pub fn new(timestamp_us: i64, faces: Vec<LandmarkSet>) -> Self {
        Self {
            timestamp_us,
            faces,
        }
    }

    /// A frame with no detected faces. Not an error; propagates as
    /// empty output downstream.
    pub fn empty(timestamp_us: i64) -> Self {
        Self::new(timestamp_us, Vec::new())
    }

    pub fn timestamp_us(&self) -> i64 {
        self.timestamp_us
    }

    pub fn faces(&self) -> &[LandmarkSet] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let face = LandmarkSet::from(vec![(0.1, 0.2, 0.0)]);
        let frame = FaceFrame::new(40_000, vec![face.clone(), face]);
        assert_eq!(frame.timestamp_us(), 40_000);
        assert_eq!(frame.face_count(), 2);
        assert_eq!(frame.faces().len(), 2);
    }

    #[test]
    fn test_empty_frame_has_no_faces() {
        let frame = FaceFrame::empty(0);
        assert_eq!(frame.face_count(), 0);
        assert!(frame.faces().is_empty());
    }
}
