//! Landmark value types: a single keypoint and the fixed-topology set.
//!
//! Coordinates live in a normalized image-relative space (x, y typically
//! in [0, 1]; z is relative depth). Specific indices carry fixed semantic
//! meaning — see `shared::topology`.

use ndarray::{Array2, ArrayView2};

use crate::shared::error::SignalError;

/// One 3D facial keypoint. Immutable once produced for a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance using only the x and y components.
    ///
    /// Eyelid gap distances ignore depth; the z estimate is too noisy
    /// at eyelid scale.
    pub fn distance_xy(&self, other: &Landmark) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64, f64)> for Landmark {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

/// Ordered, fixed-topology sequence of landmarks for one detected face.
///
/// Order is significant: detectors address landmarks by index, so a set
/// shorter than the topology a detector expects is a contract break with
/// the upstream landmark producer and is reported, never defaulted.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Checked indexed access; a missing index is a topology violation.
    pub fn get(&self, index: usize) -> Result<&Landmark, SignalError> {
        self.points.get(index).ok_or(SignalError::MissingLandmark {
            index,
            len: self.points.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Landmark> {
        self.points.iter()
    }

    /// Copies the set into an (N, 3) matrix of [x, y, z] rows.
    pub fn to_matrix(&self) -> Array2<f64> {
        let mut mat = Array2::zeros((self.points.len(), 3));
        for (i, lm) in self.points.iter().enumerate() {
            mat[[i, 0]] = lm.x;
            mat[[i, 1]] = lm.y;
            mat[[i, 2]] = lm.z;
        }
        mat
    }

    /// Rebuilds a set from an (N, 3) matrix of [x, y, z] rows.
    pub fn from_matrix(mat: ArrayView2<'_, f64>) -> Self {
        let points = mat
            .rows()
            .into_iter()
            .map(|row| Landmark::new(row[0], row[1], row[2]))
            .collect();
        Self { points }
    }
}

impl From<Vec<(f64, f64, f64)>> for LandmarkSet {
    fn from(tuples: Vec<(f64, f64, f64)>) -> Self {
        Self::new(tuples.into_iter().map(Landmark::from).collect())
    }
}

impl FromIterator<Landmark> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
