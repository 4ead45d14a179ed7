//! Zero-mean, unit-variance standardization of landmark sets.
//!
//! Each coordinate axis is standardized independently against the
//! population mean and standard deviation of the whole set, making
//! downstream signals invariant to face scale and position in the image.

use ndarray::Axis;

use crate::shared::error::SignalError;
use crate::shared::landmark::LandmarkSet;

const AXIS_NAMES: [char; 3] = ['x', 'y', 'z'];

/// Standardizes one landmark set. Pure; no retained state.
///
/// Output has the same length and topology as the input. A zero-variance
/// axis (every landmark sharing one coordinate) has no defined transform
/// and is reported as `DegenerateAxis` rather than propagated as NaN.
pub fn standardize(set: &LandmarkSet) -> Result<LandmarkSet, SignalError> {
    if set.is_empty() {
        return Err(SignalError::EmptySet);
    }

    let mat = set.to_matrix();
    let mut out = mat.clone();

    for (col, &axis) in AXIS_NAMES.iter().enumerate() {
        let column = mat.index_axis(Axis(1), col);
        let mean = column.mean().ok_or(SignalError::EmptySet)?;
        // Population stddev (ddof = 0), matching per-column meanStdDev.
        let stddev = column.std(0.0);

        if stddev == 0.0 {
            return Err(SignalError::DegenerateAxis { axis });
        }

        out.index_axis_mut(Axis(1), col)
            .mapv_inplace(|v| (v - mean) / stddev);
    }

    Ok(LandmarkSet::from_matrix(out.view()))
}

/// Standardizes each set of a multi-face frame independently,
/// preserving face order.
pub fn standardize_all(sets: &[LandmarkSet]) -> Result<Vec<LandmarkSet>, SignalError> {
    sets.iter().map(standardize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Axis;
    use rstest::rstest;

    fn spread_set() -> LandmarkSet {
        LandmarkSet::from(vec![
            (0.1, 0.9, -0.02),
            (0.4, 0.3, 0.01),
            (0.7, 0.5, 0.05),
            (0.2, 0.6, -0.04),
            (0.9, 0.1, 0.03),
        ])
    }

    #[test]
    fn test_output_has_zero_mean_unit_stddev_per_axis() {
        let out = standardize(&spread_set()).unwrap();
        let mat = out.to_matrix();

        for col in 0..3 {
            let column = mat.index_axis(Axis(1), col);
            assert_relative_eq!(column.mean().unwrap(), 0.0, epsilon = 1e-12);
            assert_relative_eq!(column.std(0.0), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_output_preserves_length() {
        let set = spread_set();
        let out = standardize(&set).unwrap();
        assert_eq!(out.len(), set.len());
    }

    #[test]
    fn test_relative_order_preserved_within_axis() {
        // Standardization is affine per axis, so ordering must survive.
        let out = standardize(&spread_set()).unwrap();
        let xs: Vec<f64> = out.iter().map(|lm| lm.x).collect();
        assert!(xs[4] > xs[2]); // 0.9 vs 0.7
        assert!(xs[2] > xs[1]); // 0.7 vs 0.4
        assert!(xs[0] < xs[3]); // 0.1 vs 0.2
    }

    #[rstest]
    #[case::constant_x('x', vec![(0.5, 0.1, 0.2), (0.5, 0.3, 0.4), (0.5, 0.9, 0.6)])]
    #[case::constant_y('y', vec![(0.1, 0.5, 0.2), (0.3, 0.5, 0.4), (0.9, 0.5, 0.6)])]
    #[case::constant_z('z', vec![(0.1, 0.2, 0.5), (0.3, 0.4, 0.5), (0.9, 0.6, 0.5)])]
    fn test_zero_variance_axis_is_reported(
        #[case] expected_axis: char,
        #[case] points: Vec<(f64, f64, f64)>,
    ) {
        let err = standardize(&LandmarkSet::from(points)).unwrap_err();
        assert!(matches!(
            err,
            SignalError::DegenerateAxis { axis } if axis == expected_axis
        ));
    }

    #[test]
    fn test_single_landmark_is_degenerate() {
        let set = LandmarkSet::from(vec![(0.5, 0.5, 0.5)]);
        assert!(matches!(
            standardize(&set),
            Err(SignalError::DegenerateAxis { .. })
        ));
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(matches!(
            standardize(&LandmarkSet::default()),
            Err(SignalError::EmptySet)
        ));
    }

    #[test]
    fn test_standardize_all_preserves_order() {
        let a = spread_set();
        let b = LandmarkSet::from(vec![
            (0.2, 0.1, 0.3),
            (0.5, 0.8, -0.1),
            (0.9, 0.4, 0.2),
        ]);
        let out = standardize_all(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], standardize(&a).unwrap());
        assert_eq!(out[1], standardize(&b).unwrap());
    }

    #[test]
    fn test_standardize_all_empty_frame() {
        let out = standardize_all(&[]).unwrap();
        assert!(out.is_empty());
    }
}
