//! Landmark feature extraction.
//!
//! Classifier models consume a hand as a flat, position- and scale-invariant
//! feature vector rather than raw image coordinates. This module performs that
//! conversion; it is the only numeric transformation between the landmark
//! detector and the classifier.

use crate::hand::landmark::Landmarks;

/// A flat, normalized feature vector derived from a landmark set.
///
/// The layout is `x0, y0, x1, y1, …`: one coordinate pair per landmark, in
/// landmark order. After construction the first pair is `(0, 0)` and the
/// maximum absolute value across all entries is `1.0`, unless the source
/// landmarks were all coincident with the base point, in which case every
/// entry is `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    values: Box<[f32]>,
}

impl Features {
    /// Flattens `landmarks` into coordinate pairs and normalizes them.
    pub fn extract(landmarks: &Landmarks) -> Self {
        let mut values = Vec::with_capacity(landmarks.len() * 2);
        for &[x, y] in landmarks.positions() {
            values.push(x);
            values.push(y);
        }
        Self::from_flat(values)
    }

    /// Normalizes an already flattened coordinate sequence.
    ///
    /// The sequence may describe any number of landmarks, not just full
    /// 21-point hands.
    ///
    /// # Panics
    ///
    /// Panics if `values` has an odd length.
    pub fn from_flat(mut values: Vec<f32>) -> Self {
        assert!(
            values.len() % 2 == 0,
            "flat landmark sequence must consist of (x, y) pairs",
        );
        normalize(&mut values);
        Self {
            values: values.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}

/// Makes `values` translation-invariant by subtracting the base point (the
/// first coordinate pair) from every pair, then scale-invariant by dividing
/// all entries by the maximum absolute value, mapping them into `[-1, 1]`.
///
/// If every point coincides with the base point the maximum is zero; the
/// sequence is left all-zero rather than dividing, so no NaN or infinity can
/// escape.
fn normalize(values: &mut [f32]) {
    if values.is_empty() {
        return;
    }

    let (base_x, base_y) = (values[0], values[1]);
    for pair in values.chunks_exact_mut(2) {
        pair[0] -= base_x;
        pair[1] -= base_y;
    }

    let max = values.iter().fold(0.0f32, |max, v| max.max(v.abs()));
    if max == 0.0 {
        return;
    }
    for v in values.iter_mut() {
        *v /= max;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::hand::landmark::NUM_LANDMARKS;

    use super::*;

    fn random_landmarks() -> Landmarks {
        Landmarks::from_points((0..NUM_LANDMARKS).map(|_| [fastrand::f32(), fastrand::f32()]))
    }

    #[test]
    fn base_point_becomes_origin() {
        for _ in 0..100 {
            let features = Features::extract(&random_landmarks());
            assert_eq!(features.as_slice()[0], 0.0);
            assert_eq!(features.as_slice()[1], 0.0);
        }
    }

    #[test]
    fn max_abs_is_one() {
        for _ in 0..100 {
            let landmarks = random_landmarks();
            if landmarks.positions().iter().all(|p| *p == landmarks.position(0)) {
                continue;
            }

            let features = Features::extract(&landmarks);
            let max = features
                .as_slice()
                .iter()
                .fold(0.0f32, |max, v| max.max(v.abs()));
            assert_relative_eq!(max, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn output_stays_in_range_and_finite() {
        for _ in 0..100 {
            let features = Features::extract(&random_landmarks());
            for &v in features.as_slice() {
                assert!(v.is_finite());
                assert!((-1.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        for _ in 0..100 {
            let features = Features::extract(&random_landmarks());
            let renormalized = Features::from_flat(features.as_slice().to_vec());
            for (&a, &b) in features.as_slice().iter().zip(renormalized.as_slice()) {
                assert_relative_eq!(a, b, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn degenerate_input_yields_zero_vector() {
        let landmarks = Landmarks::from_points((0..NUM_LANDMARKS).map(|_| [0.3, 0.7]));
        let features = Features::extract(&landmarks);
        assert_eq!(features.len(), NUM_LANDMARKS * 2);
        assert!(features.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn worked_example() {
        let features = Features::from_flat(vec![0.5, 0.5, 0.6, 0.5, 0.5, 0.6]);
        let expected = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        for (&v, &e) in features.as_slice().iter().zip(&expected) {
            assert_relative_eq!(v, e, epsilon = 1e-6);
        }
    }

    #[test]
    fn empty_input_is_allowed() {
        assert!(Features::from_flat(Vec::new()).is_empty());
    }

    #[test]
    #[should_panic]
    fn odd_length_input_is_rejected() {
        Features::from_flat(vec![0.1, 0.2, 0.3]);
    }
}
