//! Skeleton topology for overlay rendering.
//!
//! The overlay is a structural traversal over a fixed joint-adjacency table:
//! each named [`Part`] maps to an ordered chain of landmark indices, and
//! [`segments`] expands those chains into drawable line segments. The table is
//! configuration data, not logic.

use itertools::Itertools;

use super::landmark::{LandmarkIdx, Landmarks};

/// Named parts of the hand skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Thumb,
    IndexFinger,
    MiddleFinger,
    RingFinger,
    Pinky,
    /// The outline surrounding the palm. Its joint chain returns to the
    /// wrist, closing the loop.
    Palm,
}

/// All drawable parts of the skeleton.
pub const ALL_PARTS: &[Part] = &[
    Part::Thumb,
    Part::IndexFinger,
    Part::MiddleFinger,
    Part::RingFinger,
    Part::Pinky,
    Part::Palm,
];

impl Part {
    /// Returns the ordered joint chain making up this part.
    ///
    /// Adjacent entries are connected by a bone segment.
    pub fn joints(self) -> &'static [LandmarkIdx] {
        use LandmarkIdx::*;
        match self {
            Part::Thumb => &[Wrist, ThumbCmc, ThumbMcp, ThumbIp, ThumbTip],
            Part::IndexFinger => &[IndexFingerMcp, IndexFingerPip, IndexFingerDip, IndexFingerTip],
            Part::MiddleFinger => &[
                MiddleFingerMcp,
                MiddleFingerPip,
                MiddleFingerDip,
                MiddleFingerTip,
            ],
            Part::RingFinger => &[RingFingerMcp, RingFingerPip, RingFingerDip, RingFingerTip],
            Part::Pinky => &[PinkyMcp, PinkyPip, PinkyDip, PinkyTip],
            Part::Palm => &[
                Wrist,
                IndexFingerMcp,
                MiddleFingerMcp,
                RingFingerMcp,
                PinkyMcp,
                Wrist,
            ],
        }
    }
}

/// Expands a landmark set into the line segments of the skeleton overlay.
///
/// Segments are yielded part by part, in [`ALL_PARTS`] order. A full 21-point
/// hand expands to exactly 21 segments.
///
/// # Panics
///
/// The returned iterator panics if `landmarks` has fewer than
/// [`NUM_LANDMARKS`][super::landmark::NUM_LANDMARKS] entries.
pub fn segments(landmarks: &Landmarks) -> impl Iterator<Item = ([f32; 2], [f32; 2])> + '_ {
    ALL_PARTS.iter().flat_map(move |part| {
        part.joints()
            .iter()
            .map(move |idx| landmarks.position(*idx as usize))
            .tuple_windows()
    })
}

#[cfg(test)]
mod tests {
    use super::super::landmark::NUM_LANDMARKS;
    use super::*;

    fn numbered_landmarks() -> Landmarks {
        // Encode the landmark index in the x coordinate so segments can be
        // traced back to the joints they connect.
        Landmarks::from_points((0..NUM_LANDMARKS).map(|i| [i as f32, 0.0]))
    }

    #[test]
    fn full_hand_has_21_segments() {
        let landmarks = numbered_landmarks();
        assert_eq!(segments(&landmarks).count(), 21);
    }

    #[test]
    fn palm_outline_is_closed() {
        let landmarks = numbered_landmarks();
        let palm: Vec<_> = segments(&landmarks).skip(16).collect();
        assert_eq!(palm.len(), 5);

        let wrist = LandmarkIdx::Wrist as usize as f32;
        assert_eq!(palm.first().unwrap().0[0], wrist);
        assert_eq!(palm.last().unwrap().1[0], wrist);
    }

    #[test]
    fn thumb_chain_starts_at_wrist() {
        let landmarks = numbered_landmarks();
        let (start, end) = segments(&landmarks).next().unwrap();
        assert_eq!(start[0], LandmarkIdx::Wrist as usize as f32);
        assert_eq!(end[0], LandmarkIdx::ThumbCmc as usize as f32);
    }
}
