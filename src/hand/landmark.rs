//! Hand landmark sets as produced by an external detector.

use nalgebra::{Point2, Rotation2, Vector2};

/// The number of landmarks in a full hand landmark set.
pub const NUM_LANDMARKS: usize = 21;

type Position = [f32; 2];

/// An ordered collection of 2D landmark positions.
///
/// Positions use normalized image coordinates (see the [crate docs]), and the
/// order of entries follows the hand-joint convention described by
/// [`LandmarkIdx`]. Entries are never reordered.
///
/// [crate docs]: crate
#[derive(Debug, Clone, PartialEq)]
pub struct Landmarks {
    positions: Box<[Position]>,
}

impl Landmarks {
    /// Creates a new [`Landmarks`] collection containing `len` preallocated landmarks.
    ///
    /// All landmarks will start with all coordinates at `0.0`.
    pub fn new(len: usize) -> Self {
        Self {
            positions: vec![[0.0, 0.0]; len].into_boxed_slice(),
        }
    }

    /// Collects landmark positions from an iterator.
    pub fn from_points<I: IntoIterator<Item = Position>>(points: I) -> Self {
        Self {
            positions: points.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns a landmark's position.
    pub fn position(&self, index: usize) -> Position {
        self.positions[index]
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [Position] {
        &mut self.positions
    }

    pub fn map_positions(&mut self, mut f: impl FnMut(Position) -> Position) {
        for pos in self.positions_mut() {
            *pos = f(*pos);
        }
    }

    pub fn average(&self) -> Position {
        let mut center = [0.0; 2];
        for pos in self.positions() {
            center[0] += pos[0] / self.positions.len() as f32;
            center[1] += pos[1] / self.positions.len() as f32;
        }
        center
    }
}

/// Detector-assigned label for which physical hand a landmark set belongs to.
///
/// Handedness describes the *physical* hand. When the camera feed is mirrored
/// for display, the detector's `Right` appears on the viewer's left; see
/// [`SlotRule`][crate::slot::SlotRule] for how this affects display slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Returns the opposite handedness, as seen on a mirrored display.
    pub fn mirrored(self) -> Self {
        match self {
            Handedness::Left => Handedness::Right,
            Handedness::Right => Handedness::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }
}

/// Names for the hand pose landmarks.
///
/// # Terminology
///
/// - **CMC**: Carpometacarpal joint, the lowest joint of the thumb, located near the wrist.
/// - **MCP**: Metacarpophalangeal joint, the lower joint forming the knuckles near the palm of
///   the hand.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

pub(crate) const PALM_LANDMARKS: &[LandmarkIdx] = {
    use LandmarkIdx::*;
    &[
        Wrist,
        ThumbCmc,
        IndexFingerMcp,
        MiddleFingerMcp,
        RingFingerMcp,
        PinkyMcp,
    ]
};

/// A detected hand: one landmark set plus the detector's handedness tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    landmarks: Landmarks,
    handedness: Handedness,
}

impl Hand {
    /// Creates a [`Hand`] from a full landmark set and a handedness tag.
    ///
    /// # Panics
    ///
    /// Panics if `landmarks` does not contain exactly [`NUM_LANDMARKS`] entries.
    pub fn new(landmarks: Landmarks, handedness: Handedness) -> Self {
        assert_eq!(
            landmarks.len(),
            NUM_LANDMARKS,
            "hand landmark set must contain {NUM_LANDMARKS} points",
        );
        Self {
            landmarks,
            handedness,
        }
    }

    pub fn landmarks(&self) -> &Landmarks {
        &self.landmarks
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Computes the center position of the hand's palm by averaging some of the landmarks.
    pub fn palm_center(&self) -> Point2<f32> {
        let mut pos = Vector2::zeros();
        for lm in PALM_LANDMARKS {
            let [x, y] = self.landmarks.position(*lm as usize);
            pos += Vector2::new(x, y);
        }

        Point2::from(pos / PALM_LANDMARKS.len() as f32)
    }

    /// Computes the clockwise rotation of the palm compared to an upright position.
    ///
    /// A rotation of 0° means that fingers are pointed upwards.
    pub fn rotation_radians(&self) -> f32 {
        let [x, y] = self.landmarks.position(LandmarkIdx::MiddleFingerMcp as usize);
        let finger = Point2::new(x, y);
        let [x, y] = self.landmarks.position(LandmarkIdx::Wrist as usize);
        let wrist = Point2::new(x, y);

        let rel = wrist - finger;
        Rotation2::rotation_between(&Vector2::y(), &rel).angle()
    }
}

/// Per-frame supplier of detected hands.
///
/// Implemented by whatever produces landmarks: a webcam capture feeding a
/// landmark-detection model, a recording, or a test script. At most two hands
/// are expected per frame; extra entries are ignored by slot assignment.
pub trait LandmarkSource {
    /// Detects hands in the next frame.
    ///
    /// An empty `Vec` means no hands are currently in view, which is not an
    /// error. Errors describe detector failures and abort the current cycle
    /// only.
    fn detect(&mut self) -> anyhow::Result<Vec<Hand>>;
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    /// An upright synthetic hand: wrist at the bottom, middle finger pointing
    /// straight up.
    fn upright_hand() -> Hand {
        let mut landmarks = Landmarks::new(NUM_LANDMARKS);
        landmarks.positions_mut()[LandmarkIdx::Wrist as usize] = [0.5, 0.8];
        landmarks.positions_mut()[LandmarkIdx::MiddleFingerMcp as usize] = [0.5, 0.5];
        Hand::new(landmarks, Handedness::Right)
    }

    #[test]
    fn upright_rotation_is_zero() {
        assert_relative_eq!(upright_hand().rotation_radians(), 0.0);
    }

    #[test]
    fn sideways_rotation_is_quarter_turn() {
        let mut landmarks = Landmarks::new(NUM_LANDMARKS);
        landmarks.positions_mut()[LandmarkIdx::Wrist as usize] = [0.2, 0.5];
        // Fingers point to the right.
        landmarks.positions_mut()[LandmarkIdx::MiddleFingerMcp as usize] = [0.5, 0.5];
        let hand = Hand::new(landmarks, Handedness::Right);

        assert_relative_eq!(
            hand.rotation_radians().abs(),
            std::f32::consts::FRAC_PI_2,
            epsilon = 1e-6,
        );
    }

    #[test]
    fn mirrored_handedness_flips() {
        assert_eq!(Handedness::Left.mirrored(), Handedness::Right);
        assert_eq!(Handedness::Right.mirrored(), Handedness::Left);
    }

    #[test]
    fn average_of_uniform_set_is_that_point() {
        let landmarks = Landmarks::from_points((0..NUM_LANDMARKS).map(|_| [0.25, 0.75]));
        let [x, y] = landmarks.average();
        assert_relative_eq!(x, 0.25, epsilon = 1e-6);
        assert_relative_eq!(y, 0.75, epsilon = 1e-6);
    }

    #[test]
    #[should_panic]
    fn incomplete_landmark_set_is_rejected() {
        Hand::new(Landmarks::new(7), Handedness::Left);
    }
}
