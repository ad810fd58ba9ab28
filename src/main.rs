//! Replays a short scripted "webcam session" through the full gesture
//! pipeline and logs what the presentation layer would display.
//!
//! No webcam or classifier model is required; the collaborators are scripted
//! stand-ins wired up through the same trait boundaries a real deployment
//! uses.

use std::collections::VecDeque;
use std::time::Duration;

use mudra::gesture::{Classifier, GestureSet};
use mudra::hand::landmark::{Hand, Handedness, Landmarks, LandmarkSource, NUM_LANDMARKS};
use mudra::feature::Features;
use mudra::timer::FpsCounter;
use mudra::tracker::{GestureTracker, TrackerOptions};

/// Replays pre-recorded frames, looping when the script runs out.
struct ScriptedSource {
    frames: Vec<Vec<Hand>>,
    cursor: usize,
}

impl LandmarkSource for ScriptedSource {
    fn detect(&mut self) -> anyhow::Result<Vec<Hand>> {
        let frame = self.frames[self.cursor % self.frames.len()].clone();
        self.cursor += 1;
        Ok(frame)
    }
}

/// Cycles through canned softmax outputs, one per detected hand.
struct CannedClassifier {
    outputs: VecDeque<Vec<f32>>,
}

impl Classifier for CannedClassifier {
    fn infer(&mut self, _features: &Features) -> anyhow::Result<Vec<f32>> {
        let output = self.outputs.pop_front().expect("canned output available");
        self.outputs.push_back(output.clone());
        Ok(output)
    }
}

/// A vaguely hand-shaped landmark set, good enough to exercise the pipeline.
fn scripted_hand(handedness: Handedness, offset_x: f32) -> Hand {
    let landmarks = Landmarks::from_points((0..NUM_LANDMARKS).map(|i| {
        let finger = (i % 4) as f32;
        [offset_x + 0.02 * finger, 0.8 - 0.03 * i as f32 / 2.0]
    }));
    Hand::new(landmarks, handedness)
}

fn main() -> anyhow::Result<()> {
    mudra::init_logger!();

    let source = ScriptedSource {
        frames: vec![
            vec![
                scripted_hand(Handedness::Right, 0.2),
                scripted_hand(Handedness::Left, 0.7),
            ],
            vec![scripted_hand(Handedness::Right, 0.25)],
            vec![],
        ],
        cursor: 0,
    };
    let classifier = CannedClassifier {
        outputs: VecDeque::from([
            vec![0.8, 0.1, 0.1],
            vec![0.1, 0.7, 0.2],
            vec![0.2, 0.2, 0.6],
        ]),
    };

    let mut tracker = GestureTracker::with_options(
        source,
        classifier,
        GestureSet::classic(),
        TrackerOptions::default().interval(Duration::from_millis(100)),
    );
    tracker.set_camera(true);

    let mut fps = FpsCounter::new("demo");
    for _ in 0..30 {
        if tracker.poll()? {
            let state = tracker.state();
            let glyph = |slot: usize| state.gesture(slot).map(|g| g.glyph()).unwrap_or("·");
            log::info!(
                "slot 0: {}  slot 1: {}  asset: {}",
                glyph(0),
                glyph(1),
                state.asset(),
            );
            fps.tick_with(tracker.timers());
        }

        std::thread::sleep(Duration::from_millis(20));
    }

    tracker.set_camera(false);
    log::info!("camera off, final asset: {}", tracker.state().asset());
    Ok(())
}
