//! Periodic detection-and-classification driver.
//!
//! [`GestureTracker`] owns the external collaborators (a
//! [`LandmarkSource`] and a [`Classifier`]) and runs the per-frame pipeline:
//! detect hands, assign them to display slots, normalize each hand's
//! landmarks, classify, decode, and publish the result into a
//! [`SessionState`] for the presentation layer to read. Everything is
//! single-threaded; one cycle runs to completion before the next can start.

use std::time::{Duration, Instant};

use crate::{
    assets,
    feature::Features,
    gesture::{Classifier, Gesture, GestureSet},
    hand::landmark::LandmarkSource,
    slot::{self, SlotRule, NUM_SLOTS},
    timer::Timer,
};

/// Configuration for a [`GestureTracker`].
#[derive(Debug, Clone)]
pub struct TrackerOptions {
    interval: Duration,
    slot_rule: SlotRule,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
            slot_rule: SlotRule::from_env(),
        }
    }
}

impl TrackerOptions {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

    /// Sets the minimum time between detection cycles.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the handedness-to-slot mapping rule.
    pub fn slot_rule(mut self, rule: SlotRule) -> Self {
        self.slot_rule = rule;
        self
    }
}

/// Presentation-facing state, updated once per completed cycle.
///
/// This is the single place the UI reads from; there is no other mutable
/// state anywhere in the pipeline.
#[derive(Debug, Clone)]
pub struct SessionState {
    camera_on: bool,
    slots: [Option<Gesture>; NUM_SLOTS],
    asset: &'static str,
}

impl SessionState {
    fn new() -> Self {
        Self {
            camera_on: false,
            slots: [None; NUM_SLOTS],
            asset: assets::FALLBACK_ASSET,
        }
    }

    pub fn camera_on(&self) -> bool {
        self.camera_on
    }

    /// The last decoded gesture for a display slot, or `None` while no hand
    /// occupies it.
    pub fn gesture(&self, slot: usize) -> Option<Gesture> {
        self.slots[slot]
    }

    /// The asset key for the current gesture combination.
    pub fn asset(&self) -> &'static str {
        self.asset
    }

    fn clear_predictions(&mut self) {
        self.slots = [None; NUM_SLOTS];
        self.asset = assets::FALLBACK_ASSET;
    }
}

/// Drives the detect → normalize → classify → decode pipeline on a fixed
/// interval.
pub struct GestureTracker {
    source: Box<dyn LandmarkSource>,
    classifier: Box<dyn Classifier>,
    gestures: GestureSet,
    interval: Duration,
    slot_rule: SlotRule,
    state: SessionState,
    next_cycle: Instant,
    t_detect: Timer,
    t_classify: Timer,
}

impl GestureTracker {
    pub fn new(
        source: impl LandmarkSource + 'static,
        classifier: impl Classifier + 'static,
        gestures: GestureSet,
    ) -> Self {
        Self::with_options(source, classifier, gestures, TrackerOptions::default())
    }

    pub fn with_options(
        source: impl LandmarkSource + 'static,
        classifier: impl Classifier + 'static,
        gestures: GestureSet,
        options: TrackerOptions,
    ) -> Self {
        Self {
            source: Box::new(source),
            classifier: Box::new(classifier),
            gestures,
            interval: options.interval,
            slot_rule: options.slot_rule,
            state: SessionState::new(),
            next_cycle: Instant::now(),
            t_detect: Timer::new("detect"),
            t_classify: Timer::new("classify"),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns profiling timers for the detect and classify phases.
    pub fn timers(&self) -> impl Iterator<Item = &Timer> + '_ {
        [&self.t_detect, &self.t_classify].into_iter()
    }

    /// Turns the camera on or off.
    ///
    /// Turning it off halts cycling entirely and clears the per-slot
    /// predictions; turning it on schedules the next cycle immediately.
    pub fn set_camera(&mut self, on: bool) {
        if self.state.camera_on == on {
            return;
        }

        self.state.camera_on = on;
        if on {
            self.next_cycle = Instant::now();
            log::debug!("camera on, cycling every {:?}", self.interval);
        } else {
            self.state.clear_predictions();
            log::debug!("camera off, detection halted");
        }
    }

    /// Runs one cycle if the camera is on and the interval has elapsed.
    ///
    /// Returns whether a cycle ran. Call this from the application's event
    /// loop; it never blocks beyond the external detector and classifier
    /// calls themselves.
    pub fn poll(&mut self) -> anyhow::Result<bool> {
        if !self.state.camera_on || Instant::now() < self.next_cycle {
            return Ok(false);
        }

        self.next_cycle += self.interval;
        self.advance()?;
        Ok(true)
    }

    /// Runs a single detection-and-classification cycle immediately.
    ///
    /// On a source or classifier error the cycle is abandoned and the
    /// previous state is kept; the caller decides whether to skip the frame
    /// or surface a warning. A frame without hands clears both slots.
    pub fn advance(&mut self) -> anyhow::Result<()> {
        let hands = self.t_detect.time(|| self.source.detect())?;
        let slots = slot::assign(self.slot_rule, hands);

        let mut decoded: [Option<Gesture>; NUM_SLOTS] = [None; NUM_SLOTS];
        for (index, hand) in slots.iter().enumerate() {
            let Some(hand) = hand else { continue };

            let features = Features::extract(hand.landmarks());
            let probabilities = self.t_classify.time(|| self.classifier.infer(&features))?;
            let gesture = self.gestures.decode(&probabilities)?;
            log::trace!(
                "slot {index}: {} hand decoded as {}",
                hand.handedness().as_str(),
                gesture.name(),
            );
            decoded[index] = Some(gesture);
        }

        self.state.slots = decoded;
        self.state.asset = assets::asset_for(
            decoded[0].map(|g| g.name()),
            decoded[1].map(|g| g.name()),
        );
        Ok(())
    }
}
