//! Display-slot assignment for detected hands.
//!
//! The presentation layer shows up to two predictions in fixed positions
//! ("slot 0" on the viewer's left, "slot 1" on the viewer's right). Detected
//! hands carry a physical [`Handedness`], and because the camera feed is
//! mirrored for display, the detector's "Right" hand is the one the viewer
//! sees on the left. [`SlotRule`] pins down that mapping in one place instead
//! of leaving each caller to re-derive it.

use std::env;

use crate::hand::landmark::{Hand, Handedness};

/// The number of display slots.
pub const NUM_SLOTS: usize = 2;

/// Rule mapping detector handedness to display slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotRule {
    /// The camera feed is mirrored for display: the detector's "Right" hand
    /// appears on the viewer's left and takes slot 0.
    #[default]
    Mirrored,
    /// The feed is shown as captured: the detector's "Left" hand takes
    /// slot 0.
    Direct,
}

impl SlotRule {
    /// Reads the rule from the `MUDRA_SLOT_RULE` environment variable.
    ///
    /// Unset or unrecognized values fall back to [`SlotRule::Mirrored`].
    pub fn from_env() -> Self {
        match env::var("MUDRA_SLOT_RULE").as_deref() {
            Ok("direct") => SlotRule::Direct,
            Ok("mirrored") | Err(_) => SlotRule::Mirrored,
            Ok(other) => {
                log::warn!("unknown MUDRA_SLOT_RULE value `{other}`, using `mirrored`");
                SlotRule::Mirrored
            }
        }
    }

    /// Returns the preferred slot for a hand with the given handedness.
    pub fn slot_of(self, handedness: Handedness) -> usize {
        match (self, handedness) {
            (SlotRule::Mirrored, Handedness::Right) | (SlotRule::Direct, Handedness::Left) => 0,
            _ => 1,
        }
    }
}

/// Assigns detected hands to display slots.
///
/// Each hand goes to the slot its handedness prefers under `rule`. Detectors
/// occasionally report two hands with the same handedness; the first claimant
/// keeps the contested slot and the other takes the remaining free one. Any
/// further hands are dropped. A slot without a hand stays `None`, which is
/// the regular "no gesture" state rather than an error.
pub fn assign(rule: SlotRule, hands: Vec<Hand>) -> [Option<Hand>; NUM_SLOTS] {
    let mut slots: [Option<Hand>; NUM_SLOTS] = [None, None];
    for hand in hands {
        let preferred = rule.slot_of(hand.handedness());
        let free = if slots[preferred].is_none() {
            Some(preferred)
        } else {
            slots.iter().position(Option::is_none)
        };

        match free {
            Some(slot) => slots[slot] = Some(hand),
            None => log::debug!(
                "both slots taken, dropping extra {} hand",
                hand.handedness().as_str(),
            ),
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use crate::hand::landmark::{Landmarks, NUM_LANDMARKS};

    use super::*;

    fn hand(handedness: Handedness) -> Hand {
        Hand::new(Landmarks::new(NUM_LANDMARKS), handedness)
    }

    #[test]
    fn mirrored_rule_puts_detector_right_first() {
        let slots = assign(
            SlotRule::Mirrored,
            vec![hand(Handedness::Left), hand(Handedness::Right)],
        );
        assert_eq!(slots[0].as_ref().unwrap().handedness(), Handedness::Right);
        assert_eq!(slots[1].as_ref().unwrap().handedness(), Handedness::Left);
    }

    #[test]
    fn direct_rule_puts_detector_left_first() {
        let slots = assign(
            SlotRule::Direct,
            vec![hand(Handedness::Right), hand(Handedness::Left)],
        );
        assert_eq!(slots[0].as_ref().unwrap().handedness(), Handedness::Left);
        assert_eq!(slots[1].as_ref().unwrap().handedness(), Handedness::Right);
    }

    #[test]
    fn single_hand_fills_only_its_slot() {
        let slots = assign(SlotRule::Mirrored, vec![hand(Handedness::Right)]);
        assert!(slots[0].is_some());
        assert!(slots[1].is_none());
    }

    #[test]
    fn duplicate_handedness_falls_back_to_free_slot() {
        let slots = assign(
            SlotRule::Mirrored,
            vec![hand(Handedness::Right), hand(Handedness::Right)],
        );
        assert!(slots[0].is_some());
        assert!(slots[1].is_some());
    }

    #[test]
    fn extra_hands_are_dropped() {
        let slots = assign(
            SlotRule::Mirrored,
            vec![
                hand(Handedness::Right),
                hand(Handedness::Left),
                hand(Handedness::Right),
            ],
        );
        assert_eq!(slots.iter().flatten().count(), 2);
    }

    #[test]
    fn env_override_selects_direct_rule() {
        env::set_var("MUDRA_SLOT_RULE", "direct");
        assert_eq!(SlotRule::from_env(), SlotRule::Direct);
        env::set_var("MUDRA_SLOT_RULE", "bogus");
        assert_eq!(SlotRule::from_env(), SlotRule::Mirrored);
        env::remove_var("MUDRA_SLOT_RULE");
        assert_eq!(SlotRule::from_env(), SlotRule::Mirrored);
    }
}
