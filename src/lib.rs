//! Mudra hand-gesture recognition core.
//!
//! This crate implements the reproducible core of a webcam gesture demo:
//! landmark feature normalization, gesture decoding, two-hand display-slot
//! assignment, composite asset selection, the skeleton-overlay geometry, and
//! the periodic driver that ties the external landmark detector and gesture
//! classifier together. Detection and classification themselves are delegated
//! to collaborators behind the [`LandmarkSource`] and [`Classifier`] traits.
//!
//! [`LandmarkSource`]: hand::landmark::LandmarkSource
//! [`Classifier`]: gesture::Classifier
//!
//! # Coordinates
//!
//! Landmarks arrive in normalized image coordinates: X and Y in `[0, 1]`, with
//! the origin at the top-left of the camera frame, X pointing right and Y
//! pointing down. The display mirrors the camera feed horizontally, which
//! affects both slot assignment ([`slot`]) and overlay rendering
//! ([`overlay`]).
//!
//! # Environment Variables
//!
//! Some parts of Mudra can be overridden by setting environment variables:
//!
//! * `MUDRA_SLOT_RULE`: Configures how detector handedness maps to display
//!   slots. Allowed values are:
//!   * `mirrored`: the detector's "Right" hand takes the first slot, matching
//!     a mirrored camera feed. This is the default.
//!   * `direct`: the detector's "Left" hand takes the first slot.

use log::LevelFilter;

pub mod assets;
pub mod feature;
pub mod gesture;
pub mod hand;
pub mod overlay;
pub mod slot;
pub mod timer;
pub mod tracker;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and Mudra will log at *debug* level; `RUST_LOG` can
/// override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
