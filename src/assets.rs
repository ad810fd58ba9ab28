//! Composite gesture → presentation asset selection.
//!
//! Every combination of per-slot gesture labels maps to one cartoon asset
//! identifier. The mapping is configuration data (a static table keyed by
//! label pair), not logic; the presentation layer resolves the returned key
//! to an actual image however it likes.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Asset shown when no table entry matches, including the "no hands" case.
pub const FALLBACK_ASSET: &str = "cartoon/idle";

type LabelPair = (Option<&'static str>, Option<&'static str>);

/// All combinations observed with the classic 3-category label set. Pairs
/// not listed here (including both slots empty) resolve to
/// [`FALLBACK_ASSET`].
static ASSET_TABLE: Lazy<HashMap<LabelPair, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ((Some("open-palm"), Some("open-palm")), "cartoon/open-palm+open-palm"),
        ((Some("open-palm"), Some("fist")), "cartoon/open-palm+fist"),
        ((Some("open-palm"), Some("pointer")), "cartoon/open-palm+pointer"),
        ((Some("fist"), Some("open-palm")), "cartoon/fist+open-palm"),
        ((Some("fist"), Some("fist")), "cartoon/fist+fist"),
        ((Some("fist"), Some("pointer")), "cartoon/fist+pointer"),
        ((Some("pointer"), Some("open-palm")), "cartoon/pointer+open-palm"),
        ((Some("pointer"), Some("fist")), "cartoon/pointer+fist"),
        ((Some("pointer"), Some("pointer")), "cartoon/pointer+pointer"),
        ((Some("open-palm"), None), "cartoon/open-palm+none"),
        ((Some("fist"), None), "cartoon/fist+none"),
        ((Some("pointer"), None), "cartoon/pointer+none"),
        ((None, Some("open-palm")), "cartoon/none+open-palm"),
        ((None, Some("fist")), "cartoon/none+fist"),
        ((None, Some("pointer")), "cartoon/none+pointer"),
    ])
});

/// Looks up the asset for a pair of per-slot gesture labels.
pub fn asset_for(slot0: Option<&'static str>, slot1: Option<&'static str>) -> &'static str {
    ASSET_TABLE
        .get(&(slot0, slot1))
        .copied()
        .unwrap_or(FALLBACK_ASSET)
}

#[cfg(test)]
mod tests {
    use crate::gesture::GestureSet;

    use super::*;

    #[test]
    fn known_pairs_resolve() {
        assert_eq!(
            asset_for(Some("fist"), Some("open-palm")),
            "cartoon/fist+open-palm"
        );
        assert_eq!(asset_for(Some("pointer"), None), "cartoon/pointer+none");
    }

    #[test]
    fn both_empty_falls_back() {
        assert_eq!(asset_for(None, None), FALLBACK_ASSET);
    }

    #[test]
    fn unknown_labels_fall_back() {
        assert_eq!(asset_for(Some("thumbs-up"), None), FALLBACK_ASSET);
    }

    #[test]
    fn classic_set_is_fully_covered() {
        let names: Vec<_> = GestureSet::classic()
            .gestures()
            .iter()
            .map(|g| Some(g.name()))
            .chain([None])
            .collect();

        for &a in &names {
            for &b in &names {
                if a.is_none() && b.is_none() {
                    continue;
                }
                assert_ne!(
                    asset_for(a, b),
                    FALLBACK_ASSET,
                    "missing table entry for {a:?} + {b:?}",
                );
            }
        }
    }
}
