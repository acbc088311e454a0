//! # Style Weighting
//!
//! Each selected style gets an equal share of 100 percent: for k distinct
//! selected styles, every weight is exactly 100/k. The distribution is
//! recomputed from scratch on every selection change — weights are never
//! incrementally patched, so a stale share cannot survive a toggle.
//!
//! Weights are stored unrounded; any rounding is display-only.

use maison_profile::StyleWeight;

/// Equal-split weight distribution over the given styles, preserving
/// their order. Empty input produces an empty distribution (which the
/// style-step validation refuses to submit).
pub fn style_weights(selected: &[String]) -> Vec<StyleWeight> {
    if selected.is_empty() {
        return Vec::new();
    }
    let share = 100.0 / selected.len() as f64;
    selected
        .iter()
        .map(|style| StyleWeight {
            style: style.clone(),
            weight_percent: share,
        })
        .collect()
}
