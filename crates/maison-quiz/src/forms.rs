//! # Per-Step Forms
//!
//! One explicit typed struct per quiz step. The earlier web client pulled
//! everything out of a flat `FormData` bag at submit time; here every
//! field lands in its typed slot as the user edits, and aggregation reads
//! the structs, never strings.

use std::collections::{BTreeMap, BTreeSet};

use maison_core::RoomSize;
use maison_profile::{Dimensions, ImageRef};

/// The style catalog shown on the style step: five styles, three catalog
/// images each. Toggling an image toggles that style's selection set.
pub const STYLE_CATALOG: [(&str, [&str; 3]); 5] = [
    ("Bohemian", ["boho1", "boho2", "boho3"]),
    ("Modern", ["modern1", "modern2", "modern3"]),
    ("Midcentury", ["midcen1", "midcen2", "midcen3"]),
    ("Scandinavian", ["scandi1", "scandi2", "scandi3"]),
    ("Traditional", ["trad1", "trad2", "trad3"]),
];

/// Position of a style in the catalog, used to keep the stored style
/// list in catalog order.
fn catalog_index(style: &str) -> Option<usize> {
    STYLE_CATALOG.iter().position(|(name, _)| *name == style)
}

/// All per-step forms of one quiz session.
#[derive(Debug, Clone, Default)]
pub struct QuizForms {
    /// The space step.
    pub space: SpaceForm,
    /// The style step.
    pub style: StyleForm,
    /// The preferences step.
    pub preferences: PreferencesForm,
    /// The usage step (companion-app quiz only; ignored otherwise).
    pub usage: UsageForm,
    /// The budget step.
    pub budget: BudgetForm,
}

/// The space step: room size, optional dimensions, room photos.
#[derive(Debug, Clone, Default)]
pub struct SpaceForm {
    /// Room size in whichever unit is currently active. Required.
    pub room_size: Option<RoomSize>,
    /// Optional width/depth/height, in inches.
    pub dimensions: Dimensions,
    /// Room photos attached so far. Each completed file read appends one.
    pub photos: Vec<ImageRef>,
}

impl SpaceForm {
    /// Append an encoded room photo.
    pub fn attach_photo(&mut self, photo: ImageRef) {
        self.photos.push(photo);
    }

    /// Toggle the room-size unit, converting the entered value (display
    /// rounding applies). No-op while no size has been entered.
    pub fn toggle_unit(&mut self) {
        if let Some(size) = self.room_size {
            self.room_size = Some(size.toggle_unit());
        }
    }
}

/// The style step: which catalog images are selected, grouped by style.
///
/// A style counts as selected while at least one of its images is
/// selected. The weight distribution is derived from the distinct
/// selected styles — never from image counts.
#[derive(Debug, Clone, Default)]
pub struct StyleForm {
    selected_images: BTreeMap<String, BTreeSet<String>>,
}

impl StyleForm {
    /// Toggle one catalog image. Returns whether the image is selected
    /// after the toggle.
    pub fn toggle_image(&mut self, style: &str, image: &str) -> bool {
        let images = self.selected_images.entry(style.to_string()).or_default();
        let now_selected = if images.remove(image) {
            false
        } else {
            images.insert(image.to_string());
            true
        };
        if images.is_empty() {
            self.selected_images.remove(style);
        }
        now_selected
    }

    /// The distinct selected styles, in catalog order (styles outside the
    /// catalog sort after it, alphabetically).
    pub fn selected_styles(&self) -> Vec<String> {
        let mut styles: Vec<String> = self
            .selected_images
            .iter()
            .filter(|(_, images)| !images.is_empty())
            .map(|(style, _)| style.clone())
            .collect();
        styles.sort_by_key(|style| (catalog_index(style).unwrap_or(usize::MAX), style.clone()));
        styles
    }

    /// Whether no style is selected.
    pub fn is_empty(&self) -> bool {
        self.selected_images.is_empty()
    }

    /// How many images of the given style are selected.
    pub fn selected_image_count(&self, style: &str) -> usize {
        self.selected_images.get(style).map_or(0, BTreeSet::len)
    }
}

/// The preferences step: color/comfort/feature tags. All optional.
#[derive(Debug, Clone, Default)]
pub struct PreferencesForm {
    /// Selected color tags.
    pub colors: BTreeSet<String>,
    /// Selected comfort tags.
    pub comfort: BTreeSet<String>,
    /// Selected feature tags.
    pub features: BTreeSet<String>,
}

impl PreferencesForm {
    /// Toggle a color tag.
    pub fn toggle_color(&mut self, tag: &str) -> bool {
        toggle(&mut self.colors, tag)
    }

    /// Toggle a comfort tag.
    pub fn toggle_comfort(&mut self, tag: &str) -> bool {
        toggle(&mut self.comfort, tag)
    }

    /// Toggle a feature tag.
    pub fn toggle_feature(&mut self, tag: &str) -> bool {
        toggle(&mut self.features, tag)
    }
}

/// The usage step: primary uses, seating capacity, pets.
#[derive(Debug, Clone, Default)]
pub struct UsageForm {
    /// Selected primary-use tags. At least one required on this step.
    pub primary_uses: BTreeSet<String>,
    /// How many people the furniture should seat.
    pub seating_capacity: Option<u32>,
    /// Whether pets share the space.
    pub has_pets: bool,
}

impl UsageForm {
    /// Toggle a primary-use tag.
    pub fn toggle_primary_use(&mut self, tag: &str) -> bool {
        toggle(&mut self.primary_uses, tag)
    }
}

/// The budget step: amount (required, positive) and payment method.
#[derive(Debug, Clone, Default)]
pub struct BudgetForm {
    /// Maximum budget.
    pub amount: Option<f64>,
    /// Optional payment-method tag.
    pub payment_method: Option<String>,
}

/// Toggle a tag's membership in a set. Returns whether the tag is
/// present after the toggle.
fn toggle(set: &mut BTreeSet<String>, tag: &str) -> bool {
    if set.remove(tag) {
        false
    } else {
        set.insert(tag.to_string());
        true
    }
}
