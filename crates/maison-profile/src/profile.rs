//! # ClientProfile — Aggregated Quiz Record
//!
//! The canonical persisted record of one completed quiz session. Created
//! once, at successful submission of the final step; immutable afterwards
//! except for the review sub-record.
//!
//! Earlier clients wrote several incompatible record layouts under
//! different storage keys. This is the one canonical shape; records are
//! stamped with `schemaVersion` so future layout changes can be detected
//! on read instead of guessed at.

use serde::{Deserialize, Serialize};

use maison_core::{ProfileId, RoomSize, Timestamp};

use crate::media::ImageRef;
use crate::review::ReviewState;

/// Current serialized layout version for `ClientProfile`.
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// The aggregated, persisted record of one completed quiz session plus
/// its designer-review state.
///
/// Invariants:
/// - `style` is non-empty and its weights sum to 100 (within f64
///   tolerance) — the quiz refuses to submit otherwise.
/// - `usage` is present only for sessions that include the usage step
///   (the companion-app quiz variant).
/// - Only `review` is mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    /// Serialized layout version. Records written before versioning was
    /// introduced parse as version 1.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Unique identifier for this submission.
    pub id: ProfileId,
    /// When the quiz was submitted (UTC).
    pub created_at: Timestamp,
    /// Room size and optional dimensions.
    pub space: SpaceDetails,
    /// Selected styles with their share of the selection, summing to 100.
    pub style: Vec<StyleWeight>,
    /// Selected color/comfort/feature tags.
    pub preferences: PreferenceTags,
    /// Primary-use details (companion-app quiz variant only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageDetails>,
    /// Budget amount and optional payment method.
    pub budget: Budget,
    /// Locally-encoded room photos attached by the user.
    #[serde(default)]
    pub room_photos: Vec<ImageRef>,
    /// Designer review state; the only mutable sub-record.
    pub review: ReviewState,
}

impl ClientProfile {
    /// Sum of all style weights. 100 (within f64 tolerance) for any
    /// profile the quiz produces.
    pub fn style_weight_total(&self) -> f64 {
        self.style.iter().map(|s| s.weight_percent).sum()
    }
}

/// Room size and optional physical dimensions of the space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceDetails {
    /// Room size in the unit the user had active at submit time.
    pub room_size: RoomSize,
    /// Optional width/depth/height, in inches.
    #[serde(default)]
    pub dimensions: Dimensions,
}

/// Optional width/depth/height of the space, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Depth in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// Height in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Dimensions {
    /// Whether no dimension was provided.
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.depth.is_none() && self.height.is_none()
    }
}

/// One selected style and its share of the total style selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleWeight {
    /// Style name (e.g., "Modern", "Scandinavian").
    pub style: String,
    /// Percentage share, 0–100. Stored unrounded; rounding is display-only.
    pub weight_percent: f64,
}

/// Selected tags for colors, comfort attributes, and desired features.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PreferenceTags {
    /// Color preference tags.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Comfort preference tags.
    #[serde(default)]
    pub comfort: Vec<String>,
    /// Desired feature tags.
    #[serde(default)]
    pub features: Vec<String>,
}

/// Primary-use details collected by the companion-app quiz variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageDetails {
    /// Primary-use tags (e.g., "lounging", "entertaining").
    pub primary_uses: Vec<String>,
    /// How many people the furniture should seat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seating_capacity: Option<u32>,
    /// Whether pets share the space.
    pub has_pets: bool,
}

/// Budget amount and optional payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Maximum budget. Always positive in a submitted profile.
    pub amount: f64,
    /// Optional payment-method tag (e.g., "financing").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}
