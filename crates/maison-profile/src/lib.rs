//! # maison-profile — The Canonical Client Profile
//!
//! Defines the record produced by one completed quiz session and consumed
//! by the results and designer-review views:
//!
//! - **Profile** (`profile.rs`): `ClientProfile` and its sub-records —
//!   space details, style weights, preference tags, usage, budget.
//!   One canonical shape, serialized as camelCase JSON with an explicit
//!   schema version.
//!
//! - **Review** (`review.rs`): the pending → reviewed lifecycle attached
//!   to every profile. The review sub-record is the only part of a
//!   profile that is mutated after creation.
//!
//! - **Media** (`media.rs`): `ImageRef`, a locally-encoded room photo
//!   (data URL). Encoding is a single-shot async file read with one
//!   resolution path and one error path.
//!
//! ## Crate Policy
//!
//! - Depends only on `maison-core` internally.
//! - A `ClientProfile` is immutable after creation except for its review
//!   sub-record.

pub mod media;
pub mod profile;
pub mod review;

pub use media::{ImageRef, MediaError};
pub use profile::{
    Budget, ClientProfile, Dimensions, PreferenceTags, SpaceDetails, StyleWeight, UsageDetails,
    SCHEMA_VERSION,
};
pub use review::{ReviewState, ReviewStatus};
