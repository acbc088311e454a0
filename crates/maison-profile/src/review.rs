//! # Designer Review Lifecycle
//!
//! Every profile carries a review sub-record. It starts `pending` and is
//! moved to `reviewed` by the designer dashboard — the quiz itself never
//! touches it.
//!
//! ## States
//!
//! ```text
//! Pending ──mark_reviewed()──▶ Reviewed
//!                                 │
//!                mark_reviewed()──┘  (re-review overwrites feedback/timestamp)
//! ```
//!
//! There are no further states. Re-reviewing an already-reviewed profile
//! is not an error; it simply replaces the feedback text and timestamp.

use serde::{Deserialize, Serialize};

use maison_core::Timestamp;

/// Review status of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Submitted, awaiting designer review.
    Pending,
    /// A designer has reviewed the profile and left feedback.
    Reviewed,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
        })
    }
}

/// The review sub-record attached to every profile.
///
/// This is the only part of a `ClientProfile` that changes after
/// creation, and only the designer-review collaborator changes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    /// Current review status.
    pub status: ReviewStatus,
    /// Designer feedback text. Empty while pending.
    #[serde(default)]
    pub feedback: String,
    /// When the review happened. Absent while pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<Timestamp>,
}

impl ReviewState {
    /// The state every freshly-submitted profile starts in.
    pub fn pending() -> Self {
        Self {
            status: ReviewStatus::Pending,
            feedback: String::new(),
            reviewed_at: None,
        }
    }

    /// Record a designer review: status becomes `Reviewed`, the feedback
    /// text is stored, and the review timestamp is refreshed.
    ///
    /// Calling this on an already-reviewed profile overwrites the
    /// feedback and timestamp.
    pub fn mark_reviewed(&mut self, feedback: impl Into<String>) {
        self.status = ReviewStatus::Reviewed;
        self.feedback = feedback.into();
        self.reviewed_at = Some(Timestamp::now());
    }

    /// Whether the profile is still awaiting review.
    pub fn is_pending(&self) -> bool {
        self.status == ReviewStatus::Pending
    }
}

impl Default for ReviewState {
    fn default() -> Self {
        Self::pending()
    }
}
