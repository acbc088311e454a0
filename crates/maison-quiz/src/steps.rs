//! # Quiz Steps
//!
//! A quiz is a fixed, linear sequence of steps, numbered 1..N. Step N is
//! terminal: its forward action is submit, not next.
//!
//! ## Shipped Configurations
//!
//! ```text
//! web:    Space ──▶ Style ──▶ Preferences ──▶ Budget
//! native: Space ──▶ Style ──▶ Preferences ──▶ Usage ──▶ Budget
//! ```
//!
//! The sequence is validated at construction; the machine can then trust
//! that step positions are always within [1, N] and that the final step
//! is the budget step.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of question a quiz step asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepKind {
    /// Room size, optional dimensions, room photos.
    Space,
    /// Style selection via the catalog image grid.
    Style,
    /// Color/comfort/feature tags.
    Preferences,
    /// Primary uses, seating capacity, pets (companion-app quiz only).
    Usage,
    /// Budget amount and payment method. Always the final step.
    Budget,
}

impl StepKind {
    /// Display title for the progress indicator.
    pub fn title(self) -> &'static str {
        match self {
            Self::Space => "Your Space",
            Self::Style => "Your Style",
            Self::Preferences => "Your Preferences",
            Self::Usage => "How You Live",
            Self::Budget => "Your Budget",
        }
    }
}

/// Errors from constructing a step sequence.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// A quiz needs at least two steps.
    #[error("a quiz needs at least two steps, got {0}")]
    TooShort(usize),

    /// The final step must be the budget step.
    #[error("the final step must be the budget step")]
    BudgetNotLast,

    /// Each step kind may appear at most once.
    #[error("duplicate step: {}", .0.title())]
    DuplicateStep(StepKind),
}

/// A fixed, linear, validated sequence of quiz steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSequence {
    steps: Vec<StepKind>,
}

impl StepSequence {
    /// The web quiz: space, style, preferences, budget.
    pub fn web() -> Self {
        Self {
            steps: vec![
                StepKind::Space,
                StepKind::Style,
                StepKind::Preferences,
                StepKind::Budget,
            ],
        }
    }

    /// The companion-app quiz: adds the usage step before budget.
    pub fn native() -> Self {
        Self {
            steps: vec![
                StepKind::Space,
                StepKind::Style,
                StepKind::Preferences,
                StepKind::Usage,
                StepKind::Budget,
            ],
        }
    }

    /// Build a custom sequence.
    ///
    /// Rejects sequences shorter than two steps, sequences that do not
    /// end with the budget step, and repeated step kinds.
    pub fn new(steps: Vec<StepKind>) -> Result<Self, SequenceError> {
        if steps.len() < 2 {
            return Err(SequenceError::TooShort(steps.len()));
        }
        if steps.last() != Some(&StepKind::Budget) {
            return Err(SequenceError::BudgetNotLast);
        }
        for (i, kind) in steps.iter().enumerate() {
            if steps[..i].contains(kind) {
                return Err(SequenceError::DuplicateStep(*kind));
            }
        }
        Ok(Self { steps })
    }

    /// Number of steps, N.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; a sequence has at least two steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step kinds in order.
    pub fn steps(&self) -> &[StepKind] {
        &self.steps
    }

    /// The kind at a 1-based step position.
    pub fn kind_at(&self, step: usize) -> Option<StepKind> {
        step.checked_sub(1).and_then(|i| self.steps.get(i)).copied()
    }

    /// The 1-based position of the final (submit) step.
    pub fn final_step(&self) -> usize {
        self.steps.len()
    }

    /// Whether the sequence includes a step of the given kind.
    pub fn contains(&self, kind: StepKind) -> bool {
        self.steps.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_sequence_shape() {
        let seq = StepSequence::web();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.kind_at(1), Some(StepKind::Space));
        assert_eq!(seq.kind_at(4), Some(StepKind::Budget));
        assert!(!seq.contains(StepKind::Usage));
    }

    #[test]
    fn test_native_sequence_has_usage() {
        let seq = StepSequence::native();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.kind_at(4), Some(StepKind::Usage));
        assert_eq!(seq.final_step(), 5);
    }

    #[test]
    fn test_kind_at_out_of_range() {
        let seq = StepSequence::web();
        assert_eq!(seq.kind_at(0), None);
        assert_eq!(seq.kind_at(5), None);
    }

    #[test]
    fn test_new_rejects_too_short() {
        assert_eq!(
            StepSequence::new(vec![StepKind::Budget]),
            Err(SequenceError::TooShort(1))
        );
    }

    #[test]
    fn test_new_rejects_budget_not_last() {
        assert_eq!(
            StepSequence::new(vec![StepKind::Budget, StepKind::Style]),
            Err(SequenceError::BudgetNotLast)
        );
    }

    #[test]
    fn test_new_rejects_duplicates() {
        assert_eq!(
            StepSequence::new(vec![StepKind::Style, StepKind::Style, StepKind::Budget]),
            Err(SequenceError::DuplicateStep(StepKind::Style))
        );
    }

    #[test]
    fn test_new_accepts_minimal() {
        let seq = StepSequence::new(vec![StepKind::Style, StepKind::Budget]).unwrap();
        assert_eq!(seq.len(), 2);
    }
}
