//! # QuizSession — The Quiz State Machine
//!
//! Owns the current step position, the highest step reached, the per-step
//! forms, and the step transition log.
//!
//! ## Navigation Rules
//!
//! ```text
//! go_next()      step k ──▶ step k+1   only if validate(k) passes; k < N
//! go_previous()  step k ──▶ step k-1   always allowed; no-op at step 1
//! jump_to(s)     step k ──▶ step s     only if s ≤ highest step reached
//! submit()       step N ──▶ done       only if every step validates
//! ```
//!
//! Forward navigation is validation-gated and a failure always carries
//! the violated rules; backward navigation is free. `jump_to` lets the
//! user revisit completed steps but never skip ahead, and rejects
//! out-of-range requests silently (a no-op, not an error).
//!
//! Submission is a single atomic append: the profile is aggregated in
//! full, then written once. A partial profile is never persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use maison_core::{ProfileId, Timestamp};
use maison_profile::{
    Budget, ClientProfile, PreferenceTags, ReviewState, SpaceDetails, StyleWeight, UsageDetails,
    SCHEMA_VERSION,
};
use maison_store::{ProfileStore, StoreError};

use crate::forms::QuizForms;
use crate::steps::{StepKind, StepSequence};
use crate::validate::{violations, Violation};
use crate::weights::style_weights;

/// Record of one step change, for progress-indicator consumers and the
/// session's transition log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepChanged {
    /// 1-based step before the change.
    pub from: usize,
    /// 1-based step after the change.
    pub to: usize,
    /// Kind of the step navigated to.
    pub kind: StepKind,
    /// When the change happened.
    pub at: Timestamp,
}

/// Errors from quiz navigation and submission.
#[derive(Error, Debug)]
pub enum QuizError {
    /// A step failed validation; the violated rules are attached.
    #[error("step {step} failed validation: {} rule(s) violated", .violations.len())]
    Validation {
        /// The 1-based step that failed.
        step: usize,
        /// Every violated rule, each with its own message.
        violations: Vec<Violation>,
    },

    /// `go_next()` was called on the final step, where the forward action
    /// is submit.
    #[error("already at the final step; submit instead of advancing")]
    AtFinalStep,

    /// `submit()` was called before reaching the final step.
    #[error("submit is only available on the final step")]
    NotAtFinalStep,

    /// The store rejected the write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One quiz session: a cursor over a fixed step sequence plus the forms
/// being filled in. Constructed per page session and dropped on
/// navigation — no state outlives the session.
#[derive(Debug)]
pub struct QuizSession {
    sequence: StepSequence,
    current: usize,
    highest_reached: usize,
    /// The per-step forms. Mutated directly by the UI event handlers.
    pub forms: QuizForms,
    transitions: Vec<StepChanged>,
}

impl QuizSession {
    /// Start a session at step 1 with empty forms.
    pub fn new(sequence: StepSequence) -> Self {
        Self {
            sequence,
            current: 1,
            highest_reached: 1,
            forms: QuizForms::default(),
            transitions: Vec::new(),
        }
    }

    /// The step sequence this session runs.
    pub fn sequence(&self) -> &StepSequence {
        &self.sequence
    }

    /// Current 1-based step position. Always within [1, N].
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// Kind of the current step.
    pub fn current_kind(&self) -> StepKind {
        // current is kept within [1, N] by every mutation path.
        self.sequence.steps()[self.current - 1]
    }

    /// Highest 1-based step the user has reached so far.
    pub fn highest_step_reached(&self) -> usize {
        self.highest_reached
    }

    /// Whether the session sits on the final (submit) step.
    pub fn is_final_step(&self) -> bool {
        self.current == self.sequence.final_step()
    }

    /// Progress through the sequence, 0 at step 1 and 100 at step N.
    pub fn progress_percent(&self) -> f64 {
        let n = self.sequence.len();
        ((self.current - 1) as f64 / (n - 1) as f64) * 100.0
    }

    /// The session's step transition log, oldest first.
    pub fn transitions(&self) -> &[StepChanged] {
        &self.transitions
    }

    /// Validate the current step. An empty list is a pass.
    pub fn validate_current(&self) -> Vec<Violation> {
        self.validate_step(self.current)
    }

    /// Validate a 1-based step position. Out-of-range steps have no rules
    /// and validate clean.
    pub fn validate_step(&self, step: usize) -> Vec<Violation> {
        self.sequence
            .kind_at(step)
            .map(|kind| violations(kind, &self.forms))
            .unwrap_or_default()
    }

    /// Advance to the next step.
    ///
    /// Fails with the violated rules if the current step does not
    /// validate, and with [`QuizError::AtFinalStep`] on step N, where the
    /// forward action is [`QuizSession::submit()`].
    pub fn go_next(&mut self) -> Result<StepChanged, QuizError> {
        if self.is_final_step() {
            return Err(QuizError::AtFinalStep);
        }
        let violations = self.validate_current();
        if !violations.is_empty() {
            return Err(QuizError::Validation {
                step: self.current,
                violations,
            });
        }
        Ok(self.move_to(self.current + 1))
    }

    /// Go back one step. No validation on backward navigation; `None` at
    /// step 1.
    pub fn go_previous(&mut self) -> Option<StepChanged> {
        if self.current > 1 {
            Some(self.move_to(self.current - 1))
        } else {
            None
        }
    }

    /// Jump to a previously-reached step. Requests beyond the highest
    /// step reached (or out of range) are rejected silently; jumping to
    /// the current step is a no-op.
    pub fn jump_to(&mut self, step: usize) -> Option<StepChanged> {
        if step < 1 || step > self.highest_reached || step == self.current {
            return None;
        }
        Some(self.move_to(step))
    }

    /// Style weight distribution over the currently selected styles,
    /// recomputed from scratch on every call.
    pub fn style_weights(&self) -> Vec<StyleWeight> {
        style_weights(&self.forms.style.selected_styles())
    }

    /// Submit the quiz: aggregate every form into one `ClientProfile`,
    /// persist it through `store`, and return the new profile's id.
    ///
    /// Only available on the final step. Every step is re-validated
    /// before aggregation (the user may have backtracked and emptied an
    /// earlier answer); the earliest failing step is reported. The write
    /// is a single atomic append — nothing is persisted on failure.
    pub fn submit<S: ProfileStore>(&mut self, store: &mut S) -> Result<ProfileId, QuizError> {
        if !self.is_final_step() {
            return Err(QuizError::NotAtFinalStep);
        }
        for step in 1..=self.sequence.final_step() {
            let violations = self.validate_step(step);
            if !violations.is_empty() {
                return Err(QuizError::Validation { step, violations });
            }
        }

        let profile = self.aggregate()?;
        store.write(&profile)?;
        tracing::info!(id = %profile.id, "quiz submitted");
        Ok(profile.id)
    }

    /// 1-based position of a step kind, for error reporting.
    fn step_of(&self, kind: StepKind) -> usize {
        self.sequence
            .steps()
            .iter()
            .position(|k| *k == kind)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// Build the profile record from the forms. Returns a validation
    /// error rather than a partial record if a required answer is gone.
    fn aggregate(&self) -> Result<ClientProfile, QuizError> {
        let room_size = self.forms.space.room_size.ok_or_else(|| QuizError::Validation {
            step: self.step_of(StepKind::Space),
            violations: vec![Violation::MissingField { field: "room size" }],
        })?;
        let amount = self.forms.budget.amount.ok_or_else(|| QuizError::Validation {
            step: self.step_of(StepKind::Budget),
            violations: vec![Violation::MissingField { field: "budget" }],
        })?;
        let style = self.style_weights();
        if style.is_empty() {
            return Err(QuizError::Validation {
                step: self.step_of(StepKind::Style),
                violations: vec![Violation::NoStyleSelected],
            });
        }

        let usage = if self.sequence.contains(StepKind::Usage) {
            Some(UsageDetails {
                primary_uses: self.forms.usage.primary_uses.iter().cloned().collect(),
                seating_capacity: self.forms.usage.seating_capacity,
                has_pets: self.forms.usage.has_pets,
            })
        } else {
            None
        };

        Ok(ClientProfile {
            schema_version: SCHEMA_VERSION,
            id: ProfileId::new(),
            created_at: Timestamp::now(),
            space: SpaceDetails {
                room_size,
                dimensions: self.forms.space.dimensions,
            },
            style,
            preferences: PreferenceTags {
                colors: self.forms.preferences.colors.iter().cloned().collect(),
                comfort: self.forms.preferences.comfort.iter().cloned().collect(),
                features: self.forms.preferences.features.iter().cloned().collect(),
            },
            usage,
            budget: Budget {
                amount,
                payment_method: self.forms.budget.payment_method.clone(),
            },
            room_photos: self.forms.space.photos.clone(),
            review: ReviewState::pending(),
        })
    }

    /// Record and perform a step change.
    fn move_to(&mut self, to: usize) -> StepChanged {
        let change = StepChanged {
            from: self.current,
            to,
            kind: self.sequence.steps()[to - 1],
            at: Timestamp::now(),
        };
        tracing::debug!(from = change.from, to = change.to, "quiz step changed");
        self.current = to;
        if to > self.highest_reached {
            self.highest_reached = to;
        }
        self.transitions.push(change.clone());
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maison_core::{AreaUnit, RoomSize};
    use maison_store::MemoryStore;

    fn fill_space(session: &mut QuizSession) {
        session.forms.space.room_size = Some(RoomSize::new(400.0, AreaUnit::SquareFeet));
    }

    fn fill_style(session: &mut QuizSession) {
        session.forms.style.toggle_image("Modern", "modern1");
        session.forms.style.toggle_image("Scandinavian", "scandi2");
    }

    fn fill_budget(session: &mut QuizSession) {
        session.forms.budget.amount = Some(2500.0);
    }

    /// Fill and walk a web session onto its final step.
    fn session_at_final() -> QuizSession {
        let mut session = QuizSession::new(StepSequence::web());
        fill_space(&mut session);
        session.go_next().unwrap();
        fill_style(&mut session);
        session.go_next().unwrap();
        session.go_next().unwrap();
        fill_budget(&mut session);
        session
    }

    #[test]
    fn test_starts_at_step_one() {
        let session = QuizSession::new(StepSequence::web());
        assert_eq!(session.current_step(), 1);
        assert_eq!(session.current_kind(), StepKind::Space);
        assert_eq!(session.highest_step_reached(), 1);
        assert_eq!(session.progress_percent(), 0.0);
    }

    #[test]
    fn test_go_next_blocked_by_validation() {
        let mut session = QuizSession::new(StepSequence::web());
        let err = session.go_next().unwrap_err();
        match err {
            QuizError::Validation { step, violations } => {
                assert_eq!(step, 1);
                assert_eq!(
                    violations,
                    vec![Violation::MissingField { field: "room size" }]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(session.current_step(), 1);
    }

    #[test]
    fn test_go_next_advances_and_logs() {
        let mut session = QuizSession::new(StepSequence::web());
        fill_space(&mut session);
        let change = session.go_next().unwrap();
        assert_eq!(change.from, 1);
        assert_eq!(change.to, 2);
        assert_eq!(change.kind, StepKind::Style);
        assert_eq!(session.transitions().len(), 1);
        assert_eq!(session.highest_step_reached(), 2);
    }

    #[test]
    fn test_style_step_blocks_without_selection() {
        let mut session = QuizSession::new(StepSequence::web());
        fill_space(&mut session);
        session.go_next().unwrap();
        let err = session.go_next().unwrap_err();
        match err {
            QuizError::Validation { violations, .. } => {
                assert_eq!(violations, vec![Violation::NoStyleSelected]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_go_previous_is_free_and_bounded() {
        let mut session = QuizSession::new(StepSequence::web());
        assert!(session.go_previous().is_none());

        fill_space(&mut session);
        session.go_next().unwrap();
        let change = session.go_previous().unwrap();
        assert_eq!(change.to, 1);
        assert_eq!(session.current_step(), 1);
    }

    #[test]
    fn test_jump_ahead_rejected_silently() {
        let mut session = QuizSession::new(StepSequence::web());
        assert!(session.jump_to(3).is_none());
        assert_eq!(session.current_step(), 1);
    }

    #[test]
    fn test_jump_back_within_reached_steps() {
        let mut session = session_at_final();
        assert_eq!(session.current_step(), 4);

        let change = session.jump_to(2).unwrap();
        assert_eq!(change.to, 2);
        // Forward jumps stay allowed up to the highest step reached.
        assert!(session.jump_to(4).is_some());
        assert!(session.jump_to(5).is_none());
    }

    #[test]
    fn test_go_next_unavailable_at_final_step() {
        let mut session = session_at_final();
        assert!(matches!(session.go_next(), Err(QuizError::AtFinalStep)));
        assert_eq!(session.progress_percent(), 100.0);
    }

    #[test]
    fn test_submit_requires_final_step() {
        let mut session = QuizSession::new(StepSequence::web());
        let mut store = MemoryStore::new();
        assert!(matches!(
            session.submit(&mut store),
            Err(QuizError::NotAtFinalStep)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_submit_writes_aggregated_profile() {
        let mut session = session_at_final();
        session.forms.preferences.toggle_color("neutral");
        session.forms.budget.payment_method = Some("card".into());

        let mut store = MemoryStore::new();
        let id = session.submit(&mut store).unwrap();

        let profile = store.read_one(&id).unwrap().unwrap();
        assert_eq!(profile.space.room_size.value, 400.0);
        assert_eq!(profile.space.room_size.unit, AreaUnit::SquareFeet);
        assert_eq!(profile.budget.amount, 2500.0);
        assert_eq!(profile.budget.payment_method.as_deref(), Some("card"));
        assert_eq!(profile.preferences.colors, vec!["neutral".to_string()]);
        assert!(profile.usage.is_none());
        assert!(profile.review.is_pending());

        let styles: Vec<_> = profile.style.iter().map(|s| s.style.as_str()).collect();
        assert_eq!(styles, vec!["Modern", "Scandinavian"]);
        for w in &profile.style {
            assert_eq!(w.weight_percent, 50.0);
        }
    }

    #[test]
    fn test_submit_revalidates_after_backtracking() {
        let mut session = session_at_final();
        // Backtrack, clear a required answer, and jump forward again.
        session.jump_to(1).unwrap();
        session.forms.space.room_size = None;
        session.jump_to(4).unwrap();

        let mut store = MemoryStore::new();
        let err = session.submit(&mut store).unwrap_err();
        match err {
            QuizError::Validation { step, violations } => {
                assert_eq!(step, 1);
                assert_eq!(
                    violations,
                    vec![Violation::MissingField { field: "room size" }]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_native_sequence_collects_usage() {
        let mut session = QuizSession::new(StepSequence::native());
        fill_space(&mut session);
        session.go_next().unwrap();
        fill_style(&mut session);
        session.go_next().unwrap();
        session.go_next().unwrap();

        // The usage step gates on at least one primary use.
        assert_eq!(session.current_kind(), StepKind::Usage);
        assert!(matches!(session.go_next(), Err(QuizError::Validation { .. })));

        session.forms.usage.toggle_primary_use("movie nights");
        session.forms.usage.seating_capacity = Some(4);
        session.forms.usage.has_pets = true;
        session.go_next().unwrap();
        fill_budget(&mut session);

        let mut store = MemoryStore::new();
        let id = session.submit(&mut store).unwrap();
        let usage = store.read_one(&id).unwrap().unwrap().usage.unwrap();
        assert_eq!(usage.primary_uses, vec!["movie nights".to_string()]);
        assert_eq!(usage.seating_capacity, Some(4));
        assert!(usage.has_pets);
    }

    #[test]
    fn test_style_weights_recomputed_on_every_toggle() {
        let mut session = QuizSession::new(StepSequence::web());
        session.forms.style.toggle_image("Modern", "modern1");
        assert_eq!(session.style_weights()[0].weight_percent, 100.0);

        session.forms.style.toggle_image("Scandinavian", "scandi1");
        let weights = session.style_weights();
        assert_eq!(weights.len(), 2);
        assert_eq!(weights[0].weight_percent, 50.0);

        session.forms.style.toggle_image("Scandinavian", "scandi1");
        assert_eq!(session.style_weights()[0].weight_percent, 100.0);
    }
}
