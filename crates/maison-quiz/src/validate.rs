//! # Per-Step Validation
//!
//! Each step validates independently and reports every violated rule,
//! each with its own human-readable message. The style and usage rules
//! are not expressible as required-field checks, so they carry their own
//! distinct messages rather than the generic one.

use thiserror::Error;

use crate::forms::QuizForms;
use crate::steps::StepKind;

/// One violated validation rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required field on the current step is empty.
    #[error("{field} is required")]
    MissingField {
        /// Display name of the missing field.
        field: &'static str,
    },

    /// The budget was entered but is not a positive amount.
    #[error("budget must be a positive amount")]
    NonPositiveBudget,

    /// The style step needs at least one selected style.
    #[error("please select at least one style preference")]
    NoStyleSelected,

    /// The usage step needs at least one primary-use tag.
    #[error("please select at least one primary use")]
    NoPrimaryUseSelected,
}

/// Validate one step against the current forms. An empty list is a pass.
pub fn violations(kind: StepKind, forms: &QuizForms) -> Vec<Violation> {
    let mut out = Vec::new();
    match kind {
        StepKind::Space => {
            if forms.space.room_size.is_none() {
                out.push(Violation::MissingField { field: "room size" });
            }
        }
        StepKind::Style => {
            if forms.style.is_empty() {
                out.push(Violation::NoStyleSelected);
            }
        }
        StepKind::Preferences => {
            // Every preference tag is optional.
        }
        StepKind::Usage => {
            if forms.usage.primary_uses.is_empty() {
                out.push(Violation::NoPrimaryUseSelected);
            }
        }
        StepKind::Budget => match forms.budget.amount {
            None => out.push(Violation::MissingField { field: "budget" }),
            Some(amount) if amount <= 0.0 => out.push(Violation::NonPositiveBudget),
            Some(_) => {}
        },
    }
    out
}
