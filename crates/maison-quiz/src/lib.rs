//! # maison-quiz — The Quiz State Machine
//!
//! Drives the linear, multi-step preference quiz and aggregates the
//! answers into one `ClientProfile` at submission:
//!
//! - **Steps** (`steps.rs`): `StepKind` and `StepSequence` — the fixed,
//!   validated step order. Two shipped configurations: the web quiz
//!   (space → style → preferences → budget) and the companion-app quiz,
//!   which inserts a usage step before budget.
//!
//! - **Forms** (`forms.rs`): one explicit typed struct per step. Field
//!   extraction happens at the form boundary, not at aggregation time.
//!
//! - **Validation** (`validate.rs`): per-step rules with a distinct,
//!   human-readable message per violated rule.
//!
//! - **Weights** (`weights.rs`): the equal-split style distribution —
//!   each of k selected styles gets exactly 100/k percent.
//!
//! - **Machine** (`machine.rs`): `QuizSession` — current step, highest
//!   step reached, transition log, and the atomic submit that hands the
//!   aggregated profile to a `ProfileStore`.
//!
//! ## Failure Semantics
//!
//! Everything is synchronous and in-memory until `submit()` hands off to
//! the store. Validation failures are reported to the caller as rule
//! lists, never as silent blocks.

pub mod forms;
pub mod machine;
pub mod steps;
pub mod validate;
pub mod weights;

pub use forms::{
    BudgetForm, PreferencesForm, QuizForms, SpaceForm, StyleForm, UsageForm, STYLE_CATALOG,
};
pub use machine::{QuizError, QuizSession, StepChanged};
pub use steps::{SequenceError, StepKind, StepSequence};
pub use validate::Violation;
pub use weights::style_weights;
