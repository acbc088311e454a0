//! # maison-core — Foundational Types for the maison Design Flow
//!
//! This crate is the bedrock of the maison workspace. It defines the
//! primitives shared by the quiz, profile, and store crates. Every other
//! crate in the workspace depends on `maison-core`; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ProfileId` is a newtype
//!    over `uuid::Uuid` — no bare strings for identifiers.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision. Profile ordering in the store relies on
//!    these timestamps comparing consistently.
//!
//! 3. **Units carry their unit.** `RoomSize` pairs a value with its
//!    `AreaUnit`; conversion factors are fixed constants and the stored
//!    value is never silently normalized to one canonical unit.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `maison-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;
pub mod units;

// Re-export primary types for ergonomic imports.
pub use error::MaisonError;
pub use identity::ProfileId;
pub use temporal::Timestamp;
pub use units::{AreaUnit, RoomSize, SQFT_TO_SQM, SQM_TO_SQFT};
