//! # maison-store — Profile Store Adapter
//!
//! Durable (for the lifetime of the local device profile) storage of
//! `ClientProfile` records, addressed by key, with enumeration support:
//!
//! - **Store** (`store.rs`): the `ProfileStore` trait — write, read-one,
//!   read-all, update-review-state — plus the key scheme and error type.
//!
//! - **Memory** (`memory.rs`): in-memory key/value backend. Constructed
//!   per session and dropped on teardown; the replacement for the
//!   module-level globals the earlier clients leaned on.
//!
//! - **File** (`file.rs`): one JSON document per profile in a store
//!   directory. This is the durable backend.
//!
//! ## Consistency Contract
//!
//! No cross-process locking. Concurrent writers racing on the same key
//! produce last-write-wins results, which is acceptable for a
//! single-user, single-device flow.
//!
//! ## Crate Policy
//!
//! - Malformed stored data never crashes a reader: `read_one` treats it
//!   as not-found, `read_all` skips it with a warning and keeps scanning.

pub mod file;
pub mod memory;
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{profile_key, ProfileStore, StoreError, KEY_PREFIX};
