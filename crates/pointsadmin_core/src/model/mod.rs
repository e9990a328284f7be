//! Form-state data model.
//!
//! # Responsibility
//! - Define the raw field-value wire shape and the typed snapshot the
//!   summary rules consume.
//! - Keep both layers value-only: no identity, no persistence.
//!
//! # Invariants
//! - Snapshots are read-only captures of one form render.
//! - Absent or malformed host data degrades to defaults, never errors.

pub mod field;
pub mod snapshot;
