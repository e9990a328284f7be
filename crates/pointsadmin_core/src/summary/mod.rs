//! Fieldset summary engine.
//!
//! # Responsibility
//! - Name the seven fieldsets, hold their summary rules, and wire the
//!   rules into the registry the host drives.
//!
//! # Invariants
//! - Summary computation is a pure function of `(snapshot, catalog,
//!   now)`; no ambient state is read.

pub mod fieldset;
pub mod registry;
pub mod rules;
