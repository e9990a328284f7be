//! Translation lookup and placeholder substitution.
//!
//! # Responsibility
//! - Provide the catalog-backed translate step the summary rules use.
//! - Keep localization value-only: no host i18n framework bindings.

pub mod catalog;
pub mod template;
