//! Fieldset summary registry and attach hook.
//!
//! # Responsibility
//! - Map each fieldset to the callback the host invokes for its
//!   collapsed-section summary text.
//! - Provide `attach()`, the form-lifecycle entry point that wires up
//!   the seven default rules.
//!
//! # Invariants
//! - Registered callbacks are pure: same snapshot and context, same
//!   output, on every invocation.
//! - `now` is captured per context, not per registry, so summaries may
//!   change between renders without the form being resubmitted.

use crate::i18n::catalog::Catalog;
use crate::model::snapshot::SettingsSnapshot;
use crate::summary::fieldset::Fieldset;
use crate::summary::rules::{
    category_summary, expiration_summary, misc_summary, renaming_summary, reports_summary,
    stamping_summary, status_summary,
};
use chrono::{Local, NaiveDateTime};
use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Registry errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateFieldset(Fieldset),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateFieldset(fieldset) => {
                write!(f, "fieldset already registered: {}", fieldset.key())
            }
        }
    }
}

impl Error for RegistryError {}

/// Ambient inputs shared by every summary callback: the active
/// translation catalog and the wall-clock instant of this invocation.
pub struct SummaryContext<'a> {
    pub catalog: &'a Catalog,
    pub now: NaiveDateTime,
}

impl<'a> SummaryContext<'a> {
    /// Captures the current local wall-clock time for one invocation.
    pub fn current(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            now: Local::now().naive_local(),
        }
    }

    /// Context with an explicit `now`, for callers that pin the clock.
    pub fn at(catalog: &'a Catalog, now: NaiveDateTime) -> Self {
        Self { catalog, now }
    }
}

/// Callback form the host registers per fieldset.
pub type SummaryFn = Arc<dyn Fn(&SettingsSnapshot, &SummaryContext<'_>) -> String + Send + Sync>;

/// Runtime fieldset-to-callback registry.
#[derive(Default)]
pub struct SummaryRegistry {
    summaries: BTreeMap<Fieldset, SummaryFn>,
}

impl SummaryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one summary callback.
    pub fn register(&mut self, fieldset: Fieldset, summary: SummaryFn) -> Result<(), RegistryError> {
        if self.summaries.contains_key(&fieldset) {
            return Err(RegistryError::DuplicateFieldset(fieldset));
        }
        self.summaries.insert(fieldset, summary);
        Ok(())
    }

    /// Replaces the callback for one fieldset, returning the previous
    /// one. This is the host's override point.
    pub fn replace(&mut self, fieldset: Fieldset, summary: SummaryFn) -> Option<SummaryFn> {
        self.summaries.insert(fieldset, summary)
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Returns registered fieldsets in canonical form order.
    pub fn fieldsets(&self) -> Vec<Fieldset> {
        self.summaries.keys().copied().collect()
    }

    /// Returns the callback for one fieldset.
    pub fn get(&self, fieldset: Fieldset) -> Option<SummaryFn> {
        self.summaries.get(&fieldset).cloned()
    }

    /// Computes the summary for one fieldset, `None` when unregistered.
    pub fn summarize(
        &self,
        fieldset: Fieldset,
        snapshot: &SettingsSnapshot,
        ctx: &SummaryContext<'_>,
    ) -> Option<String> {
        self.summaries
            .get(&fieldset)
            .map(|summary| summary(snapshot, ctx))
    }

    /// Computes every registered summary in canonical form order.
    pub fn summarize_all(
        &self,
        snapshot: &SettingsSnapshot,
        ctx: &SummaryContext<'_>,
    ) -> Vec<(Fieldset, String)> {
        self.summaries
            .iter()
            .map(|(fieldset, summary)| (*fieldset, summary(snapshot, ctx)))
            .collect()
    }
}

/// Builds a registry with the seven default rules registered.
///
/// This is the form-lifecycle hook analog: the host calls it once per
/// processed form context and re-attaches by calling it again.
pub fn attach() -> SummaryRegistry {
    let mut registry = SummaryRegistry::new();
    for fieldset in Fieldset::ALL {
        let summary: SummaryFn = match fieldset {
            Fieldset::Status => Arc::new(|snapshot, ctx| {
                status_summary(&snapshot.status, ctx.catalog)
            }),
            Fieldset::Misc => Arc::new(|snapshot, ctx| misc_summary(&snapshot.misc, ctx.catalog)),
            Fieldset::Reports => Arc::new(|snapshot, ctx| {
                reports_summary(&snapshot.reports, ctx.catalog)
            }),
            Fieldset::Renaming => Arc::new(|snapshot, ctx| {
                renaming_summary(&snapshot.renaming, ctx.catalog)
            }),
            Fieldset::Category => Arc::new(|snapshot, ctx| {
                category_summary(&snapshot.category, ctx.catalog)
            }),
            Fieldset::Stamping => Arc::new(|snapshot, ctx| {
                stamping_summary(&snapshot.stamping, ctx.catalog)
            }),
            Fieldset::PointsExpiration => Arc::new(|snapshot, ctx| {
                expiration_summary(&snapshot.expiration, ctx.catalog, ctx.now)
            }),
        };
        // Fieldset::ALL has no duplicates; register cannot fail here.
        let _ = registry.register(fieldset, summary);
    }
    debug!(
        "event=attach module=summary status=ok fieldsets={}",
        registry.len()
    );
    registry
}

#[cfg(test)]
mod tests {
    use super::{attach, RegistryError, SummaryContext, SummaryFn, SummaryRegistry};
    use crate::i18n::catalog::Catalog;
    use crate::model::snapshot::SettingsSnapshot;
    use crate::summary::fieldset::Fieldset;
    use std::sync::Arc;

    fn constant_summary(text: &'static str) -> SummaryFn {
        Arc::new(move |_, _| text.to_string())
    }

    #[test]
    fn attach_registers_all_fieldsets_in_canonical_order() {
        let registry = attach();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.fieldsets(), Fieldset::ALL.to_vec());
    }

    #[test]
    fn register_rejects_duplicate_fieldset() {
        let mut registry = SummaryRegistry::new();
        registry
            .register(Fieldset::Status, constant_summary("first"))
            .expect("first registration should succeed");

        let duplicate = registry.register(Fieldset::Status, constant_summary("second"));
        assert_eq!(
            duplicate,
            Err(RegistryError::DuplicateFieldset(Fieldset::Status))
        );
    }

    #[test]
    fn replace_overrides_and_returns_previous_callback() {
        let mut registry = attach();
        let previous = registry.replace(Fieldset::Status, constant_summary("Overridden."));
        assert!(previous.is_some());

        let catalog = Catalog::new();
        let ctx = SummaryContext::current(&catalog);
        let snapshot = SettingsSnapshot::default();
        assert_eq!(
            registry.summarize(Fieldset::Status, &snapshot, &ctx),
            Some("Overridden.".to_string())
        );
    }

    #[test]
    fn summarize_returns_none_for_unregistered_fieldset() {
        let registry = SummaryRegistry::new();
        let catalog = Catalog::new();
        let ctx = SummaryContext::current(&catalog);
        let snapshot = SettingsSnapshot::default();
        assert_eq!(registry.summarize(Fieldset::Misc, &snapshot, &ctx), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn summarize_all_yields_one_entry_per_fieldset() {
        let registry = attach();
        let catalog = Catalog::new();
        let ctx = SummaryContext::current(&catalog);
        let snapshot = SettingsSnapshot::default();

        let summaries = registry.summarize_all(&snapshot, &ctx);
        assert_eq!(summaries.len(), 7);
        assert!(summaries.iter().all(|(_, text)| !text.is_empty()));
        let order: Vec<Fieldset> = summaries.iter().map(|(fieldset, _)| *fieldset).collect();
        assert_eq!(order, Fieldset::ALL.to_vec());
    }
}
