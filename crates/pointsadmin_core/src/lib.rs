//! Summary engine for the points module's admin settings form.
//! This crate is the single source of truth for summary wording.

pub mod i18n;
pub mod logging;
pub mod model;
pub mod summary;

pub use i18n::catalog::{Catalog, CatalogError, CatalogResult};
pub use i18n::template::substitute;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::field::{DateParts, FieldMap, FieldValue};
pub use model::snapshot::SettingsSnapshot;
pub use summary::fieldset::Fieldset;
pub use summary::registry::{attach, RegistryError, SummaryContext, SummaryFn, SummaryRegistry};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
