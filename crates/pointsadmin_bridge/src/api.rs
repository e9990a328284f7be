//! Use-case API for host-facing calls.
//!
//! # Responsibility
//! - Expose stable, string-in/string-out functions the host admin page
//!   drives with JSON payloads.
//! - Keep error semantics simple: envelopes, never panics.
//!
//! # Invariants
//! - Exported functions must not panic across the host boundary.
//! - Return values are UTF-8 strings and envelopes with stable meaning.
//! - The only process-wide state is the active translation catalog.

use log::{debug, warn};
use pointsadmin_core::{
    attach, core_version as core_version_inner, default_log_level,
    init_logging as init_logging_inner, ping as ping_inner, Catalog, FieldMap, Fieldset,
    SettingsSnapshot, SummaryContext,
};
use serde::{Deserialize, Serialize};
use std::sync::{OnceLock, RwLock};

static ACTIVE_CATALOG: OnceLock<RwLock<Catalog>> = OnceLock::new();

fn catalog_slot() -> &'static RwLock<Catalog> {
    ACTIVE_CATALOG.get_or_init(|| RwLock::new(Catalog::new()))
}

fn active_catalog() -> Catalog {
    match catalog_slot().read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

fn set_active_catalog(catalog: Catalog) {
    match catalog_slot().write() {
        Ok(mut guard) => *guard = catalog,
        Err(poisoned) => *poisoned.into_inner() = catalog,
    }
}

/// Minimal health-check API for host smoke integration.
///
/// # Host contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes the core crate version to the host.
///
/// # Host contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive);
///   empty picks the build-mode default.
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # Host contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on
///   failure.
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = if level.trim().is_empty() {
        default_log_level().to_string()
    } else {
        level
    };
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Loads a translation catalog into the process-wide slot.
///
/// Empty or whitespace-only input resets to the identity catalog
/// (English passthrough).
///
/// # Host contract
/// - Sync call, affects every subsequent summary computation.
/// - Never panics; returns empty string on success and error message on
///   failure, leaving the previous catalog active on failure.
pub fn load_catalog(text: String) -> String {
    if text.trim().is_empty() {
        set_active_catalog(Catalog::new());
        debug!("event=catalog_reset module=bridge status=ok");
        return String::new();
    }
    match Catalog::from_lines(&text) {
        Ok(catalog) => {
            debug!(
                "event=catalog_load module=bridge status=ok entries={}",
                catalog.len()
            );
            set_active_catalog(catalog);
            String::new()
        }
        Err(err) => {
            warn!("event=catalog_load module=bridge status=error detail={err}");
            err.to_string()
        }
    }
}

/// One computed fieldset summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryItem {
    /// Stable fieldset wire key.
    pub fieldset: String,
    /// Computed display text.
    pub summary: String,
}

/// Response envelope for the all-fieldsets flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummariesResponse {
    /// Whether the payload parsed and summaries were computed.
    pub ok: bool,
    /// One item per fieldset in canonical form order; empty on failure.
    pub items: Vec<SummaryItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

impl SummariesResponse {
    fn success(items: Vec<SummaryItem>) -> Self {
        Self {
            ok: true,
            items,
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            items: Vec::new(),
            message: message.into(),
        }
    }
}

/// Response envelope for the single-fieldset flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Whether the payload parsed and the fieldset was recognized.
    pub ok: bool,
    /// Computed display text; empty on failure.
    pub summary: String,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

impl SummaryResponse {
    fn success(summary: String) -> Self {
        Self {
            ok: true,
            summary,
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            summary: String::new(),
            message: message.into(),
        }
    }
}

/// Computes every fieldset summary from one form-state JSON payload.
///
/// The payload is a JSON object mapping stable field identifiers to
/// tagged control values; absent identifiers degrade to defaults.
///
/// # Host contract
/// - Sync call; `now` is captured per invocation, so repeated calls may
///   differ once a fixed expiration date passes.
/// - Never panics; malformed JSON yields `ok=false` with a diagnostic.
pub fn fieldset_summaries(form_json: String) -> SummariesResponse {
    let fields: FieldMap = match serde_json::from_str(&form_json) {
        Ok(fields) => fields,
        Err(err) => {
            warn!("event=summaries module=bridge status=error detail={err}");
            return SummariesResponse::failure(format!("fieldset_summaries failed: {err}"));
        }
    };

    let snapshot = SettingsSnapshot::from_fields(&fields);
    let catalog = active_catalog();
    let ctx = SummaryContext::current(&catalog);
    let items = attach()
        .summarize_all(&snapshot, &ctx)
        .into_iter()
        .map(|(fieldset, summary)| SummaryItem {
            fieldset: fieldset.key().to_string(),
            summary,
        })
        .collect();
    SummariesResponse::success(items)
}

/// Computes one fieldset summary from one form-state JSON payload.
///
/// # Host contract
/// - Sync call; same payload semantics as [`fieldset_summaries`].
/// - Never panics; malformed JSON or an unknown fieldset key yields
///   `ok=false` with a diagnostic.
pub fn fieldset_summary(fieldset_key: String, form_json: String) -> SummaryResponse {
    let Some(fieldset) = Fieldset::from_key(&fieldset_key) else {
        return SummaryResponse::failure(format!(
            "fieldset_summary failed: unknown fieldset `{}`",
            fieldset_key.trim()
        ));
    };
    let fields: FieldMap = match serde_json::from_str(&form_json) {
        Ok(fields) => fields,
        Err(err) => {
            warn!("event=summary module=bridge status=error detail={err}");
            return SummaryResponse::failure(format!("fieldset_summary failed: {err}"));
        }
    };

    let snapshot = SettingsSnapshot::from_fields(&fields);
    let catalog = active_catalog();
    let ctx = SummaryContext::current(&catalog);
    match attach().summarize(fieldset, &snapshot, &ctx) {
        Some(summary) => SummaryResponse::success(summary),
        None => SummaryResponse::failure(format!(
            "fieldset_summary failed: no rule for `{}`",
            fieldset.key()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, fieldset_summaries, fieldset_summary, init_logging, load_catalog, ping,
    };
    use serde_json::json;
    use std::sync::{Mutex, MutexGuard};

    // Tests asserting summary wording share the process-wide catalog
    // slot; they serialize on this lock so parallel runs cannot observe
    // each other's catalogs.
    static CATALOG_GUARD: Mutex<()> = Mutex::new(());

    fn catalog_lock() -> MutexGuard<'static, ()> {
        CATALOG_GUARD
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn form_json() -> String {
        json!({
            "points_moderation": { "kind": "radio", "selected_index": 0 },
            "report_limit": { "kind": "select", "value": "20", "label": "20" },
            "report_usercount": { "kind": "select", "value": "10", "label": "10" },
            "category_display": { "kind": "checks", "labels": ["A", "B"] }
        })
        .to_string()
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_defaults_the_level_but_still_checks_the_dir() {
        let error = init_logging(String::new(), "relative/logs".to_string());
        assert!(error.contains("absolute"));
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn summaries_cover_all_fieldsets_in_order() {
        let response = fieldset_summaries(form_json());
        assert!(response.ok, "{}", response.message);
        let keys: Vec<&str> = response
            .items
            .iter()
            .map(|item| item.fieldset.as_str())
            .collect();
        assert_eq!(
            keys,
            [
                "status",
                "misc",
                "reports",
                "renaming",
                "category",
                "stamping",
                "points-expiration"
            ]
        );
    }

    #[test]
    fn summaries_reflect_the_payload() {
        let _guard = catalog_lock();
        let response = fieldset_summaries(form_json());
        assert!(response.ok, "{}", response.message);
        let summary_for = |key: &str| {
            response
                .items
                .iter()
                .find(|item| item.fieldset == key)
                .map(|item| item.summary.as_str())
                .expect("fieldset should be present")
        };
        assert_eq!(summary_for("status"), "Approved by default.");
        assert_eq!(summary_for("reports"), "20 transactions, 10 users per page.");
        assert_eq!(
            summary_for("category"),
            "Default: <br />Displayed: A, B"
        );
        assert_eq!(summary_for("points-expiration"), "No expiration.");
    }

    #[test]
    fn summaries_reject_malformed_json() {
        let response = fieldset_summaries("{not json".to_string());
        assert!(!response.ok);
        assert!(response.items.is_empty());
        assert!(response.message.contains("fieldset_summaries failed"));
    }

    #[test]
    fn single_summary_rejects_unknown_fieldset_key() {
        let response = fieldset_summary("expiration".to_string(), form_json());
        assert!(!response.ok);
        assert!(response.message.contains("unknown fieldset"));
    }

    #[test]
    fn single_summary_computes_one_fieldset() {
        let _guard = catalog_lock();
        let response = fieldset_summary("stamping".to_string(), "{}".to_string());
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.summary, "Allow customization of transaction time.");
    }

    #[test]
    fn load_catalog_affects_subsequent_summaries_and_resets() {
        let _guard = catalog_lock();
        let error = load_catalog(
            "Allow customization of transaction time. = Zeitwahl erlaubt.\n".to_string(),
        );
        assert!(error.is_empty(), "{error}");
        let translated = fieldset_summary("stamping".to_string(), "{}".to_string());
        assert_eq!(translated.summary, "Zeitwahl erlaubt.");

        let reset_error = load_catalog(String::new());
        assert!(reset_error.is_empty(), "{reset_error}");
        let reset = fieldset_summary("stamping".to_string(), "{}".to_string());
        assert_eq!(reset.summary, "Allow customization of transaction time.");
    }

    #[test]
    fn load_catalog_keeps_previous_catalog_on_failure() {
        let _guard = catalog_lock();
        let error = load_catalog("none = keine\n".to_string());
        assert!(error.is_empty(), "{error}");

        let parse_error = load_catalog("_date_format = %Q\n".to_string());
        assert!(parse_error.contains("not renderable"));

        let response = fieldset_summary("category".to_string(), "{}".to_string());
        assert_eq!(response.summary, "Default: <br />Displayed: keine");

        let reset_error = load_catalog(String::new());
        assert!(reset_error.is_empty(), "{reset_error}");
    }
}
