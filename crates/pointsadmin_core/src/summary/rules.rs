//! Summary rules for the seven settings fieldsets.
//!
//! # Responsibility
//! - Turn one typed snapshot section into one display string each.
//! - Keep every source template in one place for catalog authors.
//!
//! # Invariants
//! - Rules are pure functions of `(section, catalog, now)`; no reads
//!   beyond their arguments, no side effects beyond the returned text.
//! - Rules never fail: absent values pick the default branch or an
//!   empty substitution.

use crate::i18n::catalog::Catalog;
use crate::model::snapshot::{
    CategoryFields, ExpirationFields, MiscFields, RenamingFields, ReportFields, StampingFields,
    StatusFields,
};
use chrono::{NaiveDateTime, NaiveTime};

/// Displayed-category labels shown before the list is cut to `, ...`.
const MAX_DISPLAYED_LABELS: usize = 3;

/// Source template: moderation radio index 0 checked.
pub const STATUS_APPROVED: &str = "Approved by default.";
/// Source template: any other moderation state.
pub const STATUS_MODERATED: &str = "Moderated by default.";
/// Source template: display-message radio index 0 checked.
pub const MISC_NO_MESSAGE: &str = "No message is displayed by default.";
/// Source template: any other display-message state.
pub const MISC_MESSAGE: &str = "Message is displayed by default.";
/// Source template for the listing page sizes.
pub const REPORTS_TEMPLATE: &str = "%limit transactions, %usercount users per page.";
/// Source template for the four branding strings.
pub const RENAMING_TEMPLATE: &str = "@ucpoints, @lcpoints, @ucpoint, @lcpoint.";
/// Source template for default and displayed categories.
pub const CATEGORY_TEMPLATE: &str = "Default: %category<br />Displayed: %display_categories";
/// Source word shown when no display category is checked.
pub const CATEGORY_NONE: &str = "none";
/// Source template: timestamp checkbox checked.
pub const STAMPING_SYSTEM_TIME: &str = "Always use system time for transactions.";
/// Source template: timestamp checkbox unchecked.
pub const STAMPING_CUSTOM_TIME: &str = "Allow customization of transaction time.";
/// Source template for a fixed future expiration date.
pub const EXPIRATION_AT_TEMPLATE: &str = "Expiration at %date.";
/// Source template for a relative expiration span.
pub const EXPIRATION_IN_TEMPLATE: &str = "Expiration in %date.";
/// Source template when neither expiration mode is active.
pub const EXPIRATION_NONE: &str = "No expiration.";

/// Moderation default summary.
pub fn status_summary(fields: &StatusFields, catalog: &Catalog) -> String {
    if fields.moderation_index == Some(0) {
        catalog.translate(STATUS_APPROVED, &[])
    } else {
        catalog.translate(STATUS_MODERATED, &[])
    }
}

/// Transaction message display summary.
pub fn misc_summary(fields: &MiscFields, catalog: &Catalog) -> String {
    if fields.display_message_index == Some(0) {
        catalog.translate(MISC_NO_MESSAGE, &[])
    } else {
        catalog.translate(MISC_MESSAGE, &[])
    }
}

/// Listing page-size summary. Select values substitute verbatim.
pub fn reports_summary(fields: &ReportFields, catalog: &Catalog) -> String {
    catalog.translate(
        REPORTS_TEMPLATE,
        &[
            ("limit", fields.limit.as_str()),
            ("usercount", fields.usercount.as_str()),
        ],
    )
}

/// Point-unit branding summary. Text values substitute verbatim.
pub fn renaming_summary(fields: &RenamingFields, catalog: &Catalog) -> String {
    catalog.translate(
        RENAMING_TEMPLATE,
        &[
            ("ucpoints", fields.ucpoints.as_str()),
            ("lcpoints", fields.lcpoints.as_str()),
            ("ucpoint", fields.ucpoint.as_str()),
            ("lcpoint", fields.lcpoint.as_str()),
        ],
    )
}

/// Category summary: default label plus the displayed-label list.
///
/// Zero checked labels render the localized [`CATEGORY_NONE`] word;
/// otherwise labels are trimmed, joined with `, `, and cut to the
/// first [`MAX_DISPLAYED_LABELS`] plus `, ...` when more exist.
pub fn category_summary(fields: &CategoryFields, catalog: &Catalog) -> String {
    let displayed = if fields.displayed_labels.is_empty() {
        catalog.translate(CATEGORY_NONE, &[])
    } else {
        join_displayed_labels(&fields.displayed_labels)
    };
    catalog.translate(
        CATEGORY_TEMPLATE,
        &[
            ("category", fields.default_label.as_str()),
            ("display_categories", displayed.as_str()),
        ],
    )
}

/// Transaction time-stamping summary.
pub fn stamping_summary(fields: &StampingFields, catalog: &Catalog) -> String {
    if fields.force_system_time {
        catalog.translate(STAMPING_SYSTEM_TIME, &[])
    } else {
        catalog.translate(STAMPING_CUSTOM_TIME, &[])
    }
}

/// Expiration summary, checked in fixed-date, expire-after, none order.
///
/// The fixed date wins only when its local midnight lies strictly after
/// `now`; a past or unparseable date falls through to the expire-after
/// rule, which applies when the select value parses to an integer
/// greater than zero.
pub fn expiration_summary(
    fields: &ExpirationFields,
    catalog: &Catalog,
    now: NaiveDateTime,
) -> String {
    if let Some(date) = fields.expire_on.to_date() {
        if date.and_time(NaiveTime::MIN) > now {
            let rendered = catalog.format_date(date);
            return catalog.translate(EXPIRATION_AT_TEMPLATE, &[("date", rendered.as_str())]);
        }
    }
    if expire_after_seconds(&fields.expire_after_value) > 0 {
        return catalog.translate(
            EXPIRATION_IN_TEMPLATE,
            &[("date", fields.expire_after_label.as_str())],
        );
    }
    catalog.translate(EXPIRATION_NONE, &[])
}

fn join_displayed_labels(labels: &[String]) -> String {
    let mut joined = labels
        .iter()
        .take(MAX_DISPLAYED_LABELS)
        .map(|label| label.trim())
        .collect::<Vec<_>>()
        .join(", ");
    if labels.len() > MAX_DISPLAYED_LABELS {
        joined.push_str(", ...");
    }
    joined
}

fn expire_after_seconds(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}
