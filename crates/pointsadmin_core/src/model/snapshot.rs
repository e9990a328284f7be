//! Typed settings snapshot consumed by the summary rules.
//!
//! # Responsibility
//! - Group raw field values into one section per admin fieldset.
//! - Keep summary rules free of field-map lookups and kind checks.
//!
//! # Invariants
//! - Every field carries a serde default; a snapshot can always be
//!   built, no matter how sparse the host's capture was.
//! - Building a snapshot never fails and never mutates its input.

use crate::model::field::{
    DateParts, FieldMap, FieldValue, FIELD_CATEGORY_DEFAULT, FIELD_CATEGORY_DISPLAY,
    FIELD_DISPLAY_MESSAGE, FIELD_EXPIREAFTER_DATE, FIELD_EXPIREON_DATE, FIELD_POINTS_MODERATION,
    FIELD_REPORT_LIMIT, FIELD_REPORT_USERCOUNT, FIELD_TRANSACTION_TIMESTAMP, FIELD_TRANS_LCPOINT,
    FIELD_TRANS_LCPOINTS, FIELD_TRANS_UCPOINT, FIELD_TRANS_UCPOINTS,
};
use serde::{Deserialize, Serialize};

/// Moderation-default section (`status` fieldset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFields {
    /// Zero-based index of the checked moderation radio, if any.
    #[serde(default)]
    pub moderation_index: Option<u32>,
}

/// Message-display section (`misc` fieldset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiscFields {
    /// Zero-based index of the checked display-message radio, if any.
    #[serde(default)]
    pub display_message_index: Option<u32>,
}

/// Listing page-size section (`reports` fieldset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFields {
    /// Transactions-per-page select value.
    #[serde(default)]
    pub limit: String,
    /// Users-per-page select value.
    #[serde(default)]
    pub usercount: String,
}

/// Point-unit branding section (`renaming` fieldset).
///
/// Four spellings of the configurable unit name: uppercase/lowercase
/// crossed with plural/singular.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamingFields {
    #[serde(default)]
    pub ucpoints: String,
    #[serde(default)]
    pub lcpoints: String,
    #[serde(default)]
    pub ucpoint: String,
    #[serde(default)]
    pub lcpoint: String,
}

/// Category section (`category` fieldset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFields {
    /// Display label of the selected default category.
    #[serde(default)]
    pub default_label: String,
    /// Display labels of the checked profile-display categories.
    #[serde(default)]
    pub displayed_labels: Vec<String>,
}

/// Transaction time-stamping section (`stamping` fieldset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampingFields {
    /// Whether transactions always use system time.
    #[serde(default)]
    pub force_system_time: bool,
}

/// Expiration section (`points-expiration` fieldset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationFields {
    /// Fixed expiration date parts from the Y/M/D selects.
    #[serde(default)]
    pub expire_on: DateParts,
    /// Relative-expiration select value (numeric string, "0" = off).
    #[serde(default)]
    pub expire_after_value: String,
    /// Relative-expiration select display label, e.g. "1 year".
    #[serde(default)]
    pub expire_after_label: String,
}

/// One typed capture of the whole settings form, one section per
/// fieldset. Summary rules read this and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    #[serde(default)]
    pub status: StatusFields,
    #[serde(default)]
    pub misc: MiscFields,
    #[serde(default)]
    pub reports: ReportFields,
    #[serde(default)]
    pub renaming: RenamingFields,
    #[serde(default)]
    pub category: CategoryFields,
    #[serde(default)]
    pub stamping: StampingFields,
    #[serde(default)]
    pub expiration: ExpirationFields,
}

impl SettingsSnapshot {
    /// Builds a typed snapshot from a raw field map.
    ///
    /// Missing identifiers and wrong-kind values count as absent and
    /// leave the section field at its default. Never fails.
    pub fn from_fields(fields: &FieldMap) -> Self {
        Self {
            status: StatusFields {
                moderation_index: fields
                    .get(FIELD_POINTS_MODERATION)
                    .and_then(FieldValue::radio_index),
            },
            misc: MiscFields {
                display_message_index: fields
                    .get(FIELD_DISPLAY_MESSAGE)
                    .and_then(FieldValue::radio_index),
            },
            reports: ReportFields {
                limit: select_value(fields, FIELD_REPORT_LIMIT),
                usercount: select_value(fields, FIELD_REPORT_USERCOUNT),
            },
            renaming: RenamingFields {
                ucpoints: text_value(fields, FIELD_TRANS_UCPOINTS),
                lcpoints: text_value(fields, FIELD_TRANS_LCPOINTS),
                ucpoint: text_value(fields, FIELD_TRANS_UCPOINT),
                lcpoint: text_value(fields, FIELD_TRANS_LCPOINT),
            },
            category: CategoryFields {
                default_label: select_label(fields, FIELD_CATEGORY_DEFAULT),
                displayed_labels: fields
                    .get(FIELD_CATEGORY_DISPLAY)
                    .and_then(FieldValue::check_labels)
                    .map(<[String]>::to_vec)
                    .unwrap_or_default(),
            },
            stamping: StampingFields {
                force_system_time: fields
                    .get(FIELD_TRANSACTION_TIMESTAMP)
                    .and_then(FieldValue::checkbox_checked)
                    .unwrap_or(false),
            },
            expiration: ExpirationFields {
                expire_on: fields
                    .get(FIELD_EXPIREON_DATE)
                    .and_then(FieldValue::date_parts)
                    .cloned()
                    .unwrap_or_default(),
                expire_after_value: select_value(fields, FIELD_EXPIREAFTER_DATE),
                expire_after_label: select_label(fields, FIELD_EXPIREAFTER_DATE),
            },
        }
    }
}

fn select_value(fields: &FieldMap, id: &str) -> String {
    fields
        .get(id)
        .and_then(FieldValue::select_value)
        .unwrap_or_default()
        .to_string()
}

fn select_label(fields: &FieldMap, id: &str) -> String {
    fields
        .get(id)
        .and_then(FieldValue::select_label)
        .unwrap_or_default()
        .to_string()
}

fn text_value(fields: &FieldMap, id: &str) -> String {
    fields
        .get(id)
        .and_then(FieldValue::text_value)
        .unwrap_or_default()
        .to_string()
}
