//! Raw form-control values keyed by stable field identifier.
//!
//! # Responsibility
//! - Define the wire shape the host uses to report current form state.
//! - Name the stable field identifiers this crate reads.
//!
//! # Invariants
//! - Values are read-only captures; nothing here mutates form state.
//! - Absent identifiers and wrong-kind values are legal inputs and
//!   degrade to defaults downstream.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier for the moderation-default radio group.
pub const FIELD_POINTS_MODERATION: &str = "points_moderation";
/// Identifier for the display-message radio group.
pub const FIELD_DISPLAY_MESSAGE: &str = "display_message";
/// Identifier for the transactions-per-page select.
pub const FIELD_REPORT_LIMIT: &str = "report_limit";
/// Identifier for the users-per-page select.
pub const FIELD_REPORT_USERCOUNT: &str = "report_usercount";
/// Identifier for the uppercase-plural branding text input.
pub const FIELD_TRANS_UCPOINTS: &str = "trans_ucpoints";
/// Identifier for the lowercase-plural branding text input.
pub const FIELD_TRANS_LCPOINTS: &str = "trans_lcpoints";
/// Identifier for the uppercase-singular branding text input.
pub const FIELD_TRANS_UCPOINT: &str = "trans_ucpoint";
/// Identifier for the lowercase-singular branding text input.
pub const FIELD_TRANS_LCPOINT: &str = "trans_lcpoint";
/// Identifier for the default-category select.
pub const FIELD_CATEGORY_DEFAULT: &str = "category_default";
/// Identifier for the displayed-categories checkbox group.
pub const FIELD_CATEGORY_DISPLAY: &str = "category_display";
/// Identifier for the force-system-time checkbox.
pub const FIELD_TRANSACTION_TIMESTAMP: &str = "transaction_timestamp";
/// Identifier for the fixed-expiration Y/M/D select trio.
pub const FIELD_EXPIREON_DATE: &str = "expireon_date";
/// Identifier for the relative-expiration select.
pub const FIELD_EXPIREAFTER_DATE: &str = "expireafter_date";

const KNOWN_FIELD_IDS: &[&str] = &[
    FIELD_POINTS_MODERATION,
    FIELD_DISPLAY_MESSAGE,
    FIELD_REPORT_LIMIT,
    FIELD_REPORT_USERCOUNT,
    FIELD_TRANS_UCPOINTS,
    FIELD_TRANS_LCPOINTS,
    FIELD_TRANS_UCPOINT,
    FIELD_TRANS_LCPOINT,
    FIELD_CATEGORY_DEFAULT,
    FIELD_CATEGORY_DISPLAY,
    FIELD_TRANSACTION_TIMESTAMP,
    FIELD_EXPIREON_DATE,
    FIELD_EXPIREAFTER_DATE,
];

/// Returns the field identifiers the summary rules read.
pub fn known_field_ids() -> &'static [&'static str] {
    KNOWN_FIELD_IDS
}

/// Mapping from stable field identifier to captured control value.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Raw option values of a year/month/day select trio.
///
/// Parts stay as strings because unselected selects surface as empty
/// values; parsing happens in [`DateParts::to_date`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub day: String,
}

impl DateParts {
    /// Composes a calendar date from the three parts.
    ///
    /// Months are calendar months 1-12. Returns `None` when any part is
    /// empty, non-numeric, or the triple is not a real calendar date.
    pub fn to_date(&self) -> Option<NaiveDate> {
        let year: i32 = self.year.trim().parse().ok()?;
        let month: u32 = self.month.trim().parse().ok()?;
        let day: u32 = self.day.trim().parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// Current value of one form control, as captured by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldValue {
    /// Single checkbox state.
    Checkbox {
        #[serde(default)]
        checked: bool,
    },
    /// Radio group selection as zero-based option index; `None` when no
    /// option is checked.
    Radio {
        #[serde(default)]
        selected_index: Option<u32>,
    },
    /// Single-select current option value and display label.
    Select {
        #[serde(default)]
        value: String,
        #[serde(default)]
        label: String,
    },
    /// Free text input content.
    Text {
        #[serde(default)]
        value: String,
    },
    /// Checkbox group: display labels of the checked boxes, form order.
    Checks {
        #[serde(default)]
        labels: Vec<String>,
    },
    /// Year/month/day select trio.
    DateParts(DateParts),
}

impl FieldValue {
    /// Checkbox state, `None` for other kinds.
    pub fn checkbox_checked(&self) -> Option<bool> {
        match self {
            Self::Checkbox { checked } => Some(*checked),
            _ => None,
        }
    }

    /// Selected radio index, `None` when unchecked or not a radio.
    pub fn radio_index(&self) -> Option<u32> {
        match self {
            Self::Radio { selected_index } => *selected_index,
            _ => None,
        }
    }

    /// Select option value, `None` for other kinds.
    pub fn select_value(&self) -> Option<&str> {
        match self {
            Self::Select { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Select option display label, `None` for other kinds.
    pub fn select_label(&self) -> Option<&str> {
        match self {
            Self::Select { label, .. } => Some(label.as_str()),
            _ => None,
        }
    }

    /// Text input content, `None` for other kinds.
    pub fn text_value(&self) -> Option<&str> {
        match self {
            Self::Text { value } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Checked labels of a checkbox group, `None` for other kinds.
    pub fn check_labels(&self) -> Option<&[String]> {
        match self {
            Self::Checks { labels } => Some(labels.as_slice()),
            _ => None,
        }
    }

    /// Date-part values, `None` for other kinds.
    pub fn date_parts(&self) -> Option<&DateParts> {
        match self {
            Self::DateParts(parts) => Some(parts),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{known_field_ids, DateParts, FieldValue};
    use std::collections::BTreeSet;

    #[test]
    fn known_field_ids_are_unique() {
        let ids = known_field_ids();
        let unique: BTreeSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(ids.len(), 13);
    }

    #[test]
    fn date_parts_compose_valid_calendar_date() {
        let parts = DateParts {
            year: "2030".to_string(),
            month: " 2 ".to_string(),
            day: "29".to_string(),
        };
        let date = parts.to_date().expect("2030-02-29 is a leap-year date");
        assert_eq!(date.to_string(), "2030-02-29");
    }

    #[test]
    fn date_parts_reject_empty_and_garbage_parts() {
        assert_eq!(DateParts::default().to_date(), None);

        let garbage = DateParts {
            year: "soon".to_string(),
            month: "1".to_string(),
            day: "1".to_string(),
        };
        assert_eq!(garbage.to_date(), None);
    }

    #[test]
    fn date_parts_reject_out_of_range_month_without_rollover() {
        let parts = DateParts {
            year: "2030".to_string(),
            month: "13".to_string(),
            day: "1".to_string(),
        };
        assert_eq!(parts.to_date(), None);
    }

    #[test]
    fn accessors_return_none_for_wrong_kind() {
        let value = FieldValue::Text {
            value: "Points".to_string(),
        };
        assert_eq!(value.checkbox_checked(), None);
        assert_eq!(value.radio_index(), None);
        assert_eq!(value.select_value(), None);
        assert_eq!(value.check_labels(), None);
        assert_eq!(value.text_value(), Some("Points"));
    }
}
