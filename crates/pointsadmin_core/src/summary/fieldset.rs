//! Fieldset identity for the admin settings form.

use serde::{Deserialize, Serialize};

/// The seven collapsible fieldsets the summary engine covers.
///
/// Declaration order is the canonical form order and drives
/// [`Fieldset::ALL`] as well as `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fieldset {
    /// Moderation default for new transactions.
    Status,
    /// Transaction message display default.
    Misc,
    /// Listing page sizes.
    Reports,
    /// Point-unit branding strings.
    Renaming,
    /// Default and displayed categories.
    Category,
    /// Transaction time stamping policy.
    Stamping,
    /// Fixed or relative point expiration.
    PointsExpiration,
}

impl Fieldset {
    /// All fieldsets in canonical form order.
    pub const ALL: [Fieldset; 7] = [
        Fieldset::Status,
        Fieldset::Misc,
        Fieldset::Reports,
        Fieldset::Renaming,
        Fieldset::Category,
        Fieldset::Stamping,
        Fieldset::PointsExpiration,
    ];

    /// Stable wire key for this fieldset.
    pub fn key(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Misc => "misc",
            Self::Reports => "reports",
            Self::Renaming => "renaming",
            Self::Category => "category",
            Self::Stamping => "stamping",
            Self::PointsExpiration => "points-expiration",
        }
    }

    /// Parses a wire key, tolerating surrounding whitespace.
    pub fn from_key(value: &str) -> Option<Self> {
        match value.trim() {
            "status" => Some(Self::Status),
            "misc" => Some(Self::Misc),
            "reports" => Some(Self::Reports),
            "renaming" => Some(Self::Renaming),
            "category" => Some(Self::Category),
            "stamping" => Some(Self::Stamping),
            "points-expiration" => Some(Self::PointsExpiration),
            _ => None,
        }
    }
}
