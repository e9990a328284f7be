//! Translation catalog: source template to localized template.
//!
//! # Responsibility
//! - Resolve English source templates to translated templates.
//! - Render fixed dates with a per-catalog format pattern.
//!
//! # Invariants
//! - Lookup misses fall back to the source template (identity catalog).
//! - Date rendering never fails: a broken pattern is rejected at parse
//!   time, and rendering always has the ISO fallback.

use crate::i18n::template::substitute;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter, Write};
use std::path::{Path, PathBuf};

/// Date pattern used when a catalog does not override it.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Reserved catalog key that overrides the date format pattern.
const DATE_FORMAT_KEY: &str = "_date_format";

static PROBE_DATE: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2001, 12, 31).expect("valid probe date"));

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading errors.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// `_date_format` line chrono cannot render.
    InvalidDateFormat(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::InvalidDateFormat(pattern) => {
                write!(f, "catalog date format is not renderable: `{pattern}`")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidDateFormat(_) => None,
        }
    }
}

/// Mapping from source template to translated template, plus the date
/// format pattern used by the expiration summary.
///
/// The default catalog is empty: every template passes through
/// unchanged, which is the English rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
    date_format: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Catalog {
    /// Creates the identity catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses catalog text.
    ///
    /// Line format: `source template = translated template`. Blank
    /// lines and `#` comments are skipped, as are lines without `=` or
    /// with an empty source side. The reserved source `_date_format`
    /// sets the date pattern instead of adding an entry.
    ///
    /// # Errors
    /// - [`CatalogError::InvalidDateFormat`] when a `_date_format` value
    ///   cannot render a probe date.
    pub fn from_lines(text: &str) -> CatalogResult<Self> {
        let mut catalog = Self::default();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((source, translation)) = trimmed.split_once('=') else {
                continue;
            };
            let source = source.trim();
            let translation = translation.trim();
            if source.is_empty() {
                continue;
            }
            if source == DATE_FORMAT_KEY {
                if try_format_date(*PROBE_DATE, translation).is_none() {
                    return Err(CatalogError::InvalidDateFormat(translation.to_string()));
                }
                catalog.date_format = translation.to_string();
                continue;
            }
            catalog
                .entries
                .insert(source.to_string(), translation.to_string());
        }
        Ok(catalog)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    /// - [`CatalogError::Io`] when the file cannot be read.
    /// - Parse errors as in [`Catalog::from_lines`].
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_lines(&text)
    }

    /// Number of translated templates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog translates nothing (identity).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a source template, falling back to the source itself.
    pub fn lookup<'a>(&'a self, template: &'a str) -> &'a str {
        self.entries
            .get(template)
            .map(String::as_str)
            .unwrap_or(template)
    }

    /// Localizes a template and substitutes named placeholders.
    pub fn translate(&self, template: &str, args: &[(&str, &str)]) -> String {
        substitute(self.lookup(template), args)
    }

    /// Active date format pattern.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Renders a date with the catalog pattern, ISO fallback.
    pub fn format_date(&self, date: NaiveDate) -> String {
        try_format_date(date, &self.date_format)
            .unwrap_or_else(|| date.format(DEFAULT_DATE_FORMAT).to_string())
    }
}

/// Renders `date` with `pattern`, `None` when chrono cannot render it.
fn try_format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::{try_format_date, Catalog, CatalogError, DEFAULT_DATE_FORMAT};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn default_catalog_is_identity_with_iso_dates() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.lookup("No expiration."), "No expiration.");
        assert_eq!(catalog.date_format(), DEFAULT_DATE_FORMAT);
        assert_eq!(catalog.format_date(date(2031, 3, 9)), "2031-03-09");
    }

    #[test]
    fn from_lines_parses_entries_comments_and_blanks() {
        let catalog = Catalog::from_lines(
            "# admin summaries\n\
             No expiration. = Keine Ablaufzeit.\n\
             \n\
             not a catalog line\n\
             none = keine\n",
        )
        .expect("catalog text should parse");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("No expiration."), "Keine Ablaufzeit.");
        assert_eq!(catalog.lookup("none"), "keine");
        assert_eq!(catalog.lookup("unlisted"), "unlisted");
    }

    #[test]
    fn translate_substitutes_into_translated_template() {
        let catalog = Catalog::from_lines(
            "Expiration at %date. = Ablauf am %date.\n",
        )
        .expect("catalog text should parse");

        assert_eq!(
            catalog.translate("Expiration at %date.", &[("date", "2031-03-09")]),
            "Ablauf am 2031-03-09."
        );
        assert_eq!(
            catalog.translate("No expiration.", &[]),
            "No expiration."
        );
    }

    #[test]
    fn date_format_override_is_applied() {
        let catalog = Catalog::from_lines("_date_format = %d.%m.%Y\n")
            .expect("catalog text should parse");
        assert_eq!(catalog.format_date(date(2031, 3, 9)), "09.03.2031");
    }

    #[test]
    fn unrenderable_date_format_is_rejected_at_parse() {
        let err = Catalog::from_lines("_date_format = %Q\n")
            .expect_err("bad date format should be rejected");
        assert!(matches!(err, CatalogError::InvalidDateFormat(_)));
    }

    #[test]
    fn try_format_date_covers_fallback_path() {
        assert_eq!(try_format_date(date(2001, 12, 31), "%Q"), None);
        assert_eq!(
            try_format_date(date(2001, 12, 31), "%Y/%m/%d").as_deref(),
            Some("2001/12/31")
        );
    }
}
