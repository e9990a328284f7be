//! Named-placeholder template substitution.
//!
//! # Responsibility
//! - Replace `%name` / `@name` tokens in a template with caller values.
//!
//! # Invariants
//! - Substitution is order-independent and single-pass: inserted values
//!   are never re-scanned for placeholders.
//! - A token with no matching argument substitutes the empty string.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[%@][a-z][a-z0-9_]*").expect("valid placeholder regex"));

/// Replaces every placeholder token in `template` with its paired value.
///
/// Tokens are a `%` or `@` sigil followed by `[a-z][a-z0-9_]*`, matched
/// greedily. Lookup ignores the sigil, so `%date` and `@date` resolve to
/// the same `("date", ...)` pair. Unknown tokens become empty strings.
pub fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[0][1..];
            args.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::substitute;

    #[test]
    fn substitutes_both_sigils_by_name() {
        let out = substitute(
            "%limit transactions, @usercount users per page.",
            &[("usercount", "10"), ("limit", "20")],
        );
        assert_eq!(out, "20 transactions, 10 users per page.");
    }

    #[test]
    fn missing_argument_substitutes_empty_string() {
        assert_eq!(substitute("Expiration at %date.", &[]), "Expiration at .");
    }

    #[test]
    fn matches_longest_token_name() {
        let out = substitute(
            "Default: %category<br />Displayed: %category_list",
            &[("category", "General"), ("category_list", "A, B")],
        );
        assert_eq!(out, "Default: General<br />Displayed: A, B");
    }

    #[test]
    fn inserted_values_are_never_rescanned() {
        let out = substitute("%a and %b", &[("a", "%b"), ("b", "beta")]);
        assert_eq!(out, "%b and beta");
    }

    #[test]
    fn bare_sigils_and_non_token_text_stay_literal() {
        assert_eq!(substitute("100% done @ noon", &[]), "100% done @ noon");
    }
}
