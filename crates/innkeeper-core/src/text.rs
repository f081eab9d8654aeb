// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text helpers for matching and storing free-text fields.

/// Field separator used by both flat-file stores.
pub const FIELD_DELIMITER: char = ',';

/// Compares two strings ignoring case.
///
/// Each `char` is folded to a single lowercase `char` (the simple Unicode
/// mapping), so strings only match when they have the same number of
/// `char`s. No locale is consulted and no whitespace is trimmed, so the
/// result is the same on every platform.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().map(fold_case).eq(b.chars().map(fold_case))
}

/// Simple lowercase mapping of one `char`.
///
/// `char::to_lowercase` yields the full mapping, which is longer than one
/// `char` only for `İ` (U+0130); its leading code point is the simple mapping.
fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Returns why `value` cannot be written as a single store field, if it can't.
pub fn unstorable_reason(value: &str) -> Option<String> {
    if value.contains(FIELD_DELIMITER) {
        Some(format!("must not contain `{FIELD_DELIMITER}`"))
    } else if value.contains(['\n', '\r']) {
        Some("must not contain line breaks".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dotted_capital_i_folds_to_plain_i() {
        assert!(eq_ignore_case("İ", "i"));
        assert!(eq_ignore_case("İSTANBUL", "istanbul"));
        assert!(!eq_ignore_case("İ", "i\u{307}"));
    }

    #[test]
    fn ascii_case_is_ignored() {
        assert!(eq_ignore_case("Suite", "sUITE"));
        assert!(eq_ignore_case("a@X.com", "A@x.COM"));
    }

    #[test]
    fn different_strings_do_not_match() {
        assert!(!eq_ignore_case("Suite", "Suites"));
        assert!(!eq_ignore_case("", "a"));
        assert!(!eq_ignore_case(" Suite", "Suite"));
    }

    #[test]
    fn non_ascii_letters_fold() {
        assert!(eq_ignore_case("Ÿ", "ÿ"));
        assert!(eq_ignore_case("ÉTAGE", "étage"));
    }

    #[test]
    fn storable_field_checks() {
        assert!(unstorable_reason("Alice").is_none());
        assert!(unstorable_reason("Smith, John").is_some());
        assert!(unstorable_reason("two\nlines").is_some());
        assert!(unstorable_reason("").is_none());
    }

    proptest! {
        #[test]
        fn ascii_matches_in_any_case(s in "[ -~]{0,24}") {
            prop_assert!(eq_ignore_case(&s, &s));
            prop_assert!(eq_ignore_case(&s.to_ascii_lowercase(), &s.to_ascii_uppercase()));
        }
    }
}
