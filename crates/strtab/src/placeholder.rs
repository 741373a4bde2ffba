//! Lexical extraction of printf-style format specifiers.
//!
//! Matching is purely syntactic: a specifier is an optional explicit
//! positional index (`1$`), optional flags, field width, precision, and
//! length modifier, followed by a conversion character from the recognized
//! set (including `%@` object substitution and the `%%` literal). No
//! semantic validation is performed.

use regex::Regex;
use std::sync::LazyLock;

// `ll`/`hh` are listed before `l`/`h` so two-character length modifiers
// match as a unit.
static FORMAT_SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?:\d+\$)?[-+0 #]*\d*(?:\.\d+)?(?:hh|h|ll|l|L|z|j|t)?[diouxXeEfFgGaAcspn@%]")
        .unwrap()
});

/// Extract the format placeholders of a string value, in order of
/// appearance.
pub fn extract_placeholders(value: &str) -> Vec<String> {
    FORMAT_SPECIFIER
        .find_iter(value)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_common_specifiers() {
        assert_eq!(
            extract_placeholders("Count: %d of %@ (%0.2f%%)"),
            vec!["%d", "%@", "%0.2f", "%%"]
        );
    }

    #[test]
    fn test_extracts_length_modifiers() {
        assert_eq!(
            extract_placeholders("%ld %lld %hhu %zu"),
            vec!["%ld", "%lld", "%hhu", "%zu"]
        );
    }

    #[test]
    fn test_extracts_positional_indices() {
        assert_eq!(
            extract_placeholders("%2$@ before %1$@"),
            vec!["%2$@", "%1$@"]
        );
    }

    #[test]
    fn test_no_placeholders() {
        assert!(extract_placeholders("plain text").is_empty());
        assert!(extract_placeholders("").is_empty());
    }

    #[test]
    fn test_trailing_percent_is_not_a_specifier() {
        assert!(extract_placeholders("Discount: 50%").is_empty());
    }

    #[test]
    fn test_space_counts_as_a_flag() {
        // The flag set includes a literal space, so "% d" is a specifier.
        assert_eq!(extract_placeholders("100% done"), vec!["% d"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let value = "a %d b %@ c %1$.3f";
        assert_eq!(extract_placeholders(value), extract_placeholders(value));
    }
}
