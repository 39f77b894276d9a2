use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::constants::MAX_SLUG_LENGTH;

lazy_static! {
    /// Regex for validating slugs (cities, resorts)
    /// Must be lowercase alphanumeric with single hyphens between words
    /// - Valid: "moscow", "nizhny-novgorod", "krasnaya-polyana-2"
    /// - Invalid: "-volen", "volen-", "sheregesh--sektor", "Volen", "volen_park"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Whether `slug` could name a catalog record at all
pub fn is_valid_slug(slug: &str) -> bool {
    slug.len() <= MAX_SLUG_LENGTH && SLUG_REGEX.is_match(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("moscow"));
        assert!(SLUG_REGEX.is_match("nizhny-novgorod"));
        assert!(SLUG_REGEX.is_match("krasnaya-polyana-2"));
        assert!(SLUG_REGEX.is_match("a"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-volen")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("volen-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("sheregesh--sektor")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Volen")); // uppercase
        assert!(!SLUG_REGEX.is_match("volen_park")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("../etc")); // path characters
    }

    #[test]
    fn test_is_valid_slug_limits_length() {
        assert!(is_valid_slug("sorochany"));
        assert!(!is_valid_slug(&"a".repeat(MAX_SLUG_LENGTH + 1)));
    }
}
