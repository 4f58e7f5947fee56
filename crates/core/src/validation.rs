//! Input validation rules for heritage records.
//!
//! DTOs derive [`validator::Validate`] and point at the hooks in this module;
//! [`validation_error`] folds the collected field errors into a single
//! [`CoreError::Validation`] naming the offending fields.

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Maximum length for a slug.
pub const MAX_SLUG_LEN: usize = 100;

/// Check the slug shape: lowercase ASCII alphanumerics separated by single
/// hyphens, no leading or trailing hyphen.
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return false;
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// `validator` hook for slug fields.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(ValidationError::new("slug"))
    }
}

/// Collapse `validator` output into a domain error.
///
/// The reason lists the invalid fields by their wire (camelCase) names in a
/// stable order; per-field details stay server-side.
pub fn validation_error(entity: &'static str, errors: &ValidationErrors) -> CoreError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|name| camel_case(name))
        .collect();
    fields.sort();
    fields.dedup();

    CoreError::Validation {
        entity,
        reason: format!("missing or invalid fields: {}", fields.join(", ")),
    }
}

fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_typical_slugs() {
        for slug in ["holi", "taj-mahal", "indus-valley", "era-2", "x"] {
            assert!(is_valid_slug(slug), "{slug} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_slugs() {
        let too_long = "a".repeat(MAX_SLUG_LEN + 1);
        for slug in [
            "",
            "Holi",
            "taj mahal",
            "-lead",
            "trail-",
            "double--hyphen",
            "under_score",
            "ümlaut",
            too_long.as_str(),
        ] {
            assert!(!is_valid_slug(slug), "{slug:?} should be invalid");
        }
    }

    #[test]
    fn slug_hook_uses_slug_code() {
        let err = validate_slug("Bad Slug").unwrap_err();
        assert_eq!(err.code, "slug");
    }

    #[test]
    fn camel_cases_field_names() {
        assert_eq!(camel_case("image_url"), "imageUrl");
        assert_eq!(camel_case("detailed_description"), "detailedDescription");
        assert_eq!(camel_case("title"), "title");
    }

    #[test]
    fn validation_error_lists_fields_sorted() {
        let mut errors = ValidationErrors::new();
        errors.add("title", ValidationError::new("length"));
        errors.add("image_url", ValidationError::new("length"));

        let err = validation_error("Pillar", &errors);
        assert_matches!(
            err,
            CoreError::Validation { entity: "Pillar", ref reason }
                if reason == "missing or invalid fields: imageUrl, title"
        );
    }
}
