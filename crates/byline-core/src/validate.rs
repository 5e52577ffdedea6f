//! Field validators - pure functions, one per business rule.
//!
//! Each validator checks a single field value and returns a typed
//! [`ValidationError`] on rejection. Validators never touch storage; the one
//! rule that needs a storage read (author name uniqueness) lives in the
//! managers, which call these before any persistence attempt.

use crate::domain::Category;
use crate::error::{ValidationError, ValidationKind};

/// Required length of a phone number, in decimal digits.
pub const PHONE_NUMBER_LEN: usize = 10;

/// Minimum character length of post content.
pub const CONTENT_MIN_LEN: usize = 250;

/// Maximum character length of a post summary.
pub const SUMMARY_MAX_LEN: usize = 250;

/// A post title must contain at least one of these, as a case-sensitive
/// substring.
pub const TITLE_MARKER_PHRASES: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];

/// An author name must be non-empty after trimming whitespace.
pub fn author_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new(
            ValidationKind::EmptyName,
            "Author must have a name.",
        ));
    }
    Ok(())
}

/// A phone number, when present, must be exactly 10 decimal digits.
/// An absent phone number is always valid.
pub fn phone_number(phone_number: Option<&str>) -> Result<(), ValidationError> {
    if let Some(phone) = phone_number {
        let valid =
            phone.chars().count() == PHONE_NUMBER_LEN && phone.chars().all(|c| c.is_ascii_digit());
        if !valid {
            return Err(ValidationError::new(
                ValidationKind::InvalidPhoneFormat,
                "Phone number must be exactly 10 digits.",
            ));
        }
    }
    Ok(())
}

/// A title must contain at least one marker phrase.
pub fn post_title(title: &str) -> Result<(), ValidationError> {
    if !TITLE_MARKER_PHRASES
        .iter()
        .any(|phrase| title.contains(phrase))
    {
        return Err(ValidationError::new(
            ValidationKind::MissingRequiredPhrase,
            "Title must contain one of: 'Won't Believe', 'Secret', 'Top', 'Guess'",
        ));
    }
    Ok(())
}

/// Content must be at least 250 characters. No upper bound.
pub fn post_content(content: &str) -> Result<(), ValidationError> {
    if content.chars().count() < CONTENT_MIN_LEN {
        return Err(ValidationError::new(
            ValidationKind::ContentTooShort,
            "Content must be at least 250 characters long.",
        ));
    }
    Ok(())
}

/// A summary, when present, must be at most 250 characters.
/// An absent summary is always valid.
pub fn post_summary(summary: Option<&str>) -> Result<(), ValidationError> {
    if let Some(summary) = summary {
        if summary.chars().count() > SUMMARY_MAX_LEN {
            return Err(ValidationError::new(
                ValidationKind::SummaryTooLong,
                "Summary must be maximum 250 characters.",
            ));
        }
    }
    Ok(())
}

/// Parse a raw category value into the closed enumeration.
///
/// The check runs unconditionally: an absent category is rejected the same as
/// an unknown one. Matching is exact and case-sensitive.
pub fn category(category: Option<&str>) -> Result<Category, ValidationError> {
    match category {
        Some("Fiction") => Ok(Category::Fiction),
        Some("Non-Fiction") => Ok(Category::NonFiction),
        _ => Err(ValidationError::new(
            ValidationKind::InvalidCategory,
            "Category must be either Fiction or Non-Fiction.",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_name_accepts_non_empty() {
        assert!(author_name("Jane Doe").is_ok());
    }

    #[test]
    fn author_name_rejects_empty_and_whitespace() {
        for name in ["", "   ", "\t\n"] {
            let err = author_name(name).unwrap_err();
            assert_eq!(err.kind, ValidationKind::EmptyName);
        }
    }

    #[test]
    fn phone_number_accepts_ten_digits() {
        assert!(phone_number(Some("5551234567")).is_ok());
    }

    #[test]
    fn phone_number_accepts_absent() {
        assert!(phone_number(None).is_ok());
    }

    #[test]
    fn phone_number_rejects_wrong_length() {
        for phone in ["123", "555123456", "55512345678"] {
            let err = phone_number(Some(phone)).unwrap_err();
            assert_eq!(err.kind, ValidationKind::InvalidPhoneFormat);
        }
    }

    #[test]
    fn phone_number_rejects_non_digits() {
        for phone in ["555-123-45", "555123456x", "５５５１２３４５６７"] {
            let err = phone_number(Some(phone)).unwrap_err();
            assert_eq!(err.kind, ValidationKind::InvalidPhoneFormat);
        }
    }

    #[test]
    fn post_title_accepts_each_marker_phrase() {
        for title in [
            "You Won't Believe This",
            "The Secret Garden",
            "Top 10 Lists",
            "Guess Who's Back",
        ] {
            assert!(post_title(title).is_ok(), "rejected: {title}");
        }
    }

    #[test]
    fn post_title_match_is_substring_not_whole_word() {
        // "Tops" contains "Top".
        assert!(post_title("Spinning Tops Through History").is_ok());
    }

    #[test]
    fn post_title_match_is_case_sensitive() {
        let err = post_title("top secrets of the trade").unwrap_err();
        assert_eq!(err.kind, ValidationKind::MissingRequiredPhrase);
    }

    #[test]
    fn post_title_rejects_ordinary_titles() {
        let err = post_title("An Ordinary Day").unwrap_err();
        assert_eq!(err.kind, ValidationKind::MissingRequiredPhrase);
        assert_eq!(
            err.to_string(),
            "Title must contain one of: 'Won't Believe', 'Secret', 'Top', 'Guess'"
        );
    }

    #[test]
    fn post_content_boundary() {
        assert!(post_content(&"a".repeat(250)).is_ok());
        let err = post_content(&"a".repeat(249)).unwrap_err();
        assert_eq!(err.kind, ValidationKind::ContentTooShort);
    }

    #[test]
    fn post_content_counts_characters_not_bytes() {
        // 250 multibyte characters is valid even though it is 500 bytes.
        assert!(post_content(&"é".repeat(250)).is_ok());
    }

    #[test]
    fn post_summary_boundary() {
        assert!(post_summary(Some(&"s".repeat(250))).is_ok());
        assert!(post_summary(None).is_ok());
        let err = post_summary(Some(&"s".repeat(251))).unwrap_err();
        assert_eq!(err.kind, ValidationKind::SummaryTooLong);
    }

    #[test]
    fn category_accepts_both_values() {
        assert_eq!(category(Some("Fiction")).unwrap(), Category::Fiction);
        assert_eq!(category(Some("Non-Fiction")).unwrap(), Category::NonFiction);
    }

    #[test]
    fn category_rejects_unknown_and_absent() {
        for value in [Some("fiction"), Some("NON-FICTION"), Some("Poetry"), None] {
            let err = category(value).unwrap_err();
            assert_eq!(err.kind, ValidationKind::InvalidCategory);
        }
    }
}
