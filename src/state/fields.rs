//! Validation of typed text.

use crate::error::{DraftField, ListError, Result};

/// Length gate for text input.
///
/// Input is taken only while it stays shorter than `limit` characters;
/// otherwise the previous value is kept.
pub fn accept_field(text: &str, field: DraftField, limit: usize) -> Result<()> {
    if text.chars().count() < limit {
        Ok(())
    } else {
        Err(ListError::ValidationRejected { field, limit })
    }
}

/// Empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Parse quantity text into a positive count.
///
/// No trimming: `" 3"` is rejected just like `"abc"`.
pub fn parse_quantity(text: &str) -> Result<u32> {
    match text.parse::<u32>() {
        Ok(0) | Err(_) => Err(ListError::InvalidQuantity(text.to_string())),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_field_limit() {
        assert!(accept_field("123456789", DraftField::Name, 10).is_ok());
        assert_eq!(
            accept_field("1234567890", DraftField::Name, 10),
            Err(ListError::ValidationRejected {
                field: DraftField::Name,
                limit: 10
            })
        );
        assert!(accept_field("", DraftField::Quantity, 10).is_ok());
    }

    #[test]
    fn test_accept_field_counts_chars_not_bytes() {
        // 9 chars, 18 bytes
        assert!(accept_field("äääääääää", DraftField::Name, 10).is_ok());
        assert!(accept_field("ääääääääää", DraftField::Name, 10).is_err());
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12"), Ok(12));
        assert_eq!(parse_quantity("+3"), Ok(3));

        for bad in ["abc", "", " 3", "3 ", "-1", "0", "1.5", "99999999999"] {
            assert_eq!(
                parse_quantity(bad),
                Err(ListError::InvalidQuantity(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }
}
