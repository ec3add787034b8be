//! Error types for the shopping list store.

use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A text field the user types into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    Quantity,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftField::Name => write!(f, "name"),
            DraftField::Quantity => write!(f, "quantity"),
        }
    }
}

/// Main error type for list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("Input for {field} rejected: must be shorter than {limit} characters")]
    ValidationRejected { field: DraftField, limit: usize },

    #[error("Draft {0} is blank")]
    BlankField(DraftField),

    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),

    #[error("No item is being edited")]
    NoActiveEdit,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ListError {
    /// Whether the failure is swallowed by the store instead of being
    /// returned to the caller.
    ///
    /// Silent failures leave the snapshot untouched and are reported only as
    /// an ignored outcome.
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            ListError::ValidationRejected { .. }
                | ListError::BlankField(_)
                | ListError::NotFound(_)
                | ListError::NoActiveEdit
        )
    }
}

impl From<serde_json::Error> for ListError {
    fn from(e: serde_json::Error) -> Self {
        ListError::Serialization(e.to_string())
    }
}

/// Result type for list operations.
pub type Result<T> = std::result::Result<T, ListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_classification() {
        assert!(ListError::BlankField(DraftField::Name).is_silent());
        assert!(ListError::NotFound(ItemId(4)).is_silent());
        assert!(ListError::NoActiveEdit.is_silent());
        assert!(ListError::ValidationRejected {
            field: DraftField::Quantity,
            limit: 10
        }
        .is_silent());

        assert!(!ListError::InvalidQuantity("abc".into()).is_silent());
        assert!(!ListError::Serialization("eof".into()).is_silent());
    }

    #[test]
    fn test_display() {
        let err = ListError::InvalidQuantity("abc".into());
        assert_eq!(err.to_string(), "Invalid quantity: \"abc\"");

        let err = ListError::NotFound(ItemId(7));
        assert_eq!(err.to_string(), "Item not found: 7");
    }
}
