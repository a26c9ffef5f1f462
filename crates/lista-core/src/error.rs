//! # Error Types
//!
//! Domain-specific error types for lista-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lista-core errors (this file)                                         │
//! │  ├── ValidationError  - Draft input failures (field-specific)          │
//! │  ├── ListError        - Store operation failures                       │
//! │  └── ExportError      - CSV writer failures (theoretical only)         │
//! │                                                                         │
//! │  lista-widget errors (separate crate)                                  │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → ListError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each error variant maps to a user-facing message
//! 4. No error is fatal: the caller recovers and the user retries

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Draft input validation errors.
///
/// Each variant names the field at fault so the UI can render the message
/// inline next to the right input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Description trims to the empty string.
    #[error("description must not be empty")]
    EmptyDescription,

    /// Quantity text is missing, not digits-only, or below one.
    ///
    /// Covers `""`, `"0"`, `"-1"`, `"abc"`, `"1.5"` — everything that is
    /// not a positive whole number.
    #[error("quantity must be a positive whole number")]
    InvalidQuantity,

    /// Quantity exceeds [`crate::MAX_QUANTITY`].
    ///
    /// A bound keeps every line total comfortably inside i64; unbounded
    /// digits-only text would let `price × quantity` overflow.
    #[error("quantity must be at most {max}")]
    QuantityTooLarge { max: i64 },

    /// Unit price is negative. Zero is allowed (free items); absent means
    /// "price unknown".
    #[error("price must not be negative")]
    NegativePrice,
}

// =============================================================================
// List Error
// =============================================================================

/// List store operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// Draft validation failed; the draft is left untouched so the user
    /// can correct the input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An index-addressed operation received a stale index.
    ///
    /// This is a programmer error: the UI should never offer an action on
    /// an item that no longer exists. The contract still guards it — the
    /// one operation aborts and the collection is untouched.
    #[error("index {index} out of range (list has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// `add` or `begin_edit` was called while an edit is in progress.
    /// Only one edit may be active at a time.
    #[error("an edit is already in progress")]
    EditInProgress,

    /// `commit_edit` was called with no edit in progress.
    #[error("no edit in progress")]
    NoEditInProgress,
}

// =============================================================================
// Export Error
// =============================================================================

/// Export serialization errors.
///
/// Exists only because the `csv` writer API is fallible; writing to an
/// in-memory buffer cannot actually fail for a well-formed item list.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer buffer could not be recovered.
    #[error("csv buffer error: {0}")]
    Buffer(String),
}

/// Convenience type alias for Results with ListError.
pub type ListResult<T> = Result<T, ListError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::EmptyDescription.to_string(),
            "description must not be empty"
        );
        assert_eq!(
            ValidationError::InvalidQuantity.to_string(),
            "quantity must be a positive whole number"
        );
        assert_eq!(
            ValidationError::QuantityTooLarge { max: 999 }.to_string(),
            "quantity must be at most 999"
        );
        assert_eq!(
            ValidationError::NegativePrice.to_string(),
            "price must not be negative"
        );
    }

    #[test]
    fn test_index_error_message() {
        let err = ListError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range (list has 3 items)");
    }

    #[test]
    fn test_validation_converts_to_list_error() {
        let err: ListError = ValidationError::EmptyDescription.into();
        assert_eq!(err, ListError::Validation(ValidationError::EmptyDescription));
        // Transparent: the inner message shows through.
        assert_eq!(err.to_string(), "description must not be empty");
    }
}
