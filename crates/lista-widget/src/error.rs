//! # API Error Type
//!
//! Unified error type for the command surface.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Lista                                │
//! │                                                                         │
//! │  Frontend                     Rust Backend                              │
//! │  ────────                     ────────────                              │
//! │                                                                         │
//! │  addItem(draft)                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<ListResponse, ApiError>                                  │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ── ValidationError::EmptyDescription ──┐     │  │
//! │  │         │                                                 ▼     │  │
//! │  │  Stale index? ─────── ListError::IndexOutOfRange ────── ApiError│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) { /* e.code = "VALIDATION_ERROR", e.message = "…" */ }      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation errors carry a field-specific message the UI shows inline;
//! index and edit-state errors mean the UI let a stale control fire, and
//! render as a generic notice while the one operation is dropped.

use serde::Serialize;

use lista_core::{ExportError, ListError};

/// API error returned from widget commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "quantity must be a positive whole number"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Draft input failed validation; message names the field at fault
    ValidationError,

    /// An index-addressed action referenced an item that no longer exists
    IndexOutOfRange,

    /// The edit state machine refused the operation
    EditState,

    /// Export serialization failed
    ExportFailed,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts store errors to API errors.
impl From<ListError> for ApiError {
    fn from(err: ListError) -> Self {
        match err {
            ListError::Validation(e) => ApiError::validation(e.to_string()),
            ListError::IndexOutOfRange { .. } => {
                ApiError::new(ErrorCode::IndexOutOfRange, err.to_string())
            }
            ListError::EditInProgress | ListError::NoEditInProgress => {
                ApiError::new(ErrorCode::EditState, err.to_string())
            }
        }
    }
}

/// Converts export errors to API errors.
impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        // Cannot trigger with an in-memory buffer; logged in case it ever does.
        tracing::error!("export failed: {}", err);
        ApiError::new(ErrorCode::ExportFailed, "Export failed")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
