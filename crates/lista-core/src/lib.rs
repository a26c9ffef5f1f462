//! # lista-core: Pure Business Logic for Lista
//!
//! This crate is the **heart** of Lista, a single-page shopping-list
//! editor. It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lista Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (forms / buttons / modal)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  lista-widget (list state)                      │   │
//! │  │    add_item, begin_edit, toggle_marked, export_list, …          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lista-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  export   │  │ validation│  │   │
//! │  │   │   Item    │  │   Money   │  │  to_text  │  │   rules   │  │   │
//! │  │   │ Category  │  │  (cents)  │  │  to_csv   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Category, Unit)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Draft input validation
//! - [`export`] - Text and CSV serializers
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64) so totals
//!    never drift, no matter how often items are toggled
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lista_core::Money` instead of
// `use lista_core::money::Money`

pub use error::{ExportError, ListError, ListResult, ValidationError};
pub use export::{to_csv, to_text, ExportFormat};
pub use money::Money;
pub use types::{Category, Item, Unit};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10) and
/// keeps every `price × quantity` line total comfortably inside i64.
pub const MAX_QUANTITY: i64 = 999;
