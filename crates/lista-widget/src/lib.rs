//! # lista-widget: List State + Command Surface
//!
//! The stateful layer of Lista. Owns the single [`state::ListStore`]
//! instance and exposes the [`commands`] the presentation layer wires to
//! its forms, buttons and export modal.
//!
//! Control flow is entirely synchronous and single-threaded: one user
//! event, one command, one recomputed snapshot.
//!
//! ## Usage
//! ```rust
//! use lista_widget::commands;
//! use lista_widget::state::{Draft, StoreState};
//!
//! let state = StoreState::new();
//!
//! let draft = Draft {
//!     description: "Milk".to_string(),
//!     quantity: "2".to_string(),
//!     ..Draft::default()
//! };
//! let response = commands::add_item(&state, draft).unwrap();
//! assert_eq!(response.items.len(), 1);
//! ```

pub mod commands;
pub mod error;
pub mod state;

pub use error::{ApiError, ErrorCode};
pub use state::{Draft, ListStore, StoreState};
