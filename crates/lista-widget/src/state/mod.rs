//! # Widget State
//!
//! State owned by the widget: the single list store and its shared handle.

mod list;

pub use list::{Draft, ListStore, StoreState};
