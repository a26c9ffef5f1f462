//! # Commands
//!
//! Command surface for the presentation layer.

mod list;

pub use list::{
    add_item, begin_edit, cancel_edit, commit_edit, export_list, get_list, remove_item, set_draft,
    toggle_marked, ExportPayload, ListResponse, ListTotals,
};
