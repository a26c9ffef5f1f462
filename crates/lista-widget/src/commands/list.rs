//! # List Commands
//!
//! The functions the presentation layer wires to its controls.
//!
//! ## Widget Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Widget Lifecycle                                   │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│  Items   │────►│  Export  │────►│ Download │       │
//! │  │  List    │     │  Listed  │     │  Modal   │     │  .txt/.csv│      │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                                │
//! │                   add_item          begin_edit ─► commit_edit          │
//! │                   toggle_marked                └► cancel_edit          │
//! │                   remove_item                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation returns the full [`ListResponse`] so the frontend
//! re-renders from one snapshot instead of patching local copies.

use serde::{Deserialize, Serialize};
use tracing::debug;

use lista_core::{export, ExportFormat, Item};

use crate::error::ApiError;
use crate::state::{Draft, ListStore, StoreState};

// =============================================================================
// Responses
// =============================================================================

/// Running totals over the item collection, in centavos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTotals {
    pub total_cents: i64,
    pub marked_cents: i64,
    pub remaining_cents: i64,
}

impl From<&ListStore> for ListTotals {
    fn from(store: &ListStore) -> Self {
        ListTotals {
            total_cents: store.total_all().cents(),
            marked_cents: store.total_marked().cents(),
            remaining_cents: store.total_remaining().cents(),
        }
    }
}

/// Full list snapshot: items, draft, edit state and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub items: Vec<Item>,
    pub draft: Draft,
    pub editing: Option<usize>,
    pub totals: ListTotals,
}

impl From<&ListStore> for ListResponse {
    fn from(store: &ListStore) -> Self {
        ListResponse {
            items: store.items().to_vec(),
            draft: store.draft().clone(),
            editing: store.editing(),
            totals: ListTotals::from(store),
        }
    }
}

/// A rendered export ready for download.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    /// Suggested download file name (`lista.txt` / `lista.csv`).
    pub file_name: String,

    /// UTF-8 file contents.
    pub contents: String,
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current list snapshot.
pub fn get_list(state: &StoreState) -> ListResponse {
    debug!("get_list command");
    state.with_store(|store| ListResponse::from(store))
}

/// Replaces the draft with the form's current values.
///
/// Called on every form change so the store-owned draft stays the single
/// source of truth for the add/edit form.
pub fn set_draft(state: &StoreState, draft: Draft) -> ListResponse {
    debug!("set_draft command");
    state.with_store_mut(|store| {
        store.update_draft(|d| *d = draft);
        ListResponse::from(&*store)
    })
}

/// Validates the submitted draft and appends it as a new item.
///
/// ## Behavior
/// - Trims the description; rejects it when empty
/// - Quantity must be digits-only text of value >= 1
/// - On success the draft resets to defaults; on failure it keeps the
///   submitted values so the user corrects just the bad field
pub fn add_item(state: &StoreState, draft: Draft) -> Result<ListResponse, ApiError> {
    debug!(description = %draft.description, quantity = %draft.quantity, "add_item command");

    state.with_store_mut(|store| {
        store.update_draft(|d| *d = draft);
        store.add()?;
        Ok(ListResponse::from(&*store))
    })
}

/// Starts editing the item at `index`.
///
/// The item's fields are copied into the draft; the UI disables its other
/// edit buttons while the returned snapshot has `editing` set.
pub fn begin_edit(state: &StoreState, index: usize) -> Result<ListResponse, ApiError> {
    debug!(index = %index, "begin_edit command");

    state.with_store_mut(|store| {
        store.begin_edit(index)?;
        Ok(ListResponse::from(&*store))
    })
}

/// Saves the edit in progress with the submitted draft values.
///
/// The edited item keeps its `marked` flag. Validation failure leaves the
/// edit active so the user can correct the input.
pub fn commit_edit(state: &StoreState, draft: Draft) -> Result<ListResponse, ApiError> {
    debug!(description = %draft.description, "commit_edit command");

    state.with_store_mut(|store| {
        store.update_draft(|d| *d = draft);
        store.commit_edit()?;
        Ok(ListResponse::from(&*store))
    })
}

/// Abandons the edit in progress.
pub fn cancel_edit(state: &StoreState) -> ListResponse {
    debug!("cancel_edit command");

    state.with_store_mut(|store| {
        store.cancel_edit();
        ListResponse::from(&*store)
    })
}

/// Toggles the "in cart" flag of the item at `index`.
pub fn toggle_marked(state: &StoreState, index: usize) -> Result<ListResponse, ApiError> {
    debug!(index = %index, "toggle_marked command");

    state.with_store_mut(|store| {
        store.toggle_marked(index)?;
        Ok(ListResponse::from(&*store))
    })
}

/// Removes the item at `index`.
pub fn remove_item(state: &StoreState, index: usize) -> Result<ListResponse, ApiError> {
    debug!(index = %index, "remove_item command");

    state.with_store_mut(|store| {
        store.remove(index)?;
        Ok(ListResponse::from(&*store))
    })
}

/// Renders the list in the chosen export format.
///
/// The snapshot is taken under the store lock, so the export always sees a
/// consistent collection regardless of interleaved mutations.
pub fn export_list(state: &StoreState, format: ExportFormat) -> Result<ExportPayload, ApiError> {
    debug!(format = ?format, "export_list command");

    let contents = state.with_store(|store| match format {
        ExportFormat::Text => Ok(export::to_text(store.items())),
        ExportFormat::Csv => export::to_csv(store.items()),
    })?;

    Ok(ExportPayload {
        file_name: format.file_name().to_string(),
        contents,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use lista_core::Money;

    fn draft(description: &str, quantity: &str, price_cents: Option<i64>) -> Draft {
        Draft {
            description: description.to_string(),
            quantity: quantity.to_string(),
            unit_price: price_cents.map(Money::from_cents),
            ..Draft::default()
        }
    }

    #[test]
    fn test_add_item_returns_snapshot_with_totals() {
        let state = StoreState::new();

        let response = add_item(&state, draft("Milk", "2", Some(500))).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.totals.total_cents, 1000);
        assert_eq!(response.totals.marked_cents, 0);
        assert_eq!(response.totals.remaining_cents, 1000);
        assert_eq!(response.editing, None);
    }

    #[test]
    fn test_add_item_validation_error_surfaces() {
        let state = StoreState::new();

        let err = add_item(&state, draft("  ", "1", None)).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(get_list(&state).items.is_empty());
    }

    #[test]
    fn test_add_item_rejects_negative_price() {
        let state = StoreState::new();

        let err = add_item(&state, draft("Milk", "2", Some(-500))).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "price must not be negative");

        let response = get_list(&state);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.total_cents, 0);
    }

    #[test]
    fn test_edit_round_trip() {
        let state = StoreState::new();
        add_item(&state, draft("Milk", "2", Some(500))).unwrap();
        toggle_marked(&state, 0).unwrap();

        let response = begin_edit(&state, 0).unwrap();
        assert_eq!(response.editing, Some(0));
        assert_eq!(response.draft.description, "Milk");

        let response = commit_edit(&state, draft("Whole Milk", "2", Some(500))).unwrap();
        assert_eq!(response.editing, None);
        assert_eq!(response.items[0].description, "Whole Milk");
        assert!(response.items[0].marked);
        assert!(response.items[0].edited);
    }

    #[test]
    fn test_cancel_edit_resets_draft() {
        let state = StoreState::new();
        add_item(&state, draft("Milk", "2", None)).unwrap();
        begin_edit(&state, 0).unwrap();

        let response = cancel_edit(&state);

        assert_eq!(response.editing, None);
        assert_eq!(response.draft, Draft::default());
        assert_eq!(response.items[0].description, "Milk");
    }

    #[test]
    fn test_toggle_and_remove_totals() {
        let state = StoreState::new();
        add_item(&state, draft("Milk", "2", Some(500))).unwrap();
        add_item(&state, draft("Coffee", "1", Some(1599))).unwrap();

        let response = toggle_marked(&state, 1).unwrap();
        assert_eq!(response.totals.marked_cents, 1599);
        assert_eq!(response.totals.remaining_cents, 1000);

        let response = remove_item(&state, 0).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.totals.total_cents, 1599);
    }

    #[test]
    fn test_stale_index_maps_to_api_error() {
        let state = StoreState::new();

        let err = toggle_marked(&state, 3).unwrap_err();

        assert_eq!(err.code, ErrorCode::IndexOutOfRange);
    }

    #[test]
    fn test_export_text_payload() {
        let state = StoreState::new();
        add_item(&state, draft("Milk", "2", Some(500))).unwrap();
        add_item(&state, draft("Bread", "1", None)).unwrap();

        let payload = export_list(&state, ExportFormat::Text).unwrap();

        assert_eq!(payload.file_name, "lista.txt");
        assert_eq!(payload.contents, "1. Milk (2x) - R$ 10,00\n2. Bread (1x) - \n");
    }

    #[test]
    fn test_export_csv_payload() {
        let state = StoreState::new();
        add_item(&state, draft("Milk", "2", Some(500))).unwrap();

        let payload = export_list(&state, ExportFormat::Csv).unwrap();

        assert_eq!(payload.file_name, "lista.csv");
        assert!(payload
            .contents
            .starts_with("Description,Category,Value,Quantity,Unit\n"));
        assert!(payload.contents.contains("Milk,General,5.00,2,Unit"));
    }

    #[test]
    fn test_response_wire_shape() {
        let state = StoreState::new();
        add_item(&state, draft("Milk", "2", Some(500))).unwrap();

        let json = serde_json::to_value(get_list(&state)).unwrap();

        assert_eq!(json["items"][0]["description"], "Milk");
        assert_eq!(json["items"][0]["unitPrice"], 500);
        assert_eq!(json["items"][0]["category"], "general");
        assert_eq!(json["totals"]["totalCents"], 1000);
        assert_eq!(json["draft"]["quantity"], "1");
    }
}
