//! # List State
//!
//! Manages the shopping-list state: the ordered item collection, the draft
//! the add/edit form binds to, and the edit-in-progress marker.
//!
//! ## Edit Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Edit State Machine                                  │
//! │                                                                         │
//! │            begin_edit(i)                                                │
//! │   ┌──────┐ ─────────────► ┌─────────┐                                   │
//! │   │ Idle │                │ Editing │ ──┐ commit_edit (validation      │
//! │   └──────┘ ◄───────────── └─────────┘ ◄─┘ failure stays Editing)       │
//! │      ▲      commit_edit ok                                              │
//! │      │      cancel_edit                                                 │
//! │      │                                                                  │
//! │   add / begin_edit are only legal in Idle; the store returns a guard   │
//! │   error instead of trusting the UI to have disabled the buttons.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Index Addressing
//! Items are addressed positionally (toggle/remove/edit by index). The
//! whole widget is single-threaded and every operation runs synchronously
//! to completion, so an index is valid exactly for the duration of the
//! handler that received it. Stale indices surface as
//! `ListError::IndexOutOfRange`, never as corruption. The one index the
//! store holds across handlers — the edit target — is maintained by
//! `remove` itself: it shifts when an earlier item is removed and the
//! edit is cancelled when its item is removed.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use lista_core::error::{ListError, ListResult};
use lista_core::validation::{validate_description, validate_quantity, validate_unit_price};
use lista_core::{Category, Item, Money, Unit};

// =============================================================================
// Draft
// =============================================================================

/// The transient form state for composing or editing one item.
///
/// One cohesive record, replaced or mutated as a whole through
/// [`ListStore::update_draft`]. Keeping the fields together (instead of one
/// mutable cell per input) means a half-updated form can never leak into an
/// item: items are only built from a draft that passed validation.
///
/// Quantity is carried as the raw text the user typed; it is validated as
/// digits-only and converted on `add`/`commit_edit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub description: String,
    pub category: Category,
    pub unit_price: Option<Money>,
    pub quantity: String,
    pub unit: Unit,
}

impl Default for Draft {
    fn default() -> Self {
        Draft {
            description: String::new(),
            category: Category::default(),
            unit_price: None,
            quantity: "1".to_string(),
            unit: Unit::default(),
        }
    }
}

impl Draft {
    /// Builds a draft pre-filled from an existing item, for editing.
    fn from_item(item: &Item) -> Self {
        Draft {
            description: item.description.clone(),
            category: item.category,
            unit_price: item.unit_price,
            quantity: item.quantity.to_string(),
            unit: item.unit,
        }
    }

    /// Validates the draft and builds the item it describes.
    ///
    /// Does not consume or modify the draft: on failure the form keeps its
    /// values so the user can correct the one bad field.
    fn build_item(&self, marked: bool, edited: bool) -> ListResult<Item> {
        let description = validate_description(&self.description)?;
        let quantity = validate_quantity(&self.quantity)?;
        let unit_price = validate_unit_price(self.unit_price)?;

        Ok(Item {
            description,
            category: self.category,
            unit_price,
            quantity,
            unit: self.unit,
            marked,
            edited,
        })
    }
}

// =============================================================================
// ListStore
// =============================================================================

/// The shopping list: sole source of truth for the item collection.
///
/// ## Invariants
/// - Every stored item passed validation (trimmed non-empty description,
///   quantity between 1 and `MAX_QUANTITY`, no negative price)
/// - `editing`, when set, indexes the item the edit started on; `remove`
///   shifts or clears it to keep that true
/// - Failed operations leave both the collection and the draft untouched
#[derive(Debug, Clone, Default)]
pub struct ListStore {
    items: Vec<Item>,
    draft: Draft,
    editing: Option<usize>,
}

impl ListStore {
    /// Creates a new empty store with a default draft.
    pub fn new() -> Self {
        ListStore::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The ordered item collection.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The current draft bound to the add/edit form.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Index of the item being edited, if an edit is in progress.
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// Whether an edit is in progress.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // -------------------------------------------------------------------------
    // Draft updates
    // -------------------------------------------------------------------------

    /// Mutates the draft through a single update function.
    ///
    /// This is the only way the form writes into the store, so every field
    /// change goes through one place.
    pub fn update_draft<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Draft),
    {
        f(&mut self.draft);
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Validates the draft and appends it to the list as a new item.
    ///
    /// New items start unmarked and unedited. On success the draft resets
    /// to defaults; on failure it is untouched.
    pub fn add(&mut self) -> ListResult<()> {
        if self.editing.is_some() {
            return Err(ListError::EditInProgress);
        }

        let item = self.draft.build_item(false, false)?;
        self.items.push(item);
        self.draft = Draft::default();
        Ok(())
    }

    /// Starts editing the item at `index`: copies its fields into the
    /// draft and records the edit target.
    pub fn begin_edit(&mut self, index: usize) -> ListResult<()> {
        if self.editing.is_some() {
            return Err(ListError::EditInProgress);
        }

        let item = self.items.get(index).ok_or(ListError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })?;

        self.draft = Draft::from_item(item);
        self.editing = Some(index);
        Ok(())
    }

    /// Validates the draft and replaces the item under edit with it.
    ///
    /// The replaced item keeps its `marked` flag and gains `edited = true`.
    /// On success the edit state clears and the draft resets; validation
    /// failure keeps the edit in progress with the draft untouched.
    pub fn commit_edit(&mut self) -> ListResult<()> {
        let index = self.editing.ok_or(ListError::NoEditInProgress)?;

        let marked = self
            .items
            .get(index)
            .map(|item| item.marked)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })?;

        let item = self.draft.build_item(marked, true)?;
        self.items[index] = item;
        self.editing = None;
        self.draft = Draft::default();
        Ok(())
    }

    /// Abandons the edit in progress: clears the edit state and resets the
    /// draft without touching the collection. Idempotent.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft = Draft::default();
    }

    /// Flips the `marked` flag of the item at `index`.
    pub fn toggle_marked(&mut self, index: usize) -> ListResult<()> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;

        item.marked = !item.marked;
        Ok(())
    }

    /// Removes the item at `index`; items after it shift down by one.
    ///
    /// An edit in progress follows its item: removing an item before the
    /// edit target shifts the recorded index, removing the target itself
    /// cancels the edit.
    pub fn remove(&mut self, index: usize) -> ListResult<()> {
        if index >= self.items.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        self.items.remove(index);

        match self.editing {
            Some(editing) if editing == index => self.cancel_edit(),
            Some(editing) if editing > index => self.editing = Some(editing - 1),
            _ => {}
        }

        Ok(())
    }

    // -------------------------------------------------------------------------
    // Totals
    // -------------------------------------------------------------------------

    /// Sum of `(unit_price or zero) × quantity` over all items.
    pub fn total_all(&self) -> Money {
        self.items
            .iter()
            .map(Item::line_total)
            .fold(Money::zero(), |acc, total| acc + total)
    }

    /// The same sum restricted to marked items.
    pub fn total_marked(&self) -> Money {
        self.items
            .iter()
            .filter(|item| item.marked)
            .map(Item::line_total)
            .fold(Money::zero(), |acc, total| acc + total)
    }

    /// `total_all - total_marked`, exactly.
    pub fn total_remaining(&self) -> Money {
        self.total_all() - self.total_marked()
    }
}

// =============================================================================
// StoreState
// =============================================================================

/// Shared handle to the single ListStore instance.
///
/// The widget is single-threaded by design: every operation runs
/// synchronously to completion in response to one user event. The mutex
/// only makes the handle freely cloneable into whatever UI runtime hosts
/// the frontend; it is never contended.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    store: Arc<Mutex<ListStore>>,
}

impl StoreState {
    /// Creates a new empty store state.
    pub fn new() -> Self {
        StoreState {
            store: Arc::new(Mutex::new(ListStore::new())),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = state.with_store(|store| ListTotals::from(store));
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ListStore) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_store_mut(|store| store.toggle_marked(0))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ListStore) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
