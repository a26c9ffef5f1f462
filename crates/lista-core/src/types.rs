//! # Domain Types
//!
//! Core domain types used throughout Lista.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    Category     │   │      Unit       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  description    │   │  General        │   │  Unit, Kg, G    │       │
//! │  │  category       │   │  Meat, Produce  │   │  Piece, Box     │       │
//! │  │  unit_price?    │   │  Dairy, Fruit…  │   │  Liter, Ml…     │       │
//! │  │  quantity       │   │  (closed enum)  │   │  (closed enum)  │       │
//! │  │  unit           │   └─────────────────┘   └─────────────────┘       │
//! │  │  marked/edited  │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Category and Unit are closed enumerations rather than open lists of
//! records: the compiler checks that every metadata lookup handles every
//! variant, and the frontend option tables are generated from `ALL`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Item category for grouping and display chrome.
///
/// Each category carries display metadata (label, icon, color) resolved
/// through exhaustive lookups so adding a variant forces every table to be
/// updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Meat,
    Produce,
    Dairy,
    Fruit,
    Beverages,
    Bakery,
    Frozen,
    Grocery,
    Pet,
    Tools,
    Kitchen,
    Appliances,
}

impl Category {
    /// Every category, in the order the UI shows them.
    pub const ALL: [Category; 13] = [
        Category::General,
        Category::Meat,
        Category::Produce,
        Category::Dairy,
        Category::Fruit,
        Category::Beverages,
        Category::Bakery,
        Category::Frozen,
        Category::Grocery,
        Category::Pet,
        Category::Tools,
        Category::Kitchen,
        Category::Appliances,
    ];

    /// Display text shown in the category picker and exports.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Meat => "Meat",
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Fruit => "Fruit",
            Category::Beverages => "Beverages",
            Category::Bakery => "Bakery",
            Category::Frozen => "Frozen",
            Category::Grocery => "Grocery",
            Category::Pet => "Pet",
            Category::Tools => "Tools",
            Category::Kitchen => "Kitchen",
            Category::Appliances => "Appliances",
        }
    }

    /// Icon name for the UI chrome.
    pub const fn icon(&self) -> &'static str {
        match self {
            Category::General => "shopping basket",
            Category::Meat => "food",
            Category::Produce => "leaf",
            Category::Dairy => "coffee",
            Category::Fruit => "lemon",
            Category::Beverages => "glass martini",
            Category::Bakery => "birthday cake",
            Category::Frozen => "snowflake",
            Category::Grocery => "shopping cart",
            Category::Pet => "paw",
            Category::Tools => "wrench",
            Category::Kitchen => "utensils",
            Category::Appliances => "plug",
        }
    }

    /// Accent color (hex) for the category badge.
    pub const fn color(&self) -> &'static str {
        match self {
            Category::General => "#9e9e9e",
            Category::Meat => "#c62828",
            Category::Produce => "#2e7d32",
            Category::Dairy => "#fbc02d",
            Category::Fruit => "#ef6c00",
            Category::Beverages => "#0277bd",
            Category::Bakery => "#8d6e63",
            Category::Frozen => "#4fc3f7",
            Category::Grocery => "#7b1fa2",
            Category::Pet => "#6d4c41",
            Category::Tools => "#455a64",
            Category::Kitchen => "#00897b",
            Category::Appliances => "#5e35b1",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

// =============================================================================
// Unit
// =============================================================================

/// Measurement unit for an item's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Unit,
    Kg,
    G,
    Piece,
    Box,
    Package,
    Liter,
    Bottle,
    Meter,
    Cm,
    Ml,
    Mm,
}

impl Unit {
    /// Every unit, in the order the UI shows them.
    pub const ALL: [Unit; 12] = [
        Unit::Unit,
        Unit::Kg,
        Unit::G,
        Unit::Piece,
        Unit::Box,
        Unit::Package,
        Unit::Liter,
        Unit::Bottle,
        Unit::Meter,
        Unit::Cm,
        Unit::Ml,
        Unit::Mm,
    ];

    /// Display text shown in the unit picker and exports.
    pub const fn label(&self) -> &'static str {
        match self {
            Unit::Unit => "Unit",
            Unit::Kg => "Kg",
            Unit::G => "g",
            Unit::Piece => "Piece",
            Unit::Box => "Box",
            Unit::Package => "Package",
            Unit::Liter => "Liter",
            Unit::Bottle => "Bottle",
            Unit::Meter => "Meter",
            Unit::Cm => "cm",
            Unit::Ml => "ml",
            Unit::Mm => "mm",
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Unit
    }
}

// =============================================================================
// Item
// =============================================================================

/// One shopping-list entry.
///
/// ## Invariants (enforced by the store at construction time)
/// - `description` is non-empty after trimming
/// - `quantity >= 1`
/// - `unit_price`, when present, is non-negative
///
/// `Item` itself is a plain record; malformed items cannot exist because
/// every constructor path runs through validation first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// What to buy. Trimmed, never empty.
    pub description: String,

    /// Category for grouping and badge chrome.
    pub category: Category,

    /// Price per unit. `None` means "price unknown" and contributes zero
    /// to every total.
    pub unit_price: Option<Money>,

    /// How many units. Always >= 1.
    pub quantity: i64,

    /// Measurement unit for the quantity.
    pub unit: Unit,

    /// User-set "in cart / completed" flag. Drives the marked total.
    pub marked: bool,

    /// True once the item has been saved through an edit. Cosmetic only:
    /// styling reads it, no business rule does.
    pub edited: bool,
}

impl Item {
    /// Line total: `(unit_price or zero) × quantity`.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.unwrap_or_default().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_defaults_to_general() {
        assert_eq!(Category::default(), Category::General);
    }

    #[test]
    fn test_category_metadata_is_total() {
        // Every variant resolves a label, icon and color.
        for category in Category::ALL {
            assert!(!category.label().is_empty());
            assert!(!category.icon().is_empty());
            assert!(category.color().starts_with('#'));
        }
    }

    #[test]
    fn test_unit_defaults_to_unit() {
        assert_eq!(Unit::default(), Unit::Unit);
    }

    #[test]
    fn test_unit_labels_are_total() {
        for unit in Unit::ALL {
            assert!(!unit.label().is_empty());
        }
    }

    #[test]
    fn test_line_total_with_price() {
        let item = Item {
            description: "Milk".to_string(),
            category: Category::Dairy,
            unit_price: Some(Money::from_cents(500)),
            quantity: 2,
            unit: Unit::Liter,
            marked: false,
            edited: false,
        };
        assert_eq!(item.line_total(), Money::from_cents(1000));
    }

    #[test]
    fn test_line_total_without_price_is_zero() {
        let item = Item {
            description: "Bread".to_string(),
            category: Category::Bakery,
            unit_price: None,
            quantity: 3,
            unit: Unit::Unit,
            marked: false,
            edited: false,
        };
        assert!(item.line_total().is_zero());
    }
}
