//! # Validation Module
//!
//! Draft input validation for Lista.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, digits-only input mask)               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Canonical rules: trimmed description, positive whole quantity     │
//! │  └── The store refuses to construct an Item that fails these           │
//! │                                                                         │
//! │  The frontend layer is cosmetic; this layer is the contract.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item description.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Returns
/// The trimmed description.
///
/// ## Example
/// ```rust
/// use lista_core::validation::validate_description;
///
/// assert_eq!(validate_description("  Milk ").unwrap(), "Milk");
/// assert!(validate_description("   ").is_err());
/// ```
pub fn validate_description(description: &str) -> ValidationResult<String> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    Ok(description.to_string())
}

/// Validates quantity text and converts it to a number.
///
/// The form binds quantity as text, so validation happens on the raw
/// string: it must be digits-only (no sign, no decimal point), parse to a
/// value of at least one, and stay within [`MAX_QUANTITY`].
///
/// ## Example
/// ```rust
/// use lista_core::validation::validate_quantity;
///
/// assert_eq!(validate_quantity("3").unwrap(), 3);
/// assert!(validate_quantity("").is_err());
/// assert!(validate_quantity("0").is_err());
/// assert!(validate_quantity("-1").is_err());
/// assert!(validate_quantity("abc").is_err());
/// assert!(validate_quantity("1000").is_err());
/// ```
pub fn validate_quantity(quantity: &str) -> ValidationResult<i64> {
    let quantity = quantity.trim();

    if quantity.is_empty() || !quantity.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidQuantity);
    }

    // Digits-only text can still overflow i64.
    let quantity: i64 = quantity
        .parse()
        .map_err(|_| ValidationError::QuantityTooLarge { max: MAX_QUANTITY })?;

    if quantity < 1 {
        return Err(ValidationError::InvalidQuantity);
    }

    if quantity > MAX_QUANTITY {
        return Err(ValidationError::QuantityTooLarge { max: MAX_QUANTITY });
    }

    Ok(quantity)
}

/// Validates an optional unit price.
///
/// ## Rules
/// - Absent is fine ("price unknown")
/// - Zero is allowed (free items)
/// - Negative prices are rejected
///
/// ## Example
/// ```rust
/// use lista_core::money::Money;
/// use lista_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(None).is_ok());
/// assert!(validate_unit_price(Some(Money::from_cents(0))).is_ok());
/// assert!(validate_unit_price(Some(Money::from_cents(-100))).is_err());
/// ```
pub fn validate_unit_price(price: Option<Money>) -> ValidationResult<Option<Money>> {
    if let Some(price) = price {
        if price.cents() < 0 {
            return Err(ValidationError::NegativePrice);
        }
    }

    Ok(price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_description() {
        assert_eq!(validate_description("Milk").unwrap(), "Milk");
        assert_eq!(validate_description("  Whole Milk  ").unwrap(), "Whole Milk");

        assert_eq!(
            validate_description(""),
            Err(ValidationError::EmptyDescription)
        );
        assert_eq!(
            validate_description("   "),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_validate_quantity_accepts_positive_integers() {
        assert_eq!(validate_quantity("1").unwrap(), 1);
        assert_eq!(validate_quantity("3").unwrap(), 3);
        assert_eq!(validate_quantity(" 12 ").unwrap(), 12);
        assert_eq!(validate_quantity("999").unwrap(), 999);
    }

    #[test]
    fn test_validate_quantity_rejects_above_max() {
        assert_eq!(
            validate_quantity("1000"),
            Err(ValidationError::QuantityTooLarge { max: MAX_QUANTITY })
        );
    }

    #[test]
    fn test_validate_quantity_rejects_bad_input() {
        // "00" parses to 0, which is below one.
        for bad in ["", "0", "-1", "abc", "1.5", "+2", "2x", "00"] {
            assert_eq!(
                validate_quantity(bad),
                Err(ValidationError::InvalidQuantity),
                "input: {bad:?}"
            );
        }
    }

    #[test]
    fn test_validate_quantity_rejects_overflow() {
        // Too long for i64 entirely; still reported as over the bound.
        assert_eq!(
            validate_quantity("99999999999999999999"),
            Err(ValidationError::QuantityTooLarge { max: MAX_QUANTITY })
        );
    }

    #[test]
    fn test_validate_unit_price() {
        assert_eq!(validate_unit_price(None), Ok(None));
        assert_eq!(
            validate_unit_price(Some(Money::zero())),
            Ok(Some(Money::zero()))
        );
        assert_eq!(
            validate_unit_price(Some(Money::from_cents(1099))),
            Ok(Some(Money::from_cents(1099)))
        );
        assert_eq!(
            validate_unit_price(Some(Money::from_cents(-500))),
            Err(ValidationError::NegativePrice)
        );
    }
}
