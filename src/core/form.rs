//! Capture form - raw field text and its validation into a `ProductDraft`.
//!
//! The form keeps exactly what the user typed. Validation happens only on
//! submit: empty fields, unparseable numbers, negative values, and amounts
//! whose total would not fit in a `Decimal` are rejected before anything
//! reaches the catalog.

use super::product::{Product, ProductDraft};
use crate::errors::{Error, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Field names, in form order. Used in error messages and prompts.
pub const FIELD_NAME: &str = "name";
/// Cost field name
pub const FIELD_COST: &str = "cost";
/// Price field name
pub const FIELD_PRICE: &str = "price";
/// Quantity field name
pub const FIELD_QUANTITY: &str = "quantity";

/// Raw text of the four capture fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// Product name as typed
    pub name: String,
    /// Unit cost as typed
    pub cost: String,
    /// Unit sale price as typed
    pub price: String,
    /// Quantity as typed
    pub quantity: String,
}

impl ProductForm {
    /// Creates a form from four raw field values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cost: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cost: cost.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    /// Builds a form pre-populated with an existing product's values.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self::new(
            product.name.clone(),
            product.cost.to_string(),
            product.price.to_string(),
            product.quantity.to_string(),
        )
    }

    /// Fills name and cost from a known product, leaving price and quantity alone.
    pub fn prefill(&mut self, name: &str, cost: Decimal) {
        self.name = name.to_string();
        self.cost = cost.to_string();
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Names of the fields that are empty or whitespace-only, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (FIELD_NAME, &self.name),
            (FIELD_COST, &self.cost),
            (FIELD_PRICE, &self.price),
            (FIELD_QUANTITY, &self.quantity),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Validates the form and converts it into a draft.
    ///
    /// # Errors
    /// - `IncompleteFields` if any field is empty
    /// - `InvalidNumber` if cost, price, or quantity does not parse
    /// - `NegativeValue` if cost, price, or quantity is below zero
    /// - `AmountTooLarge` if cost or price times quantity overflows `Decimal`
    pub fn validate(&self) -> Result<ProductDraft> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(Error::IncompleteFields { missing });
        }

        let draft = ProductDraft {
            name: self.name.trim().to_string(),
            cost: parse_money(FIELD_COST, &self.cost)?,
            price: parse_money(FIELD_PRICE, &self.price)?,
            quantity: parse_quantity(&self.quantity)?,
        };

        // Both are non-negative, so unit and total profit stay in range too
        let units = Decimal::from(draft.quantity);
        for (field, amount) in [(FIELD_COST, draft.cost), (FIELD_PRICE, draft.price)] {
            if amount.checked_mul(units).is_none() {
                return Err(Error::AmountTooLarge { field });
            }
        }
        Ok(draft)
    }
}

/// Parses a non-negative decimal amount. A lone `,` is accepted as the decimal separator.
///
/// # Errors
/// Returns `InvalidNumber` for unparseable text and `NegativeValue` below zero.
pub fn parse_money(field: &'static str, input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    let value = Decimal::from_str(&normalized).map_err(|_| Error::InvalidNumber {
        field,
        input: trimmed.to_string(),
    })?;

    if value < Decimal::ZERO {
        return Err(Error::NegativeValue {
            field,
            value: trimmed.to_string(),
        });
    }
    Ok(value)
}

/// Parses a non-negative whole-number quantity.
///
/// # Errors
/// Returns `InvalidNumber` for non-integers or values out of range and
/// `NegativeValue` below zero.
pub fn parse_quantity(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let invalid = || Error::InvalidNumber {
        field: FIELD_QUANTITY,
        input: trimmed.to_string(),
    };

    let value: i64 = trimmed.parse().map_err(|_| invalid())?;
    if value < 0 {
        return Err(Error::NegativeValue {
            field: FIELD_QUANTITY,
            value: trimmed.to_string(),
        });
    }
    u32::try_from(value).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::dec;

    #[test]
    fn test_validate_complete_form() {
        let draft = ProductForm::new("  Widget ", "10", "15.50", "3")
            .validate()
            .unwrap();

        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.cost, dec("10"));
        assert_eq!(draft.price, dec("15.50"));
        assert_eq!(draft.quantity, 3);
    }

    #[test]
    fn test_empty_quantity_is_incomplete() {
        let result = ProductForm::new("Widget", "10", "15", "").validate();
        match result {
            Err(Error::IncompleteFields { missing }) => assert_eq!(missing, ["quantity"]),
            other => panic!("expected IncompleteFields, got {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_only_fields_are_incomplete() {
        let result = ProductForm::new("   ", "10", " ", "1").validate();
        match result {
            Err(Error::IncompleteFields { missing }) => assert_eq!(missing, ["name", "price"]),
            other => panic!("expected IncompleteFields, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_cost_is_rejected() {
        let result = ProductForm::new("Widget", "ten", "15", "3").validate();
        assert!(matches!(
            result,
            Err(Error::InvalidNumber { field: "cost", .. })
        ));
    }

    #[test]
    fn test_fractional_quantity_is_rejected() {
        assert!(matches!(
            parse_quantity("2.5"),
            Err(Error::InvalidNumber {
                field: "quantity",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_values_are_rejected() {
        assert!(matches!(
            parse_money(FIELD_PRICE, "-1"),
            Err(Error::NegativeValue { field: "price", .. })
        ));
        assert!(matches!(
            parse_quantity("-4"),
            Err(Error::NegativeValue {
                field: "quantity",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_is_allowed() {
        assert_eq!(parse_money(FIELD_COST, "0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_quantity("0").unwrap(), 0);
    }

    #[test]
    fn test_comma_decimal_separator() {
        assert_eq!(parse_money(FIELD_COST, "12,50").unwrap(), dec("12.50"));
        assert!(parse_money(FIELD_COST, "1,234,50").is_err());
    }

    #[test]
    fn test_quantity_out_of_range() {
        assert!(matches!(
            parse_quantity("99999999999"),
            Err(Error::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_amount_times_quantity_overflow_is_rejected() {
        let result = ProductForm::new("Bullion", "100000000000000000000", "1", "1000000000")
            .validate();
        assert!(matches!(
            result,
            Err(Error::AmountTooLarge { field: "cost" })
        ));

        let result = ProductForm::new("Bullion", "1", "100000000000000000000", "1000000000")
            .validate();
        assert!(matches!(
            result,
            Err(Error::AmountTooLarge { field: "price" })
        ));
    }

    #[test]
    fn test_large_amount_within_range_is_accepted() {
        let draft = ProductForm::new("Bullion", "100000000000000000000", "1", "1000")
            .validate()
            .unwrap();
        assert_eq!(draft.quantity, 1000);
    }

    #[test]
    fn test_prefill_keeps_price_and_quantity() {
        let mut form = ProductForm::new("", "", "20", "2");
        form.prefill("Widget", dec("10.00"));

        assert_eq!(form, ProductForm::new("Widget", "10.00", "20", "2"));
    }

    #[test]
    fn test_from_product_round_trips_through_validate() {
        let product = Product::from_draft(
            crate::core::product::ProductId::new(1),
            crate::test_utils::widget(),
        );
        let draft = ProductForm::from_product(&product).validate().unwrap();
        assert_eq!(draft, product.to_draft());
    }
}
