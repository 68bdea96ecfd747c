//! Product records - the rows of the catalog.
//!
//! A `ProductDraft` is what a validated form produces; the catalog turns it
//! into a `Product` by assigning a `ProductId`. Money is held as `Decimal` so
//! that sums over the catalog stay exact.

use rust_decimal::Decimal;
use std::fmt;

/// Opaque, catalog-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u64);

impl ProductId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Product fields without an identifier, as captured by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    /// Product name, trimmed and non-empty
    pub name: String,
    /// Cost to acquire one unit
    pub cost: Decimal,
    /// Sale price of one unit
    pub price: Decimal,
    /// Units sold or units in stock, depending on the configured mode
    pub quantity: u32,
}

/// A product stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier, preserved across updates
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// Cost to acquire one unit
    pub cost: Decimal,
    /// Sale price of one unit
    pub price: Decimal,
    /// Units sold or units in stock
    pub quantity: u32,
}

impl Product {
    /// Builds a product from a draft and an already-assigned identifier.
    #[must_use]
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            cost: draft.cost,
            price: draft.price,
            quantity: draft.quantity,
        }
    }

    /// Overwrites every field except the identifier.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.cost = draft.cost;
        self.price = draft.price;
        self.quantity = draft.quantity;
    }

    /// Returns the product's fields as a draft, dropping the identifier.
    #[must_use]
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            cost: self.cost,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_preserves_id() {
        let mut product = Product::from_draft(
            ProductId::new(7),
            ProductDraft {
                name: "Widget".to_string(),
                cost: Decimal::from(10),
                price: Decimal::from(15),
                quantity: 3,
            },
        );

        product.apply(ProductDraft {
            name: "Gadget".to_string(),
            cost: Decimal::from(1),
            price: Decimal::from(2),
            quantity: 9,
        });

        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.name, "Gadget");
        assert_eq!(product.quantity, 9);
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(42).to_string(), "#42");
    }
}
