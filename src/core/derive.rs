//! Derivation engine - profit figures computed from the catalog.
//!
//! Everything here is a pure function of its input. Nothing is cached; callers
//! recompute over the current catalog whenever they display it.
//!
//! The session only commits products for which `checked_summary` succeeds, so
//! the saturating arithmetic below never actually clamps a displayed figure.

use super::{catalog::Catalog, product::Product};
use rust_decimal::Decimal;

/// Profit on a single unit: `price - cost`. May be negative.
#[must_use]
pub fn unit_profit(product: &Product) -> Decimal {
    product.price - product.cost
}

/// Profit over the whole quantity: `unit_profit * quantity`.
#[must_use]
pub fn total_profit(product: &Product) -> Decimal {
    unit_profit(product).saturating_mul(Decimal::from(product.quantity))
}

/// Sum of `cost * quantity` over the catalog.
#[must_use]
pub fn aggregate_investment(catalog: &Catalog) -> Decimal {
    catalog
        .iter()
        .map(|p| p.cost.saturating_mul(Decimal::from(p.quantity)))
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Sum of `price * quantity` over the catalog.
#[must_use]
pub fn aggregate_revenue(catalog: &Catalog) -> Decimal {
    catalog
        .iter()
        .map(|p| p.price.saturating_mul(Decimal::from(p.quantity)))
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `aggregate_revenue - aggregate_investment`.
#[must_use]
pub fn aggregate_profit(catalog: &Catalog) -> Decimal {
    aggregate_revenue(catalog).saturating_sub(aggregate_investment(catalog))
}

/// Computes the summary with checked arithmetic.
///
/// Returns `None` if any `amount * quantity` or any running total falls
/// outside `Decimal`'s range.
#[must_use]
pub fn checked_summary<'a>(products: impl IntoIterator<Item = &'a Product>) -> Option<Summary> {
    let mut investment = Decimal::ZERO;
    let mut revenue = Decimal::ZERO;
    for product in products {
        let units = Decimal::from(product.quantity);
        investment = investment.checked_add(product.cost.checked_mul(units)?)?;
        revenue = revenue.checked_add(product.price.checked_mul(units)?)?;
    }
    Some(Summary {
        investment,
        revenue,
        profit: revenue.checked_sub(investment)?,
    })
}

/// The three aggregate figures shown above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Total spent acquiring the recorded quantities
    pub investment: Decimal,
    /// Total earned (or expected) from the recorded quantities
    pub revenue: Decimal,
    /// Revenue minus investment
    pub profit: Decimal,
}

impl Summary {
    /// Computes the summary for the current catalog.
    #[must_use]
    pub fn of(catalog: &Catalog) -> Self {
        let investment = aggregate_investment(catalog);
        let revenue = aggregate_revenue(catalog);
        Self {
            investment,
            revenue,
            profit: revenue.saturating_sub(investment),
        }
    }
}

/// A product together with its derived columns, as displayed and exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow<'a> {
    /// The underlying record
    pub product: &'a Product,
    /// `price - cost`
    pub unit_profit: Decimal,
    /// `unit_profit * quantity`
    pub total_profit: Decimal,
}

impl<'a> ProductRow<'a> {
    /// Derives the display row for one product.
    #[must_use]
    pub fn of(product: &'a Product) -> Self {
        Self {
            product,
            unit_profit: unit_profit(product),
            total_profit: total_profit(product),
        }
    }
}

/// Derives display rows for the whole catalog in insertion order.
#[must_use]
pub fn rows(catalog: &Catalog) -> Vec<ProductRow<'_>> {
    catalog.iter().map(ProductRow::of).collect()
}
