//! Known-product lookup - read-only suggestions used to prefill the form.
//!
//! Known products come from the local list in config.toml and, optionally,
//! from an external catalog read through SeaORM. Nothing here ever writes to
//! either source.

use crate::{
    config::app::KnownProductConfig,
    entities::{KnownProduct as KnownProductEntity, known_product},
    errors::{Error, Result},
};
use rust_decimal::{Decimal, prelude::FromPrimitive};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::{debug, info};

/// Maximum number of suggestions returned by [`KnownProducts::search`]
pub const MAX_SUGGESTIONS: usize = 25;

/// A product the user can pick to prefill the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownProduct {
    /// Identifier in the source it came from
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unit cost
    pub cost: Decimal,
    /// Unit sale price
    pub price: Decimal,
}

impl TryFrom<known_product::Model> for KnownProduct {
    type Error = Error;

    fn try_from(model: known_product::Model) -> Result<Self> {
        Ok(Self {
            id: model.id,
            name: model.name,
            cost: to_money(model.cost)?,
            price: to_money(model.price)?,
        })
    }
}

/// Converts an `f64` amount from an external source into a two-place decimal.
///
/// # Errors
/// Returns `InvalidAmount` for negative, NaN, or infinite values.
pub fn to_money(amount: f64) -> Result<Decimal> {
    if amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Decimal::from_f64(amount)
        .map(|d| d.round_dp(2))
        .ok_or(Error::InvalidAmount { amount })
}

/// The merged, read-only list of known products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownProducts {
    products: Vec<KnownProduct>,
}

impl KnownProducts {
    /// Builds the list from entries in config.toml. Identifiers are 1-based positions.
    ///
    /// # Errors
    /// Returns `InvalidAmount` if an entry has a negative or non-finite amount.
    pub fn from_config(entries: &[KnownProductConfig]) -> Result<Self> {
        let products = entries
            .iter()
            .zip(1_i64..)
            .map(|(entry, id)| {
                Ok(KnownProduct {
                    id,
                    name: entry.name.trim().to_string(),
                    cost: to_money(entry.cost)?,
                    price: to_money(entry.price)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!("Loaded {} known products from config", products.len());
        Ok(Self { products })
    }

    /// Reads every row of the external known-product catalog, ordered by name.
    ///
    /// # Errors
    /// Returns an error if the query fails or a row carries an invalid amount.
    pub async fn fetch(db: &DatabaseConnection) -> Result<Self> {
        let models = KnownProductEntity::find()
            .order_by_asc(known_product::Column::Name)
            .all(db)
            .await?;

        let products = models
            .into_iter()
            .map(KnownProduct::try_from)
            .collect::<Result<Vec<_>>>()?;
        info!("Fetched {} known products from catalog", products.len());
        Ok(Self { products })
    }

    /// Appends `other`'s entries, skipping names already present (case-insensitive).
    pub fn merge(&mut self, other: Self) {
        for product in other.products {
            if self.find_by_name(&product.name).is_none() {
                self.products.push(product);
            }
        }
    }

    /// Case-insensitive substring search, sorted by name, at most [`MAX_SUGGESTIONS`] results.
    #[must_use]
    pub fn search(&self, partial: &str) -> Vec<&KnownProduct> {
        let partial_lower = partial.trim().to_lowercase();

        let mut matching: Vec<&KnownProduct> = self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&partial_lower))
            .collect();

        matching.sort_by_key(|p| p.name.to_lowercase());
        matching.truncate(MAX_SUGGESTIONS);
        matching
    }

    /// Finds a known product with exactly this name, ignoring case.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&KnownProduct> {
        let wanted = name.trim().to_lowercase();
        self.products
            .iter()
            .find(|p| p.name.to_lowercase() == wanted)
    }

    /// Number of known products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether no known products are available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{dec, insert_known_product, setup_lookup_db};

    fn entry(name: &str, cost: f64) -> KnownProductConfig {
        KnownProductConfig {
            name: name.to_string(),
            cost,
            price: cost * 2.0,
        }
    }

    #[test]
    fn test_from_config() {
        let known = KnownProducts::from_config(&[entry("Widget", 10.0), entry("Gizmo", 2.5)])
            .unwrap();

        assert_eq!(known.len(), 2);
        let gizmo = known.find_by_name("gizmo").unwrap();
        assert_eq!(gizmo.id, 2);
        assert_eq!(gizmo.cost, dec("2.5"));
        assert_eq!(gizmo.price, dec("5"));
    }

    #[test]
    fn test_from_config_rejects_bad_amounts() {
        assert!(matches!(
            KnownProducts::from_config(&[entry("Bad", -1.0)]),
            Err(Error::InvalidAmount { .. })
        ));
        assert!(matches!(
            KnownProducts::from_config(&[entry("Bad", f64::NAN)]),
            Err(Error::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_search_is_case_insensitive_and_sorted() {
        let known = KnownProducts::from_config(&[
            entry("Soda", 1.0),
            entry("Orange soda", 1.0),
            entry("Bread", 1.0),
        ])
        .unwrap();

        let names: Vec<&str> = known.search("SODA").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Orange soda", "Soda"]);
        assert_eq!(known.search("").len(), 3);
        assert!(known.search("milk").is_empty());
    }

    #[test]
    fn test_search_is_capped() {
        let entries: Vec<_> = (0..40).map(|i| entry(&format!("Item {i:02}"), 1.0)).collect();
        let known = KnownProducts::from_config(&entries).unwrap();

        let results = known.search("item");
        assert_eq!(results.len(), MAX_SUGGESTIONS);
        assert_eq!(results[0].name, "Item 00");
    }

    #[test]
    fn test_merge_skips_duplicate_names() {
        let mut known = KnownProducts::from_config(&[entry("Widget", 10.0)]).unwrap();
        let other =
            KnownProducts::from_config(&[entry("widget", 99.0), entry("Gizmo", 2.0)]).unwrap();

        known.merge(other);
        assert_eq!(known.len(), 2);
        assert_eq!(known.find_by_name("WIDGET").unwrap().cost, dec("10"));
    }

    #[tokio::test]
    async fn test_fetch_reads_catalog_ordered_by_name() -> Result<()> {
        let db = setup_lookup_db().await?;
        insert_known_product(&db, "Widget", 10.0, 15.0).await?;
        insert_known_product(&db, "Anvil", 120.5, 200.0).await?;

        let known = KnownProducts::fetch(&db).await?;
        let names: Vec<&str> = known.search("").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Anvil", "Widget"]);
        assert_eq!(known.find_by_name("anvil").unwrap().cost, dec("120.5"));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_empty_catalog() -> Result<()> {
        let db = setup_lookup_db().await?;
        let known = KnownProducts::fetch(&db).await?;
        assert!(known.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_without_table_fails() -> Result<()> {
        let db = sea_orm::Database::connect("sqlite::memory:").await?;
        assert!(matches!(
            KnownProducts::fetch(&db).await,
            Err(Error::Database(_))
        ));
        Ok(())
    }
}
