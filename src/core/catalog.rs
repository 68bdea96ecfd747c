//! Catalog store - the in-memory, insertion-ordered list of products.
//!
//! The catalog is the only mutable state in the tracker. It supports adding
//! and updating records; there is no deletion. Identifiers come from a
//! counter owned by the catalog, so they are never reused within a session.

use super::product::{Product, ProductDraft, ProductId};
use tracing::debug;

/// Ordered collection of products with catalog-assigned identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    next_id: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a new product built from `draft` and returns it.
    pub fn add(&mut self, draft: ProductDraft) -> &Product {
        let id = ProductId::new(self.next_id);
        self.next_id += 1;
        debug!("Adding product {} as {}", draft.name, id);
        let index = self.products.len();
        self.products.push(Product::from_draft(id, draft));
        &self.products[index]
    }

    /// Replaces the fields of the product with `id`, keeping its identifier.
    ///
    /// Returns `None` and leaves the catalog untouched if no such product exists.
    pub fn update(&mut self, id: ProductId, draft: ProductDraft) -> Option<&Product> {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            debug!("Update skipped, {} not in catalog", id);
            return None;
        };
        product.apply(draft);
        Some(product)
    }

    /// Looks up a product by identifier.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a product by its 1-based display row.
    #[must_use]
    pub fn at_row(&self, row: usize) -> Option<&Product> {
        row.checked_sub(1).and_then(|index| self.products.get(index))
    }

    /// Finds the most recently added product whose name matches, ignoring case.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        let wanted = name.trim().to_lowercase();
        self.products
            .iter()
            .rev()
            .find(|p| p.name.to_lowercase() == wanted)
    }

    /// Iterates products in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
