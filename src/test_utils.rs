//! Shared test utilities for `InventoryBuddy`.
//!
//! This module provides helpers for building drafts and forms with sensible
//! defaults, and for setting up an in-memory known-product catalog.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{form::ProductForm, product::ProductDraft},
    entities::{KnownProduct, known_product},
    errors::Result,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, Schema, Set};
use std::str::FromStr;

/// Parses a decimal literal. Panics on bad input, which is fine in tests.
pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

/// Builds a validated draft from raw field text.
pub fn draft(name: &str, cost: &str, price: &str, quantity: &str) -> ProductDraft {
    ProductForm::new(name, cost, price, quantity)
        .validate()
        .unwrap()
}

/// The reference product: cost 10, price 15, quantity 3.
pub fn widget() -> ProductDraft {
    draft("Widget", "10", "15", "3")
}

/// The reference product as raw form text.
pub fn widget_form() -> ProductForm {
    ProductForm::new("Widget", "10", "15", "3")
}

/// Creates the `known_products` table from the entity definition.
pub async fn create_lookup_table(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);
    let table = schema.create_table_from_entity(KnownProduct);
    db.execute(builder.build(&table)).await?;
    Ok(())
}

/// Creates an in-memory `SQLite` known-product catalog with its table.
pub async fn setup_lookup_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    create_lookup_table(&db).await?;
    Ok(db)
}

/// Seeds one row into the known-product catalog.
///
/// Only tests write to this table; the tracker itself treats it as read-only.
pub async fn insert_known_product(
    db: &DatabaseConnection,
    name: &str,
    cost: f64,
    price: f64,
) -> Result<known_product::Model> {
    let row = known_product::ActiveModel {
        name: Set(name.to_string()),
        cost: Set(cost),
        price: Set(price),
        ..Default::default()
    };
    row.insert(db).await.map_err(Into::into)
}
