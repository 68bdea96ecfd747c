//! Entity module - SeaORM definitions for the external, read-only product catalog.

pub mod known_product;

pub use known_product::{
    Column as KnownProductColumn, Entity as KnownProduct, Model as KnownProductModel,
};
