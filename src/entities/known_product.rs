//! Known product entity - a read-only row from the external product catalog.
//!
//! These rows are never written by the tracker. They only feed name
//! autocomplete and prefill the capture form with a name and unit cost.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Known product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "known_products")]
pub struct Model {
    /// Identifier in the external catalog
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Product name (e.g., "Widget", "12-Pack Soda")
    pub name: String,
    /// Unit cost as stored by the external catalog
    pub cost: f64,
    /// Unit sale price as stored by the external catalog
    pub price: f64,
}

/// Known products have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
