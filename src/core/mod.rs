//! Core business logic - framework-agnostic catalog, derivation, and export operations.

/// In-memory product catalog
pub mod catalog;
/// Profit derivations over products and the catalog
pub mod derive;
/// XLSX export of the products table
pub mod export;
/// Capture form validation
pub mod form;
/// Read-only known-product suggestions
pub mod lookup;
/// Product records and identifiers
pub mod product;
/// Table, summary, and currency formatting
pub mod report;
/// Session state and the edit-mode state machine
pub mod session;
