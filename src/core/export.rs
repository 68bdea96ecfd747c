//! Spreadsheet export of the products table.
//!
//! This module exports the catalog to XLSX using the `rust_xlsxwriter` library.
//! The workbook has a single worksheet: one header row with the table's column
//! titles, then one row per product in insertion order. Exporting never
//! touches the catalog, so a failed export leaves the session as it was.

use super::{
    catalog::Catalog,
    derive::{ProductRow, rows},
    report::{column_titles, round_money},
};
use crate::{config::QuantityMode, errors::Result};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::{debug, info};

/// Number format applied to money cells
const MONEY_FORMAT: &str = "#,##0.00";

/// Settings that shape an exported workbook.
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions<'a> {
    /// Name of the single worksheet
    pub sheet_name: &'a str,
    /// Meaning of the quantity column, used for its title
    pub quantity_mode: QuantityMode,
}

/// One spreadsheet row, already derived from a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    /// Product name
    pub name: String,
    /// Unit cost
    pub cost: f64,
    /// Unit sale price
    pub price: f64,
    /// Quantity sold or in stock
    pub quantity: u32,
    /// Profit per unit
    pub unit_profit: f64,
    /// Profit over the whole quantity
    pub total_profit: f64,
}

fn cell_value(amount: Decimal) -> f64 {
    round_money(amount).to_f64().unwrap_or_default()
}

impl From<&ProductRow<'_>> for ExportRow {
    fn from(row: &ProductRow<'_>) -> Self {
        Self {
            name: row.product.name.clone(),
            cost: cell_value(row.product.cost),
            price: cell_value(row.product.price),
            quantity: row.product.quantity,
            unit_profit: cell_value(row.unit_profit),
            total_profit: cell_value(row.total_profit),
        }
    }
}

/// Shapes the catalog into export rows.
#[must_use]
pub fn export_rows(catalog: &Catalog) -> Vec<ExportRow> {
    rows(catalog).iter().map(ExportRow::from).collect()
}

fn build_workbook(catalog: &Catalog, options: ExportOptions<'_>) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let money = Format::new().set_num_format(MONEY_FORMAT);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(options.sheet_name)?;

    for (col, title) in (0_u16..).zip(column_titles(options.quantity_mode)) {
        worksheet.write_string_with_format(0, col, title, &header)?;
    }

    for (row, data) in (1_u32..).zip(export_rows(catalog)) {
        worksheet.write_string(row, 0, data.name.as_str())?;
        worksheet.write_number_with_format(row, 1, data.cost, &money)?;
        worksheet.write_number_with_format(row, 2, data.price, &money)?;
        worksheet.write_number(row, 3, f64::from(data.quantity))?;
        worksheet.write_number_with_format(row, 4, data.unit_profit, &money)?;
        worksheet.write_number_with_format(row, 5, data.total_profit, &money)?;
    }

    debug!("Built workbook with {} product rows", catalog.len());
    Ok(workbook)
}

/// Exports the catalog to XLSX bytes held in memory.
///
/// # Errors
/// Returns `Export` if the sheet name is invalid or serialization fails.
pub fn export_to_buffer(catalog: &Catalog, options: ExportOptions<'_>) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(catalog, options)?;
    Ok(workbook.save_to_buffer()?)
}

/// Exports the catalog to an XLSX file at `path`.
///
/// # Errors
/// Returns `Export` if the sheet name is invalid, serialization fails, or the
/// file cannot be written.
pub fn export_to_path(catalog: &Catalog, options: ExportOptions<'_>, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(catalog, options)?;
    workbook.save(path)?;
    info!(
        "Exported {} products to {}",
        catalog.len(),
        path.display()
    );
    Ok(())
}
