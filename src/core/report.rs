//! Report formatting - the products table, summary figures, and currency text.
//!
//! Functions here only turn derived figures into strings. They never touch
//! the catalog and are safe to call as often as the screen is redrawn.

use super::{
    catalog::Catalog,
    derive::{ProductRow, Summary, rows},
};
use crate::config::{QuantityMode, app::CurrencyConfig};
use rust_decimal::{Decimal, RoundingStrategy};

/// Column titles shared by the on-screen table and the spreadsheet export.
#[must_use]
pub const fn column_titles(mode: QuantityMode) -> [&'static str; 6] {
    [
        "Product",
        "Cost",
        "Price",
        mode.label(),
        "Unit Profit",
        "Total Profit",
    ]
}

/// Rounds an amount to cents, half away from zero, always keeping two places.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Formats an amount like `R$ 1.234,56` or `-R$ 3,00`.
#[must_use]
pub fn format_currency(amount: Decimal, currency: &CurrencyConfig) -> String {
    let rounded = round_money(amount);
    let digits = rounded.abs().to_string();
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(currency.thousands_separator);
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{sign}{} {grouped}{}{cents}",
        currency.symbol, currency.decimal_separator
    )
}

fn row_cells(row: &ProductRow<'_>, currency: &CurrencyConfig) -> [String; 6] {
    [
        row.product.name.clone(),
        format_currency(row.product.cost, currency),
        format_currency(row.product.price, currency),
        row.product.quantity.to_string(),
        format_currency(row.unit_profit, currency),
        format_currency(row.total_profit, currency),
    ]
}

/// Renders the products table with a leading 1-based row number column.
#[must_use]
pub fn render_table(catalog: &Catalog, mode: QuantityMode, currency: &CurrencyConfig) -> String {
    if catalog.is_empty() {
        return "No products yet. Use `add` to create one!\n".to_string();
    }

    let mut lines: Vec<Vec<String>> = Vec::with_capacity(catalog.len() + 1);
    let mut header = vec!["#".to_string()];
    header.extend(column_titles(mode).iter().map(ToString::to_string));
    lines.push(header);

    for (index, row) in rows(catalog).iter().enumerate() {
        let mut cells = vec![(index + 1).to_string()];
        cells.extend(row_cells(row, currency));
        lines.push(cells);
    }

    let columns = lines[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            lines
                .iter()
                .map(|cells| cells[c].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for (line_no, cells) in lines.iter().enumerate() {
        let rendered: Vec<String> = cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(c, (cell, &width))| {
                // Text columns left-aligned, numbers right-aligned
                if c == 1 {
                    format!("{cell:<width$}")
                } else {
                    format!("{cell:>width$}")
                }
            })
            .collect();
        out.push_str(rendered.join(" | ").trim_end());
        out.push('\n');

        if line_no == 0 {
            let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
            out.push_str(&rule.join("-+-"));
            out.push('\n');
        }
    }
    out
}

/// Renders the three summary figures, one per line.
#[must_use]
pub fn render_summary(summary: &Summary, currency: &CurrencyConfig) -> String {
    format!(
        "Total Investment: {}\nTotal Revenue:    {}\nTotal Profit:     {}\n",
        format_currency(summary.investment, currency),
        format_currency(summary.revenue, currency),
        format_currency(summary.profit, currency),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{dec, draft, widget};

    fn dollars() -> CurrencyConfig {
        CurrencyConfig {
            symbol: "$".to_string(),
            decimal_separator: '.',
            thousands_separator: ',',
        }
    }

    #[test]
    fn test_format_currency_default_style() {
        let reais = CurrencyConfig::default();
        assert_eq!(format_currency(dec("1234.5"), &reais), "R$ 1.234,50");
        assert_eq!(format_currency(dec("0"), &reais), "R$ 0,00");
    }

    #[test]
    fn test_format_currency_grouping() {
        let usd = dollars();
        assert_eq!(format_currency(dec("999"), &usd), "$ 999.00");
        assert_eq!(format_currency(dec("1000"), &usd), "$ 1,000.00");
        assert_eq!(format_currency(dec("1234567.891"), &usd), "$ 1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative_and_rounding() {
        let usd = dollars();
        assert_eq!(format_currency(dec("-3"), &usd), "-$ 3.00");
        assert_eq!(format_currency(dec("2.005"), &usd), "$ 2.01");
        assert_eq!(format_currency(dec("-0.001"), &usd), "$ 0.00");
    }

    #[test]
    fn test_column_titles_follow_mode() {
        assert_eq!(column_titles(QuantityMode::Sold)[3], "Quantity Sold");
        assert_eq!(column_titles(QuantityMode::Stock)[3], "In Stock");
    }

    #[test]
    fn test_render_empty_table() {
        let out = render_table(&Catalog::new(), QuantityMode::Sold, &dollars());
        assert!(out.contains("No products yet"));
    }

    #[test]
    fn test_render_table_rows() {
        let mut catalog = Catalog::new();
        catalog.add(widget());
        catalog.add(draft("Loss Leader", "8", "5", "4"));

        let out = render_table(&catalog, QuantityMode::Sold, &dollars());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(out.ends_with('\n'));
        assert!(lines[0].contains("Quantity Sold"));
        assert!(lines[1].starts_with("-"));
        assert!(lines[1].chars().all(|c| matches!(c, '-' | '+' | ' ')));
        assert!(lines[2].starts_with("1 | Widget"));
        assert!(lines[2].contains("$ 5.00"));
        assert!(lines[2].ends_with("$ 15.00"));
        assert!(lines[3].ends_with("-$ 12.00"));
    }

    #[test]
    fn test_render_summary() {
        let mut catalog = Catalog::new();
        catalog.add(widget());

        let out = render_summary(&Summary::of(&catalog), &dollars());
        assert_eq!(
            out,
            "Total Investment: $ 30.00\nTotal Revenue:    $ 45.00\nTotal Profit:     $ 15.00\n"
        );
    }
}
