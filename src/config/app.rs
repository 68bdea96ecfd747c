//! Application configuration loading from config.toml
//!
//! Every section is optional. A missing default config file means "use the
//! built-in defaults"; a config file the user pointed at explicitly must exist
//! and parse.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// How the quantity column of a product is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuantityMode {
    /// Quantity counts units already sold
    #[default]
    Sold,
    /// Quantity counts units on hand
    Stock,
}

impl QuantityMode {
    /// Column title and prompt label for the quantity field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sold => "Quantity Sold",
            Self::Stock => "In Stock",
        }
    }
}

/// Currency display settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Symbol printed before amounts (e.g., "R$", "$")
    pub symbol: String,
    /// Separator between whole and fractional part
    pub decimal_separator: char,
    /// Separator between groups of thousands
    pub thousands_separator: char,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            thousands_separator: '.',
        }
    }
}

/// Spreadsheet export settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Name of the single worksheet in exported files
    pub sheet_name: String,
    /// File written by `export` when no path is given
    pub default_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Products".to_string(),
            default_path: PathBuf::from("products.xlsx"),
        }
    }
}

/// External known-product catalog settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// SeaORM connection URL of the read-only catalog, if any
    pub database_url: Option<String>,
}

/// A known product listed directly in the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KnownProductConfig {
    /// Product name
    pub name: String,
    /// Unit cost
    pub cost: f64,
    /// Unit sale price
    #[serde(default)]
    pub price: f64,
}

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Meaning of the quantity field
    pub quantity_mode: QuantityMode,
    /// Currency formatting
    pub currency: CurrencyConfig,
    /// Export settings
    pub export: ExportConfig,
    /// External lookup settings
    pub lookup: LookupConfig,
    /// Local known-product list
    pub known_products: Vec<KnownProductConfig>,
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Parses configuration from TOML text.
///
/// # Errors
/// Returns the TOML error message when the text is not a valid configuration.
pub fn parse_config(contents: &str) -> std::result::Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Loads configuration from `path`, falling back to defaults if the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    if path_ref.exists() {
        load_config(path_ref)
    } else {
        info!(
            "No config file at {}, using built-in defaults.",
            path_ref.display()
        );
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            quantity_mode = "stock"

            [currency]
            symbol = "$"
            decimal_separator = "."
            thousands_separator = ","

            [export]
            sheet_name = "Inventory"
            default_path = "out/inventory.xlsx"

            [lookup]
            database_url = "sqlite://data/products.sqlite"

            [[known_products]]
            name = "Widget"
            cost = 10.0
            price = 15.0

            [[known_products]]
            name = "Gizmo"
            cost = 2.5
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.quantity_mode, QuantityMode::Stock);
        assert_eq!(config.currency.symbol, "$");
        assert_eq!(config.currency.decimal_separator, '.');
        assert_eq!(config.export.sheet_name, "Inventory");
        assert_eq!(
            config.lookup.database_url.as_deref(),
            Some("sqlite://data/products.sqlite")
        );
        assert_eq!(config.known_products.len(), 2);
        assert_eq!(config.known_products[1].price, 0.0);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.quantity_mode, QuantityMode::Sold);
        assert_eq!(config.currency.symbol, "R$");
        assert_eq!(config.export.sheet_name, "Products");
        assert!(config.lookup.database_url.is_none());
    }

    #[test]
    fn test_unknown_quantity_mode_is_rejected() {
        assert!(parse_config(r#"quantity_mode = "reserved""#).is_err());
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_or_default(dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "quantity_mode = \"stock\"").unwrap();

        let config = load_config_or_default(&path).unwrap();
        assert_eq!(config.quantity_mode, QuantityMode::Stock);
    }

    #[test]
    fn test_quantity_mode_labels() {
        assert_eq!(QuantityMode::Sold.label(), "Quantity Sold");
        assert_eq!(QuantityMode::Stock.label(), "In Stock");
    }
}
