//! Session state - the catalog, the capture form, and the edit-mode state machine.
//!
//! A `Session` owns all mutable state for one user. Every user action is a
//! method that runs to completion and returns a `Notice` describing the
//! outcome; errors never escape as `Err`, they become error notices and leave
//! the catalog as it was.

use super::{
    catalog::Catalog,
    derive::{Summary, checked_summary},
    export::{self, ExportOptions},
    form::ProductForm,
    lookup::{KnownProduct, KnownProducts},
    product::Product,
};
use crate::{config::QuantityMode, errors::Error};
use rust_decimal::Decimal;
use std::{fmt, path::Path};
use tracing::{info, warn};

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// An action completed
    Success,
    /// Nothing changed, but the user should know why
    Info,
    /// An action was rejected or failed
    Error,
}

/// A transient message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Text shown to the user
    pub message: String,
}

impl Notice {
    /// Builds a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Builds an informational notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Builds an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Whether this notice reports a failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl From<&Error> for Notice {
    fn from(error: &Error) -> Self {
        Self::error(error.to_string())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.level {
            NoticeLevel::Success => "✅",
            NoticeLevel::Info => "ℹ️",
            NoticeLevel::Error => "❌",
        };
        write!(f, "{marker} {}", self.message)
    }
}

/// Whether the form is adding a new product or editing an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Submitting adds a new product
    #[default]
    Idle,
    /// Submitting replaces this product's fields
    Editing(Product),
}

/// All state for one tracking session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Catalog,
    mode: EditMode,
    form: ProductForm,
    known: KnownProducts,
    quantity_mode: QuantityMode,
}

impl Session {
    /// Creates a session with an empty catalog.
    #[must_use]
    pub fn new(quantity_mode: QuantityMode, known: KnownProducts) -> Self {
        Self {
            catalog: Catalog::new(),
            mode: EditMode::Idle,
            form: ProductForm::default(),
            known,
            quantity_mode,
        }
    }

    /// The current catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current edit mode.
    #[must_use]
    pub const fn mode(&self) -> &EditMode {
        &self.mode
    }

    /// Whether a product is currently under edit.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    /// The capture form's current contents.
    #[must_use]
    pub const fn form(&self) -> &ProductForm {
        &self.form
    }

    /// The known-product list used for suggestions.
    #[must_use]
    pub const fn known_products(&self) -> &KnownProducts {
        &self.known
    }

    /// The configured meaning of the quantity field.
    #[must_use]
    pub const fn quantity_mode(&self) -> QuantityMode {
        self.quantity_mode
    }

    /// Aggregate figures for the current catalog.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::of(&self.catalog)
    }

    /// Selects the product at a 1-based table row for editing and loads it into the form.
    pub fn begin_edit(&mut self, row: usize) -> Notice {
        let Some(product) = self.catalog.at_row(row).cloned() else {
            return Notice::from(&Error::RowNotFound { row });
        };

        info!("Editing product {} ({})", product.id, product.name);
        self.form = ProductForm::from_product(&product);
        let notice = Notice::info(format!("Editing '{}'", product.name));
        self.mode = EditMode::Editing(product);
        notice
    }

    /// Leaves edit mode without touching the catalog.
    pub fn cancel_edit(&mut self) -> Notice {
        match std::mem::take(&mut self.mode) {
            EditMode::Idle => Notice::info("Nothing to cancel"),
            EditMode::Editing(product) => {
                info!("Cancelled edit of {}", product.id);
                self.form.clear();
                Notice::info(format!("Stopped editing '{}'", product.name))
            }
        }
    }

    /// Submits `form`: adds a product when idle, updates the edited product otherwise.
    ///
    /// A rejected form, or one whose values would push the catalog totals out
    /// of range, leaves the catalog and the edit mode unchanged and keeps the
    /// submitted text in the form.
    pub fn submit(&mut self, form: ProductForm) -> Notice {
        self.form = form;
        let draft = match self.form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                warn!("Rejected submission: {}", e);
                return Notice::from(&e);
            }
        };

        // Apply to a copy first so totals that would overflow never reach the catalog
        let mut next = self.catalog.clone();
        let (product, message) = match &self.mode {
            EditMode::Idle => (next.add(draft).clone(), "Product added successfully!"),
            EditMode::Editing(original) => {
                let id = original.id;
                let Some(product) = next.update(id, draft).cloned() else {
                    warn!("Product {} vanished while under edit", id);
                    self.mode = EditMode::Idle;
                    self.form.clear();
                    return Notice::from(&Error::ProductNotFound { id: id.to_string() });
                };
                (product, "Product updated successfully!")
            }
        };

        if checked_summary(&next).is_none() {
            warn!("Rejected {}: catalog totals out of range", product.name);
            return Notice::from(&Error::TotalsOutOfRange);
        }

        self.catalog = next;
        self.mode = EditMode::Idle;
        self.form.clear();
        info!("Saved product {} ({})", product.id, product.name);
        Notice::success(message)
    }

    /// Fills the form's name and cost from a known product.
    pub fn prefill(&mut self, known: &KnownProduct) -> Notice {
        self.form.prefill(&known.name, known.cost);
        Notice::info(format!("Prefilled '{}' from known products", known.name))
    }

    /// Suggests a unit cost for `name` from the catalog, then from known products.
    #[must_use]
    pub fn suggest_cost(&self, name: &str) -> Option<Decimal> {
        self.catalog
            .find_by_name(name)
            .map(|p| p.cost)
            .or_else(|| self.known.find_by_name(name).map(|k| k.cost))
    }

    /// Exports the catalog to an XLSX file. Failures are reported, never propagated.
    pub fn export(&self, path: &Path, sheet_name: &str) -> Notice {
        let options = ExportOptions {
            sheet_name,
            quantity_mode: self.quantity_mode,
        };
        match export::export_to_path(&self.catalog, options, path) {
            Ok(()) => Notice::success(format!(
                "Exported {} products to {}",
                self.catalog.len(),
                path.display()
            )),
            Err(e) => {
                warn!("Export to {} failed: {}", path.display(), e);
                Notice::from(&e)
            }
        }
    }
}
