//! Fixtures
//!
//! Menu catalogs described in YAML.
//!
//! ```yaml
//! currency: ZAR
//! categories:
//!   - name: Sides
//!     items:
//!       - name: Small Fries
//!         price: 25
//! ```

use std::{fs, path::Path};

use rusty_money::iso;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    fixtures::menu::MenuFixture,
    items::MenuItem,
};

pub mod menu;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The menu breaks a catalog rule
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load a catalog from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, names an unknown currency, or
/// repeats a category or item name.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, FixtureError> {
    let contents = fs::read_to_string(path)?;

    parse_catalog(&contents)
}

/// Parse a catalog from YAML text.
///
/// # Errors
///
/// Returns an error if the text cannot be parsed, names an unknown currency, or repeats a
/// category or item name.
pub fn parse_catalog(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: MenuFixture = serde_norway::from_str(yaml)?;

    let currency = iso::find(&fixture.currency)
        .ok_or_else(|| FixtureError::UnknownCurrency(fixture.currency.clone()))?;

    let mut builder = Catalog::builder(currency);

    for category in fixture.categories {
        builder = builder.category(
            category.name,
            category
                .items
                .into_iter()
                .map(|item| MenuItem::new(item.name, item.price)),
        )?;
    }

    Ok(builder.build())
}
