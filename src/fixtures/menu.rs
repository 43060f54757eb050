//! Menu Fixtures

use serde::Deserialize;

use crate::prices::Price;

/// Top-level menu document.
#[derive(Debug, Deserialize)]
pub struct MenuFixture {
    /// ISO currency code, defaults to `ZAR`
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Categories in menu order
    pub categories: Vec<CategoryFixture>,
}

/// Category Fixture
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Category name
    pub name: String,

    /// Items in menu order
    #[serde(default)]
    pub items: Vec<ItemFixture>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item name
    pub name: String,

    /// Price in whole currency units
    pub price: Price,
}

fn default_currency() -> String {
    "ZAR".to_string()
}
