//! Items

use crate::prices::Price;

/// A menu item as listed in the catalog.
///
/// The name doubles as the item's identity: the cart matches lines to items by name,
/// so names must be unique within a category.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MenuItem {
    name: String,
    unit_price: Price,
}

impl MenuItem {
    /// Creates a new menu item with the given name and unit price
    pub fn new(name: impl Into<String>, unit_price: impl Into<Price>) -> Self {
        Self {
            name: name.into(),
            unit_price: unit_price.into(),
        }
    }

    /// Returns the name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price of the item
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Whether the item name contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
