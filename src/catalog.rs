//! Catalog
//!
//! The static menu: ordered categories of [`MenuItem`]s, category lookup and free-text search.

use rustc_hash::FxHashSet;
use rusty_money::iso::{self, Currency};
use thiserror::Error;

use crate::items::MenuItem;

/// Errors raised while assembling a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The same category name was added twice.
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    /// An item name appears twice within one category.
    #[error("Duplicate item {item} in category {category}")]
    DuplicateItem {
        /// Category containing the duplicate
        category: String,
        /// Repeated item name
        item: String,
    },
}

/// A named, ordered group of menu items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    items: Vec<MenuItem>,
}

impl Category {
    /// Category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items in menu order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

/// Read-only menu catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    currency: &'static Currency,
}

type StaticCategory = (&'static str, &'static [(&'static str, u64)]);

const CAFETERIA_MENU: &[StaticCategory] = &[
    (
        "Main Meals",
        &[
            ("Chicken Burger", 50),
            ("Chicken Wrap", 50),
            ("Beef Wrap", 45),
            ("Chicken-Mayo Sandwich", 25),
            ("Kota", 30),
            ("Classic Sandwich", 20),
            ("Hot-Dog", 25),
        ],
    ),
    (
        "Sides",
        &[("Small Fries", 25), ("Medium Fries", 35), ("Large Fries", 55)],
    ),
    (
        "Snacks",
        &[
            ("Doritos", 22),
            ("Lays", 22),
            ("Simba Chips", 22),
            ("Popcorn", 18),
        ],
    ),
    (
        "Drinks",
        &[
            ("Coca-cola 500ml", 15),
            ("Sprite 500ml", 15),
            ("Fanta-Orange 500ml", 15),
            ("Stone-ginger 500ml", 15),
            ("Coca-cola 2l", 25),
            ("Sprite 2l", 25),
            ("Fanta-Orange 2l", 25),
            ("Stone-ginger 2l", 25),
            ("Juice-box", 12),
            ("Water", 12),
            ("Redbull", 18),
            ("Powerade", 18),
            ("Monster", 18),
            ("Coffee", 15),
            ("Tea", 15),
        ],
    ),
    (
        "Bakery",
        &[
            ("Muffin", 15),
            ("Pie", 30),
            ("Donut", 10),
            ("Chocolate-chip cookie", 10),
        ],
    ),
    (
        "Desserts",
        &[
            ("Cake slice-chocolate", 25),
            ("Cake slice-vanilla", 25),
            ("Cheese-Cake slice", 27),
            ("Chocolate cupcake", 17),
            ("Vanilla cupcake", 17),
        ],
    ),
];

impl Catalog {
    /// Start building a catalog priced in `currency`.
    pub fn builder(currency: &'static Currency) -> CatalogBuilder {
        CatalogBuilder {
            categories: Vec::new(),
            currency,
        }
    }

    /// The built-in cafeteria menu, priced in rand.
    pub fn cafeteria() -> Self {
        Catalog {
            categories: CAFETERIA_MENU
                .iter()
                .map(|(name, items)| Category {
                    name: (*name).to_string(),
                    items: items
                        .iter()
                        .map(|(item, price)| MenuItem::new(*item, *price))
                        .collect(),
                })
                .collect(),
            currency: iso::ZAR,
        }
    }

    /// Currency all prices are quoted in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Categories in menu order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Items of the named category, or an empty slice for an unknown category.
    pub fn category(&self, name: &str) -> &[MenuItem] {
        self.categories
            .iter()
            .find(|category| category.name == name)
            .map(|category| category.items.as_slice())
            .unwrap_or_default()
    }

    /// Every item in category order, duplicates included.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|category| category.items.iter())
    }

    /// First item with exactly this name.
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items().find(|item| item.name() == name)
    }

    /// Items whose name contains `query`, ignoring case.
    ///
    /// Results keep catalog order and are deduplicated by name, the first occurrence winning.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&MenuItem> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();

        let mut seen = FxHashSet::default();

        self.items()
            .filter(|&item| item.name_contains(&needle) && seen.insert(item.name()))
            .collect()
    }
}

/// Incrementally assembles a [`Catalog`], validating name uniqueness.
#[derive(Debug)]
pub struct CatalogBuilder {
    categories: Vec<Category>,
    currency: &'static Currency,
}

impl CatalogBuilder {
    /// Append a category with its items.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateCategory`]: a category with this name already exists.
    /// - [`CatalogError::DuplicateItem`]: an item name is repeated within `items`.
    pub fn category(
        mut self,
        name: impl Into<String>,
        items: impl IntoIterator<Item = MenuItem>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();

        if self.categories.iter().any(|category| category.name == name) {
            return Err(CatalogError::DuplicateCategory(name));
        }

        let items: Vec<MenuItem> = items.into_iter().collect();
        let mut names = FxHashSet::default();

        if let Some(duplicate) = items.iter().find(|&item| !names.insert(item.name())) {
            return Err(CatalogError::DuplicateItem {
                category: name,
                item: duplicate.name().to_string(),
            });
        }

        self.categories.push(Category { name, items });

        Ok(self)
    }

    /// Finish building.
    pub fn build(self) -> Catalog {
        Catalog {
            categories: self.categories,
            currency: self.currency,
        }
    }
}
