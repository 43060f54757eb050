//! OrderUp
//!
//! Menu catalog, session cart and simulated checkout for a cafeteria food-ordering app.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod prices;
pub mod receipt;
