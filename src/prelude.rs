//! OrderUp prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        CartError, CartLedger, CartLine, CartLines,
        observer::{CartEvent, CartObserver, NoopObserver},
    },
    catalog::{Catalog, CatalogBuilder, CatalogError, Category},
    checkout::{
        Checkout, CheckoutError, NextStep, OrderConfirmation, PaymentError, PaymentGateway,
        PaymentMethod, PaymentReceipt, SimulatedPayment,
    },
    fixtures::{FixtureError, load_catalog, parse_catalog},
    items::MenuItem,
    prices::Price,
    receipt::{ReceiptError, write_cart, write_menu, write_order},
};
