//! Cart
//!
//! The session cart: an ordered set of order lines, unique by item name, plus derived totals.

use std::{fmt, ops::Deref};

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{items::MenuItem, prices::Price};

pub mod observer;

use observer::{CartEvent, CartObserver, NoopObserver};

/// Errors raised by cart operations taking unchecked input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The quantity is negative or does not fit a `u32`.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),
}

/// A single order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    item_name: String,
    unit_price: Price,
    quantity: u32,
}

impl CartLine {
    /// Name of the ordered item
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Unit price captured when the line was created
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Quantity ordered, always at least one
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Read-only view of the cart's lines and their aggregates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartLines {
    lines: Vec<CartLine>,
    revision: u64,
}

impl CartLines {
    /// Lines in order of first creation.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Line for the named item, if present.
    pub fn line(&self, item_name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item_name == item_name)
    }

    /// Current quantity of the named item, zero when it is not in the cart.
    pub fn quantity_of(&self, item_name: &str) -> u32 {
        self.line(item_name).map_or(0, CartLine::quantity)
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Item count for a navigation badge, hidden (`None`) for an empty cart.
    pub fn badge(&self) -> Option<u64> {
        Some(self.item_count()).filter(|count| *count > 0)
    }

    /// Sum of all line totals.
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total price as money in `currency`.
    pub fn total_money(&self, currency: &'static Currency) -> Money<'static, Currency> {
        self.total_price().to_money(currency)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Counter advanced once for every mutation that changed the cart.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn position(&self, item_name: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.item_name == item_name)
    }
}

/// The cart for one ordering session.
///
/// Owns at most one [`CartLine`] per item name. Every screen that reads or edits the cart
/// borrows the same ledger; there is no global cart.
///
/// Lines are matched by item name, not by a catalog key, so two distinct items sharing a
/// name would share a line.
pub struct CartLedger<O: CartObserver = NoopObserver> {
    cart: CartLines,
    observer: O,
}

impl CartLedger {
    /// Create an empty ledger without an observer.
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }
}

impl Default for CartLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: CartObserver> CartLedger<O> {
    /// Create an empty ledger that notifies `observer` after every change.
    pub fn with_observer(observer: O) -> Self {
        CartLedger {
            cart: CartLines::default(),
            observer,
        }
    }

    /// Set the quantity of `item` in the cart.
    ///
    /// A positive quantity creates the line (capturing the item's unit price) or updates it in
    /// place; zero removes it. Returns the applied change, or `None` if nothing changed.
    pub fn set_quantity(&mut self, item: &MenuItem, quantity: u32) -> Option<CartEvent> {
        let event = match (self.cart.position(item.name()), quantity) {
            (None, 0) => None,
            (None, quantity) => {
                self.cart.lines.push(CartLine {
                    item_name: item.name().to_string(),
                    unit_price: item.unit_price(),
                    quantity,
                });

                Some(CartEvent::LineAdded {
                    item_name: item.name().to_string(),
                    quantity,
                })
            }
            (Some(idx), 0) => Some(self.remove_at(idx)),
            (Some(idx), quantity) => {
                let line = self.cart.lines.get_mut(idx)?;

                if line.quantity == quantity {
                    None
                } else {
                    let from = std::mem::replace(&mut line.quantity, quantity);

                    Some(CartEvent::QuantityChanged {
                        item_name: line.item_name.clone(),
                        from,
                        to: quantity,
                    })
                }
            }
        };

        self.commit(event)
    }

    /// Set the quantity of `item` from unchecked signed input.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: `quantity` is negative or too large; the cart is left
    ///   untouched.
    pub fn try_set_quantity(
        &mut self,
        item: &MenuItem,
        quantity: i64,
    ) -> Result<Option<CartEvent>, CartError> {
        let Ok(checked) = u32::try_from(quantity) else {
            warn!(item = item.name(), quantity, "rejected cart quantity");

            return Err(CartError::InvalidQuantity(quantity));
        };

        Ok(self.set_quantity(item, checked))
    }

    /// Add one of `item`.
    pub fn increment(&mut self, item: &MenuItem) -> Option<CartEvent> {
        let quantity = self.cart.quantity_of(item.name()).saturating_add(1);

        self.set_quantity(item, quantity)
    }

    /// Take one of `item` away; removes the line at one and does nothing at zero.
    pub fn decrement(&mut self, item: &MenuItem) -> Option<CartEvent> {
        match self.cart.quantity_of(item.name()) {
            0 => None,
            quantity => self.set_quantity(item, quantity - 1),
        }
    }

    /// Remove the line for `item_name`, if any.
    pub fn remove_line(&mut self, item_name: &str) -> Option<CartEvent> {
        let event = self
            .cart
            .position(item_name)
            .map(|idx| self.remove_at(idx));

        self.commit(event)
    }

    /// Remove every line.
    pub fn clear(&mut self) -> Option<CartEvent> {
        let event = if self.cart.is_empty() {
            None
        } else {
            let lines = self.cart.lines.len();
            self.cart.lines.clear();

            Some(CartEvent::Cleared { lines })
        };

        self.commit(event)
    }

    /// The observer receiving change notifications.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn remove_at(&mut self, idx: usize) -> CartEvent {
        let line = self.cart.lines.remove(idx);

        CartEvent::LineRemoved {
            item_name: line.item_name,
            quantity: line.quantity,
        }
    }

    fn commit(&mut self, event: Option<CartEvent>) -> Option<CartEvent> {
        let event = event?;

        self.cart.revision += 1;

        debug!(
            ?event,
            revision = self.cart.revision,
            items = self.cart.item_count(),
            total = *self.cart.total_price(),
            "cart changed"
        );

        self.observer.on_change(&event, &self.cart);

        Some(event)
    }
}

impl<O: CartObserver> Deref for CartLedger<O> {
    type Target = CartLines;

    fn deref(&self) -> &Self::Target {
        &self.cart
    }
}

impl<O: CartObserver> fmt::Debug for CartLedger<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartLedger")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}
