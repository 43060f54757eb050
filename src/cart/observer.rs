//! Cart Observer

use crate::cart::CartLines;

/// A state change applied to a [`CartLedger`](crate::cart::CartLedger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A new line was appended.
    LineAdded {
        /// Item name
        item_name: String,
        /// Initial quantity
        quantity: u32,
    },

    /// An existing line's quantity changed.
    QuantityChanged {
        /// Item name
        item_name: String,
        /// Quantity before the change
        from: u32,
        /// Quantity after the change
        to: u32,
    },

    /// A line was removed, either explicitly or by setting its quantity to zero.
    LineRemoved {
        /// Item name
        item_name: String,
        /// Quantity the line held
        quantity: u32,
    },

    /// Every line was removed at once.
    Cleared {
        /// Number of lines that were removed
        lines: usize,
    },
}

/// Receives change notifications from a [`CartLedger`](crate::cart::CartLedger).
///
/// Notifications are delivered after the mutation has been fully applied, so the lines
/// passed alongside the event already reflect the new quantities and totals. No-op calls
/// (setting an unchanged quantity, removing an absent line, clearing an empty cart) do not
/// notify.
pub trait CartObserver {
    /// Called once per state-changing mutation.
    fn on_change(&mut self, event: &CartEvent, cart: &CartLines);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {
    fn on_change(&mut self, _event: &CartEvent, _cart: &CartLines) {}
}

impl<F> CartObserver for F
where
    F: FnMut(&CartEvent, &CartLines),
{
    fn on_change(&mut self, event: &CartEvent, cart: &CartLines) {
        self(event, cart);
    }
}
