//! Checkout
//!
//! Turns a non-empty cart into a placed order: charge a [`PaymentGateway`], then clear the
//! cart and tell the caller to move on to order tracking.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
    thread,
    time::{Duration, Instant},
};

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    cart::{CartLedger, CartLine, observer::CartObserver},
    prices::Price,
};

/// Delay applied by [`SimulatedPayment::default`].
pub const DEFAULT_PAYMENT_DELAY: Duration = Duration::from_millis(1500);

/// Errors reported by a payment gateway.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// The payment was not approved.
    #[error("Payment declined: {0}")]
    Declined(String),
}

/// Errors that can occur while placing an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// There is nothing in the cart to pay for.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// The gateway did not take the payment; the cart is unchanged.
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

/// How the customer chose to pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Demo Google Pay flow.
    #[default]
    GooglePayDemo,

    /// Pay on collection from the mobile app.
    MobilePayment,
}

impl PaymentMethod {
    /// Label of the confirm button for an order totalling `total`.
    pub fn action_label(self, total: Price, currency: &Currency) -> String {
        match self {
            PaymentMethod::GooglePayDemo => {
                format!("Pay {} with Google Pay (Demo)", total.format(currency))
            }
            PaymentMethod::MobilePayment => "Place Order".to_string(),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::GooglePayDemo => write!(f, "Google Pay Demo"),
            PaymentMethod::MobilePayment => write!(f, "Mobile Payment"),
        }
    }
}

/// Proof of an approved payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Gateway reference for the payment
    pub reference: String,

    /// Amount charged
    pub amount: Price,
}

/// Takes payment for an order.
pub trait PaymentGateway {
    /// Charge `amount` using `method`.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] if the payment is not approved.
    fn charge(&self, method: PaymentMethod, amount: Price) -> Result<PaymentReceipt, PaymentError>;
}

/// Gateway that approves every payment after a fixed delay.
#[derive(Debug)]
pub struct SimulatedPayment {
    delay: Duration,
    issued: AtomicU64,
}

impl SimulatedPayment {
    /// Create a simulated gateway waiting `delay` before each approval.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            issued: AtomicU64::new(0),
        }
    }

    /// Delay applied to each payment.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedPayment {
    fn default() -> Self {
        Self::new(DEFAULT_PAYMENT_DELAY)
    }
}

impl PaymentGateway for SimulatedPayment {
    fn charge(
        &self,
        method: PaymentMethod,
        amount: Price,
    ) -> Result<PaymentReceipt, PaymentError> {
        thread::sleep(self.delay);

        let sequence = self.issued.fetch_add(1, Ordering::Relaxed) + 1;

        info!(%method, amount = *amount, sequence, "simulated payment approved");

        Ok(PaymentReceipt {
            reference: format!("DEMO-{sequence:06}"),
            amount,
        })
    }
}

/// Where the caller should go once an order is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// Show the order tracking view.
    TrackOrder,
}

/// A successfully placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Lines as they were at the time of payment
    pub lines: Vec<CartLine>,

    /// Amount charged
    pub total: Price,

    /// Payment method used
    pub method: PaymentMethod,

    /// Payment reference from the gateway
    pub reference: String,

    /// Time spent waiting on the gateway
    pub elapsed: Duration,

    /// Transition the caller should perform
    pub next: NextStep,
}

impl OrderConfirmation {
    /// Number of items ordered.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }
}

/// Checkout for a chosen payment method.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checkout {
    method: PaymentMethod,
}

impl Checkout {
    /// Create a checkout paying with `method`.
    pub fn new(method: PaymentMethod) -> Self {
        Self { method }
    }

    /// Selected payment method.
    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Charge the cart total through `gateway`, then clear the cart.
    ///
    /// The cart is only cleared once the gateway approves the payment.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: the cart has no lines; the gateway is not called.
    /// - [`CheckoutError::Payment`]: the gateway declined; the cart is left as it was.
    pub fn place_order<O, G>(
        &self,
        ledger: &mut CartLedger<O>,
        gateway: &G,
    ) -> Result<OrderConfirmation, CheckoutError>
    where
        O: CartObserver,
        G: PaymentGateway + ?Sized,
    {
        if ledger.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let lines = ledger.lines().to_vec();
        let total = ledger.total_price();

        info!(method = %self.method, total = *total, lines = lines.len(), "placing order");

        let start = Instant::now();

        let receipt = gateway.charge(self.method, total).inspect_err(|error| {
            warn!(%error, "payment failed; cart kept");
        })?;

        let elapsed = start.elapsed();

        ledger.clear();

        info!(reference = %receipt.reference, "order placed");

        Ok(OrderConfirmation {
            lines,
            total,
            method: self.method,
            reference: receipt.reference,
            elapsed,
            next: NextStep::TrackOrder,
        })
    }
}
