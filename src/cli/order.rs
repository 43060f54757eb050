use std::{io::Write, time::Duration};

use clap::{Args, ValueEnum};
use humanize_duration::{Truncate, prelude::DurationExt};
use orderup::{
    cart::CartLedger,
    catalog::Catalog,
    checkout::{Checkout, DEFAULT_PAYMENT_DELAY, NextStep, PaymentMethod, SimulatedPayment},
    items::MenuItem,
    receipt::{write_cart, write_order},
};

use super::CliError;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum PaymentChoice {
    /// Google Pay (demo)
    GooglePay,

    /// Mobile payment
    Mobile,
}

impl From<PaymentChoice> for PaymentMethod {
    fn from(choice: PaymentChoice) -> Self {
        match choice {
            PaymentChoice::GooglePay => PaymentMethod::GooglePayDemo,
            PaymentChoice::Mobile => PaymentMethod::MobilePayment,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Item to add, as NAME (adds one) or NAME=QUANTITY (sets the quantity, 0 removes)
    #[arg(short, long = "item", value_name = "NAME[=QTY]", required = true)]
    items: Vec<String>,

    /// Item to remove once all --item edits are applied
    #[arg(short, long = "remove", value_name = "NAME")]
    remove: Vec<String>,

    /// Pay for the cart and clear it
    #[arg(long)]
    checkout: bool,

    /// Payment method used at checkout
    #[arg(long, value_enum, default_value_t = PaymentChoice::GooglePay)]
    payment: PaymentChoice,

    /// Simulated payment processing time in milliseconds
    #[arg(long, env = "ORDERUP_PAYMENT_DELAY_MS", default_value_t = default_payment_delay_ms())]
    payment_delay_ms: u64,
}

fn default_payment_delay_ms() -> u64 {
    u64::try_from(DEFAULT_PAYMENT_DELAY.as_millis()).unwrap_or(u64::MAX)
}

/// A parsed `--item` value.
#[derive(Debug, PartialEq, Eq)]
enum ItemEdit<'a> {
    AddOne(&'a str),
    SetQuantity(&'a str, i64),
}

fn parse_item_arg(arg: &str) -> Result<ItemEdit<'_>, CliError> {
    let invalid = || CliError::InvalidItemArg(arg.to_string());

    match arg.rsplit_once('=') {
        None if !arg.trim().is_empty() => Ok(ItemEdit::AddOne(arg.trim())),
        None => Err(invalid()),
        Some((name, quantity)) => {
            let name = name.trim();

            if name.is_empty() {
                return Err(invalid());
            }

            let quantity = quantity.trim().parse().map_err(|_err| invalid())?;

            Ok(ItemEdit::SetQuantity(name, quantity))
        }
    }
}

fn lookup<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a MenuItem, CliError> {
    catalog
        .find(name)
        .ok_or_else(|| CliError::UnknownItem(name.to_string()))
}

pub(super) fn run(
    args: &OrderArgs,
    catalog: &Catalog,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut ledger = CartLedger::new();

    for arg in &args.items {
        match parse_item_arg(arg)? {
            ItemEdit::AddOne(name) => {
                ledger.increment(lookup(catalog, name)?);
            }
            ItemEdit::SetQuantity(name, quantity) => {
                ledger.try_set_quantity(lookup(catalog, name)?, quantity)?;
            }
        }
    }

    for name in &args.remove {
        ledger.remove_line(name.trim());
    }

    let currency = catalog.currency();

    write_cart(&mut *out, &ledger, currency)?;

    if !args.checkout {
        return Ok(());
    }

    let checkout = Checkout::new(args.payment.into());
    let gateway = SimulatedPayment::new(Duration::from_millis(args.payment_delay_ms));

    if !ledger.is_empty() {
        writeln!(
            out,
            "{}...",
            checkout
                .method()
                .action_label(ledger.total_price(), currency)
        )?;
    }

    let order = checkout.place_order(&mut ledger, &gateway)?;

    write_order(&mut *out, &order, currency)?;

    writeln!(
        out,
        "Payment approved in {}.",
        order.elapsed.human(Truncate::Millis)
    )?;

    match order.next {
        NextStep::TrackOrder => {
            writeln!(out, "Your order is being prepared. Track it at the counter.")?;
        }
    }

    Ok(())
}
