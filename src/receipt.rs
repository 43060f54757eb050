//! Receipt
//!
//! Terminal tables for the cart, placed orders and the menu.

use std::io;

use rusty_money::iso::Currency;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{CartLine, CartLines},
    checkout::OrderConfirmation,
    items::MenuItem,
    prices::Price,
};

/// Shown in place of the line table when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty. Add some delicious food!";

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Write the current cart: one row per line followed by the item count and total.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if writing to `out` fails.
pub fn write_cart(
    mut out: impl io::Write,
    cart: &CartLines,
    currency: &'static Currency,
) -> Result<(), ReceiptError> {
    if cart.is_empty() {
        writeln!(out, "\n{EMPTY_CART_MESSAGE}\n")?;

        return Ok(());
    }

    write_lines_table(&mut out, cart.lines(), currency)?;
    write_summary(&mut out, cart.item_count(), cart.total_price(), currency)?;

    Ok(())
}

/// Write a placed order with its payment details.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if writing to `out` fails.
pub fn write_order(
    mut out: impl io::Write,
    order: &OrderConfirmation,
    currency: &'static Currency,
) -> Result<(), ReceiptError> {
    write_lines_table(&mut out, &order.lines, currency)?;
    write_summary(&mut out, order.item_count(), order.total, currency)?;

    writeln!(out, " Payment:   {}", order.method)?;
    writeln!(out, " Reference: {}", order.reference)?;
    writeln!(out)?;

    Ok(())
}

/// Write a list of menu items with their prices.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if writing to `out` fails.
pub fn write_menu<'a>(
    mut out: impl io::Write,
    items: impl IntoIterator<Item = &'a MenuItem>,
    currency: &'static Currency,
) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Price"]);

    for item in items {
        builder.push_record([
            item.name().to_string(),
            item.unit_price().format(currency),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..), Alignment::right());

    writeln!(out, "\n{table}")?;

    Ok(())
}

fn write_lines_table(
    out: &mut impl io::Write,
    lines: &[CartLine],
    currency: &'static Currency,
) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Price", "Qty", "Total"]);

    for (idx, line) in lines.iter().enumerate() {
        builder.push_record([
            format!("#{:<3}", idx + 1),
            line.item_name().to_string(),
            line.unit_price().format(currency),
            line.quantity().to_string(),
            line.line_total().format(currency),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..), Alignment::right());

    writeln!(out, "\n{table}")?;

    Ok(())
}

fn write_summary(
    out: &mut impl io::Write,
    item_count: u64,
    total: Price,
    currency: &'static Currency,
) -> Result<(), ReceiptError> {
    writeln!(out, " Items:     {item_count}")?;
    writeln!(out, " \x1b[1mTotal:     {}\x1b[0m", total.format(currency))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::cart::CartLedger;

    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<(), ReceiptError>) -> TestResult<String> {
        let mut out = Vec::new();

        f(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn empty_cart_prints_message() -> TestResult {
        let ledger = CartLedger::new();

        let output = render(|out| write_cart(out, &ledger, iso::ZAR))?;

        assert!(output.contains(EMPTY_CART_MESSAGE));

        Ok(())
    }

    #[test]
    fn cart_lists_lines_and_total() -> TestResult {
        let mut ledger = CartLedger::new();

        ledger.set_quantity(&MenuItem::new("Chicken Burger", 50), 2);
        ledger.set_quantity(&MenuItem::new("Small Fries", 25), 1);

        let output = render(|out| write_cart(out, &ledger, iso::ZAR))?;

        assert!(output.contains("Chicken Burger"));
        assert!(output.contains("Small Fries"));
        assert!(output.contains(" Items:     3"));
        assert!(output.contains("Total:     R125"));
        assert!(output.contains("R50"));
        assert!(!output.contains("R125.00"));

        let burger_row = output.find("Chicken Burger");
        let fries_row = output.find("Small Fries");
        assert!(burger_row < fries_row);

        Ok(())
    }

    #[test]
    fn menu_lists_items() -> TestResult {
        let items = [MenuItem::new("Muffin", 15), MenuItem::new("Pie", 30)];

        let output = render(|out| write_menu(out, &items, iso::ZAR))?;

        assert!(output.contains("Muffin"));
        assert!(output.contains("Pie"));
        assert!(output.contains("R30"));
        assert!(!output.contains("R30.00"));

        Ok(())
    }
}
