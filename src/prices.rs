//! Prices

use std::{iter::Sum, ops::Deref};

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

/// A price in whole currency units (the menu has no minor units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Price {
    value: u64,
}

impl Price {
    /// Zero price
    pub const ZERO: Price = Price { value: 0 };

    /// Creates a new Price
    pub const fn new(value: u64) -> Self {
        Price { value }
    }

    /// Price of `quantity` units at this unit price.
    ///
    /// Saturates at `u64::MAX` rather than wrapping.
    #[must_use]
    pub fn times(self, quantity: u32) -> Price {
        Price::new(self.value.saturating_mul(u64::from(quantity)))
    }

    /// Converts to [`Money`] in the given currency.
    pub fn to_money(self, currency: &'static Currency) -> Money<'static, Currency> {
        Money::from_major(i64::try_from(self.value).unwrap_or(i64::MAX), currency)
    }

    /// Formats as whole units with the currency symbol, e.g. `R125`.
    pub fn format(self, currency: &Currency) -> String {
        if currency.symbol_first {
            format!("{}{}", currency.symbol, self.value)
        } else {
            format!("{} {}", self.value, currency.symbol)
        }
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Price::new(value)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, price| {
            Price::new(acc.value.saturating_add(price.value))
        })
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    #[test]
    fn new_price() {
        let price = Price::new(1000);

        assert_eq!(price.value, 1000);
    }

    #[test]
    fn price_derefs_to_u64() {
        let price = Price { value: 100 };

        assert_eq!(*price, 100);
    }

    #[test]
    fn times_multiplies_by_quantity() {
        assert_eq!(Price::new(50).times(3), Price::new(150));
        assert_eq!(Price::new(50).times(0), Price::ZERO);
    }

    #[test]
    fn times_saturates() {
        assert_eq!(Price::new(u64::MAX).times(2), Price::new(u64::MAX));
    }

    #[test]
    fn sum_of_prices() {
        let total: Price = [Price::new(50), Price::new(25), Price::new(15)]
            .into_iter()
            .sum();

        assert_eq!(total, Price::new(90));
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        let total: Price = std::iter::empty::<Price>().sum();

        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn format_has_no_minor_digits() {
        assert_eq!(Price::new(125).format(iso::ZAR), "R125");
        assert_eq!(Price::ZERO.format(iso::ZAR), "R0");
        assert_eq!(Price::new(7).format(iso::GBP), "£7");
    }

    #[test]
    fn to_money_uses_major_units() {
        assert_eq!(
            Price::new(125).to_money(iso::ZAR),
            Money::from_minor(12_500, iso::ZAR)
        );
    }
}
