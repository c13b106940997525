// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prices and the amount-to-cups conversion.

use crate::CalculatorError;

/// Average price of a cup of karak chai in the UAE, in dirhams.
pub const DEFAULT_PRICE_AED: f64 = 1.5;

/// Cups of karak the average UAE resident drinks per day.
pub const DEFAULT_DAILY_CUPS: f64 = 3.5;

const DAYS_PER_YEAR: f64 = 365.0;

/// Pricing used to turn dirhams into cups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KarakRate {
    price_aed: f64,
    daily_cups: f64,
}

impl KarakRate {
    /// Creates a rate with the given price per cup and the default daily consumption.
    pub fn new(price_aed: f64) -> Result<Self, CalculatorError> {
        Self::default().with_price(price_aed)
    }

    /// Returns a copy with a different price per cup.
    pub fn with_price(mut self, price_aed: f64) -> Result<Self, CalculatorError> {
        if !price_aed.is_finite() || price_aed <= 0.0 {
            return Err(CalculatorError::InvalidPrice(price_aed));
        }
        self.price_aed = price_aed;
        Ok(self)
    }

    /// Returns a copy with a different daily consumption figure.
    ///
    /// Negative values are clamped to zero.
    #[must_use]
    pub fn with_daily_cups(mut self, daily_cups: f64) -> Self {
        self.daily_cups = daily_cups.max(0.0);
        self
    }

    /// Price of one cup, in dirhams.
    #[must_use]
    pub const fn price_aed(&self) -> f64 {
        self.price_aed
    }

    /// Average cups per day.
    #[must_use]
    pub const fn daily_cups(&self) -> f64 {
        self.daily_cups
    }

    /// Whole cups `amount_aed` buys: `floor(amount / price)`.
    ///
    /// Amounts are expected to be validated already (see
    /// [`parse_amount`](crate::parse_amount)); a negative or NaN amount buys
    /// nothing, and the result saturates at `u64::MAX`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Float-to-int `as` casts saturate, mapping NaN and negatives to zero"
    )]
    pub fn cups_for(&self, amount_aed: f64) -> u64 {
        (amount_aed / self.price_aed).floor() as u64
    }

    /// What a year of average consumption costs: `price * daily_cups * 365`.
    #[must_use]
    pub fn annual_spend(&self) -> f64 {
        self.price_aed * self.daily_cups * DAYS_PER_YEAR
    }
}

impl Default for KarakRate {
    fn default() -> Self {
        Self {
            price_aed: DEFAULT_PRICE_AED,
            daily_cups: DEFAULT_DAILY_CUPS,
        }
    }
}
