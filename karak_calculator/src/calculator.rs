// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input and result state of the calculator card.

use tracing::{debug, info};

use crate::{CalculatorError, KarakRate, Occasion, group_thousands, whole_dirhams};

/// Origin blurb shown in the fun facts dialog.
pub const ORIGIN_FACT: &str = "Karak chai originated from the Indian subcontinent and has become an integral part of UAE culture, bringing people together across all walks of life.";

/// Parses the text of the amount field.
///
/// Accepts any finite decimal number greater than zero, ignoring surrounding
/// whitespace.
pub fn parse_amount(input: &str) -> Result<f64, CalculatorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CalculatorError::Empty);
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| CalculatorError::NotANumber(trimmed.to_owned()))?;
    if !amount.is_finite() {
        return Err(CalculatorError::NotANumber(trimmed.to_owned()));
    }
    if amount <= 0.0 {
        return Err(CalculatorError::NotPositive(amount));
    }
    Ok(amount)
}

/// Everything the result panel displays for one calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    /// Number of cups.
    pub cups: u64,
    /// `cups` with thousands separators.
    pub formatted_cups: String,
    /// How the number of cups is described.
    pub occasion: Occasion,
    /// The price the result is based on, as displayed.
    pub price_basis: String,
}

impl ResultCard {
    /// Builds the card for `cups` at `rate`.
    #[must_use]
    pub fn new(cups: u64, rate: &KarakRate) -> Self {
        Self {
            cups,
            formatted_cups: group_thousands(cups),
            occasion: Occasion::for_cups(cups),
            price_basis: format!("Based on AED {} per cup", rate.price_aed()),
        }
    }

    /// The verdict message for this card.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.occasion.message()
    }
}

/// The calculator: an amount field plus the last computed number of cups.
#[derive(Debug, Clone, Default)]
pub struct KarakCalculator {
    rate: KarakRate,
    input: String,
    result: Option<u64>,
}

impl KarakCalculator {
    /// Creates a calculator with an empty field.
    #[must_use]
    pub fn new(rate: KarakRate) -> Self {
        Self {
            rate,
            input: String::new(),
            result: None,
        }
    }

    /// The rate in use.
    #[must_use]
    pub const fn rate(&self) -> &KarakRate {
        &self.rate
    }

    /// Current contents of the amount field.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the contents of the amount field. The last result is kept.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Returns `true` when there is something to calculate.
    #[must_use]
    pub fn can_calculate(&self) -> bool {
        !self.input.is_empty()
    }

    /// Returns `true` when there is something to reset.
    #[must_use]
    pub fn can_reset(&self) -> bool {
        !self.input.is_empty() || self.result.is_some()
    }

    /// Converts the field's amount into cups and stores the result.
    ///
    /// On error the previous result is left untouched.
    pub fn calculate(&mut self) -> Result<u64, CalculatorError> {
        let amount = parse_amount(&self.input).inspect_err(|err| {
            debug!(input = %self.input, %err, "amount rejected");
        })?;
        let cups = self.rate.cups_for(amount);
        info!(amount, cups, "calculated karak count");
        self.result = Some(cups);
        Ok(cups)
    }

    /// Clears the field and the result.
    pub fn reset(&mut self) {
        self.input.clear();
        self.result = None;
    }

    /// The last computed number of cups, if any.
    #[must_use]
    pub const fn result(&self) -> Option<u64> {
        self.result
    }

    /// The result panel for the last calculation, if any.
    #[must_use]
    pub fn result_card(&self) -> Option<ResultCard> {
        self.result.map(|cups| ResultCard::new(cups, &self.rate))
    }

    /// Number of markers to show in the cup collection.
    ///
    /// The collection is only shown for a positive result.
    #[must_use]
    pub fn collection_count(&self) -> Option<u64> {
        self.result.filter(|&cups| cups > 0)
    }

    /// The annual-consumption fun fact for the current rate.
    #[must_use]
    pub fn annual_fact(&self) -> String {
        format!(
            "The average person in the UAE drinks about 3-4 cups of karak per day. \
             That's roughly AED {} worth of karak annually!",
            whole_dirhams(self.rate.annual_spend())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{KarakCalculator, parse_amount};
    use crate::{CalculatorError, KarakRate, Occasion};

    #[test]
    fn parse_rejects_empty_garbage_and_non_positive() {
        assert_eq!(parse_amount("  "), Err(CalculatorError::Empty));
        assert_eq!(
            parse_amount("lots"),
            Err(CalculatorError::NotANumber("lots".into()))
        );
        assert_eq!(
            parse_amount("NaN"),
            Err(CalculatorError::NotANumber("NaN".into()))
        );
        assert_eq!(parse_amount("0"), Err(CalculatorError::NotPositive(0.0)));
        assert_eq!(parse_amount("-5"), Err(CalculatorError::NotPositive(-5.0)));
        assert_eq!(parse_amount(" 12.75 "), Ok(12.75));
    }

    #[test]
    fn calculate_then_reset() {
        let mut calc = KarakCalculator::default();
        assert!(!calc.can_calculate());
        assert!(!calc.can_reset());

        calc.set_input("15000");
        assert!(calc.can_calculate());
        assert_eq!(calc.calculate(), Ok(10_000));
        assert_eq!(calc.collection_count(), Some(10_000));

        let card = calc.result_card().unwrap();
        assert_eq!(card.formatted_cups, "10,000");
        assert_eq!(card.occasion, Occasion::ChaiMogul);
        assert_eq!(card.price_basis, "Based on AED 1.5 per cup");

        calc.reset();
        assert_eq!(calc.input(), "");
        assert_eq!(calc.result(), None);
        assert!(!calc.can_reset());
    }

    #[test]
    fn failed_calculation_keeps_previous_result() {
        let mut calc = KarakCalculator::new(KarakRate::default());
        calc.set_input("3");
        assert_eq!(calc.calculate(), Ok(2));

        calc.set_input("abc");
        assert!(calc.calculate().is_err());
        assert_eq!(calc.result(), Some(2));
        assert!(calc.can_reset());
    }

    #[test]
    fn zero_cups_shows_no_collection() {
        let mut calc = KarakCalculator::default();
        calc.set_input("1");
        assert_eq!(calc.calculate(), Ok(0));
        assert_eq!(calc.result(), Some(0));
        assert_eq!(calc.collection_count(), None);
        assert_eq!(
            calc.result_card().map(|card| card.message()),
            Some(Occasion::NotASip.message())
        );
    }

    #[test]
    fn annual_fact_uses_the_rate() {
        let calc = KarakCalculator::default();
        assert!(calc.annual_fact().contains("AED 1916 worth"));
    }
}
