// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for amount parsing and rate configuration.

use thiserror::Error;

/// Reasons an amount or a rate is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    /// The amount field is empty or whitespace.
    #[error("no amount entered")]
    Empty,
    /// The amount is not a finite decimal number.
    #[error("`{0}` is not a number")]
    NotANumber(String),
    /// The amount is zero or negative.
    #[error("amount must be greater than zero, got {0}")]
    NotPositive(f64),
    /// A price per cup that is not a finite positive number.
    #[error("price per cup must be a finite positive number, got {0}")]
    InvalidPrice(f64),
}
