// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Karak Calculator: how many cups of karak chai is that?
//!
//! Converts an amount in UAE dirhams into whole cups of karak at a fixed
//! average price, and supplies the text shown around the result: the
//! thousands-grouped count, a verdict that scales with the number of cups,
//! the price the result is based on, and the fun facts.
//!
//! ```rust
//! use karak_calculator::{KarakCalculator, KarakRate};
//!
//! let mut calc = KarakCalculator::new(KarakRate::default());
//! calc.set_input("30");
//! assert_eq!(calc.calculate(), Ok(20));
//! assert_eq!(
//!     calc.result_card().map(|card| card.message()),
//!     Some("Enough for the whole family! \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}")
//! );
//! ```
//!
//! The number of cups is what a host feeds to a virtualized grid to draw the
//! cup collection; see [`KarakCalculator::collection_count`].

mod calculator;
mod error;
mod format;
mod message;
mod rate;

pub use calculator::{KarakCalculator, ORIGIN_FACT, ResultCard, parse_amount};
pub use error::CalculatorError;
pub use format::{group_thousands, whole_dirhams};
pub use message::{Occasion, humorous_message};
pub use rate::{DEFAULT_DAILY_CUPS, DEFAULT_PRICE_AED, KarakRate};
