// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display formatting for counts and amounts.

/// Formats `value` with comma thousands separators: `10000` becomes `"10,000"`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats a dirham amount rounded half away from zero to whole dirhams: `1916.25` becomes `"1916"`.
#[must_use]
pub fn whole_dirhams(amount: f64) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Rounded display value; `as` saturates out-of-range amounts"
    )]
    let rounded = amount.round() as u64;
    rounded.to_string()
}
