// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric abstraction for grid geometry.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Floating-point scalar used for cell sizes, offsets, and viewport geometry.
///
/// Implemented for `f32` and `f64`. Rounding helpers are provided by the trait
/// rather than by `f32::floor`/`f64::ceil` so the crate stays `no_std` without
/// pulling in `libm`: every rounding the grid needs is of a value that has
/// already been clamped to be non-negative.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// The additive identity.
    fn zero() -> Self;

    /// Converts an index or count into this scalar type.
    ///
    /// Very large values lose precision in `f32`; that is acceptable for
    /// pixel geometry.
    fn from_usize(value: usize) -> Self;

    /// Widens this value to `f64`.
    fn to_f64(self) -> f64;

    /// Returns `true` if this value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Returns `true` if the sign bit is set (including `-0.0`).
    fn is_sign_negative(self) -> bool;

    /// Returns the larger of `self` and `other`, ignoring NaN.
    fn max(self, other: Self) -> Self;

    /// Returns the smaller of `self` and `other`, ignoring NaN.
    fn min(self, other: Self) -> Self;

    /// `floor(self)` clamped into `0..=usize::MAX`. NaN maps to `0`.
    fn floor_to_usize(self) -> usize;

    /// `ceil(self)` clamped into `0..=usize::MAX`. NaN maps to `0`.
    fn ceil_to_usize(self) -> usize;
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline(always)]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            #[allow(
                clippy::cast_precision_loss,
                reason = "Counts beyond the mantissa only occur far outside any real viewport"
            )]
            fn from_usize(value: usize) -> Self {
                value as Self
            }

            #[inline]
            #[allow(
                trivial_numeric_casts,
                reason = "The macro also expands for f64, where this cast is the identity"
            )]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            #[inline]
            fn is_sign_negative(self) -> bool {
                <$ty>::is_sign_negative(self)
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                <$ty>::max(self, other)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                <$ty>::min(self, other)
            }

            #[inline]
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "Float-to-int `as` casts saturate; truncation of a non-negative value is floor"
            )]
            fn floor_to_usize(self) -> usize {
                self as usize
            }

            #[inline]
            fn ceil_to_usize(self) -> usize {
                let floor = self.floor_to_usize();
                if Self::from_usize(floor) < self {
                    floor.saturating_add(1)
                } else {
                    floor
                }
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn rounding_clamps_into_usize() {
        assert_eq!(Scalar::floor_to_usize(2.9_f32), 2);
        assert_eq!(Scalar::ceil_to_usize(2.1_f32), 3);
        assert_eq!(Scalar::ceil_to_usize(2.0_f64), 2);
        assert_eq!(Scalar::floor_to_usize(-3.5_f64), 0);
        assert_eq!(Scalar::ceil_to_usize(-0.5_f64), 0);
        assert_eq!(Scalar::floor_to_usize(f64::NAN), 0);
        assert_eq!(Scalar::ceil_to_usize(f64::INFINITY), usize::MAX);
    }

    #[test]
    fn max_ignores_nan() {
        assert_eq!(Scalar::max(f32::NAN, 0.0), 0.0);
        assert_eq!(Scalar::min(5.0_f64, f64::NAN), 5.0);
    }
}
