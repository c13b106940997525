// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Materialized, positioned grid items.

use core::hash::Hasher;

use rustc_hash::FxHasher;

use crate::{GridLayout, Scalar};

/// Upper bound (exclusive) of [`Tint::delay_millis`].
pub const MAX_DELAY_MILLIS: u16 = 2000;

/// Deterministic cosmetic variation for one index.
///
/// Hosts use this to vary a marker's hue and the start of its animation so a
/// large grid does not look stamped. It is a pure function of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tint {
    /// Hue in degrees, `0..360`.
    pub hue_degrees: u16,
    /// Animation start delay, `0..MAX_DELAY_MILLIS`.
    pub delay_millis: u16,
}

impl Tint {
    /// Computes the tint for `index`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Both values are reduced modulo a bound that fits in u16"
    )]
    pub fn for_index(index: usize) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_usize(index);
        let hash = hasher.finish();
        Self {
            hue_degrees: (hash % 360) as u16,
            delay_millis: ((hash >> 32) % u64::from(MAX_DELAY_MILLIS)) as u16,
        }
    }
}

/// One materialized cell of the grid.
///
/// Items have no identity beyond their `index`; they are regenerated on every
/// recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedItem<S: Scalar> {
    /// Index of the item in `0..count`.
    pub index: usize,
    /// Distance from the top of the container: `row * row_height`.
    pub top: S,
    /// Distance from the left edge of the container: `column * pitch + margin`.
    pub left: S,
    /// Edge length of the cell.
    pub extent: S,
    /// Cosmetic variation for this index.
    pub tint: Tint,
}

impl<S: Scalar> RenderedItem<S> {
    /// Positions the item for `index` within `layout`.
    #[must_use]
    pub fn materialize(layout: &GridLayout<S>, index: usize) -> Self {
        let position = layout.position_of(index);
        Self {
            index,
            top: position.top,
            left: position.left,
            extent: layout.cell_size(),
            tint: Tint::for_index(index),
        }
    }

    /// The cell's rectangle in container coordinates.
    #[cfg(feature = "kurbo")]
    #[must_use]
    pub fn bounds(&self) -> kurbo::Rect {
        let x0 = self.left.to_f64();
        let y0 = self.top.to_f64();
        let extent = self.extent.to_f64();
        kurbo::Rect::new(x0, y0, x0 + extent, y0 + extent)
    }
}
