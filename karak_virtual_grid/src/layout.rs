// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-major layout of a flat index range onto fixed-size cells.
//!
//! A [`GridLayout`] folds a [`GridConfig`], an item count, and the current
//! viewport width into the numbers every other part of the crate works from:
//!
//! - `items_per_row = max(1, floor(viewport_width / pitch))`,
//! - `row_height = pitch`,
//! - `total_rows = ceil(count / items_per_row)`,
//! - `total_height = total_rows * row_height`.
//!
//! Item `i` lives in row `i / items_per_row` and column `i % items_per_row`.
//! The layout is a plain value: it is rebuilt whenever the count or the
//! viewport width changes.

use core::num::NonZeroUsize;

use crate::{GridConfig, Scalar};

/// Top-left corner of a cell, relative to the grid container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPosition<S: Scalar> {
    /// Distance from the top of the container.
    pub top: S,
    /// Distance from the left edge of the container.
    pub left: S,
}

/// The logical shape of a grid.
///
/// Two layouts with the same shape lay out every index identically in terms
/// of rows and columns; hosts re-bind anything that depends on the shape when
/// it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Number of items.
    pub count: usize,
    /// Number of cells per row (always at least one).
    pub items_per_row: NonZeroUsize,
    /// Number of rows needed for `count` items.
    pub total_rows: usize,
}

/// Derived layout for `count` items in a viewport of a given width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout<S: Scalar> {
    count: usize,
    items_per_row: NonZeroUsize,
    total_rows: usize,
    cell_size: S,
    margin: S,
    row_height: S,
}

impl<S: Scalar> GridLayout<S> {
    /// Lays out `count` items for a viewport `viewport_width` wide.
    ///
    /// A width narrower than one cell (including zero, negative, or NaN widths)
    /// still yields one item per row.
    #[must_use]
    pub fn new(config: &GridConfig<S>, count: usize, viewport_width: S) -> Self {
        let items_per_row = Self::items_per_row_for(config, viewport_width);
        Self {
            count,
            items_per_row,
            total_rows: count.div_ceil(items_per_row.get()),
            cell_size: config.cell_size(),
            margin: config.margin(),
            row_height: config.pitch(),
        }
    }

    /// Number of cells that fit in one row of a viewport `viewport_width` wide.
    ///
    /// The result is `floor(viewport_width / pitch)`, clamped to at least one.
    #[must_use]
    pub fn items_per_row_for(config: &GridConfig<S>, viewport_width: S) -> NonZeroUsize {
        let pitch = config.pitch();
        if pitch <= S::zero() {
            return NonZeroUsize::MIN;
        }
        let width = viewport_width.max(S::zero());
        NonZeroUsize::new((width / pitch).floor_to_usize()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Number of items laid out.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of cells per row.
    #[must_use]
    pub const fn items_per_row(&self) -> usize {
        self.items_per_row.get()
    }

    /// Number of rows: `ceil(count / items_per_row)`.
    #[must_use]
    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Edge length of a cell.
    #[must_use]
    pub const fn cell_size(&self) -> S {
        self.cell_size
    }

    /// Gap between cells.
    #[must_use]
    pub const fn margin(&self) -> S {
        self.margin
    }

    /// Height of one row: `cell_size + margin`.
    #[must_use]
    pub const fn row_height(&self) -> S {
        self.row_height
    }

    /// Vertical space reserved for the whole collection.
    ///
    /// This is independent of how many items are materialized, so scroll
    /// geometry always reflects the full logical size.
    #[must_use]
    pub fn total_height(&self) -> S {
        S::from_usize(self.total_rows) * self.row_height
    }

    /// The shape of this layout.
    #[must_use]
    pub const fn shape(&self) -> GridShape {
        GridShape {
            count: self.count,
            items_per_row: self.items_per_row,
            total_rows: self.total_rows,
        }
    }

    /// Row containing `index`: `index / items_per_row`.
    #[must_use]
    pub const fn row_of(&self, index: usize) -> usize {
        index / self.items_per_row.get()
    }

    /// Column of `index` within its row: `index % items_per_row`.
    #[must_use]
    pub const fn column_of(&self, index: usize) -> usize {
        index % self.items_per_row.get()
    }

    /// Position of the cell for `index`.
    ///
    /// `top = row * row_height` and `left = column * pitch + margin`. The
    /// position is defined for any index; callers only ask for indices in
    /// `0..count`.
    #[must_use]
    pub fn position_of(&self, index: usize) -> CellPosition<S> {
        debug_assert!(
            index < self.count,
            "GridLayout index out of bounds: index={index}, count={}",
            self.count
        );
        CellPosition {
            top: S::from_usize(self.row_of(index)) * self.row_height,
            left: S::from_usize(self.column_of(index)) * self.row_height + self.margin,
        }
    }
}
