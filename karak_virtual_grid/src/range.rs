// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible range computation.

use core::ops::Range;

use crate::{GridLayout, Scalar, ViewportSample};

/// The half-open index interval `[start, end)` that should be materialized.
///
/// Always satisfies `start <= end <= count` and
/// `start_row <= end_row <= total_rows` for the layout it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VisibleRange {
    /// First materialized index (inclusive).
    pub start: usize,
    /// One past the last materialized index (exclusive).
    pub end: usize,
    /// First materialized row (inclusive).
    pub start_row: usize,
    /// One past the last materialized row (exclusive).
    pub end_row: usize,
}

impl VisibleRange {
    /// The empty range at the start of the collection.
    pub const EMPTY: Self = Self {
        start: 0,
        end: 0,
        start_row: 0,
        end_row: 0,
    };

    /// Returns `true` if no items are materialized.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of materialized items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if `index` is materialized.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// The materialized indices.
    #[must_use]
    pub const fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Computes which indices to materialize for a viewport.
///
/// - `viewport_start = max(0, scroll_offset - container_offset)`
/// - `viewport_end = viewport_start + viewport_height`
/// - `start_row = max(0, floor(viewport_start / row_height) - buffer_rows)`
/// - `end_row = min(total_rows, ceil(viewport_end / row_height) + buffer_rows)`
/// - `start = start_row * items_per_row`, `end = min(count, end_row * items_per_row)`
///
/// When the viewport lies entirely below the content the start row is pulled
/// down to `end_row`, so the range is empty rather than inverted.
///
/// The work done is constant in `count`; the number of indices in the result
/// is at most `items_per_row * (ceil(viewport_height / row_height) + 1 + 2 * buffer_rows)`.
///
/// An empty layout, or one whose rows have no height, yields [`VisibleRange::EMPTY`].
#[must_use]
pub fn compute_visible_range<S: Scalar>(
    layout: &GridLayout<S>,
    sample: &ViewportSample<S>,
    buffer_rows: usize,
) -> VisibleRange {
    let row_height = layout.row_height();
    if layout.is_empty() || row_height <= S::zero() {
        return VisibleRange::EMPTY;
    }

    let viewport_start = (sample.scroll_offset - sample.container_offset).max(S::zero());
    let viewport_end = viewport_start + sample.height.max(S::zero());

    let total_rows = layout.total_rows();
    let end_row = (viewport_end / row_height)
        .ceil_to_usize()
        .saturating_add(buffer_rows)
        .min(total_rows);
    let start_row = (viewport_start / row_height)
        .floor_to_usize()
        .saturating_sub(buffer_rows)
        .min(end_row);

    let per_row = layout.items_per_row();
    let end = end_row.saturating_mul(per_row).min(layout.count());
    let start = start_row.saturating_mul(per_row).min(end);

    VisibleRange {
        start,
        end,
        start_row,
        end_row,
    }
}
