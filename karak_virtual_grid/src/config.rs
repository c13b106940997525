// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell geometry and buffering configuration.

use crate::Scalar;

/// Default edge length of a cell, in logical pixels.
pub const DEFAULT_CELL_SIZE: usize = 48;
/// Default gap between adjacent cells, in logical pixels.
pub const DEFAULT_MARGIN: usize = 8;
/// Default number of rows materialized above and below the viewport.
pub const DEFAULT_BUFFER_ROWS: usize = 2;

/// Geometry and buffering parameters for a [`VirtualGrid`](crate::VirtualGrid).
///
/// Cells are square. Each cell occupies `cell_size + margin` along both axes
/// (the *pitch*); rows are exactly one pitch tall.
///
/// ```rust
/// use karak_virtual_grid::GridConfig;
///
/// let config = GridConfig::<f32>::default().with_buffer_rows(4);
/// assert_eq!(config.pitch(), 56.0);
/// assert_eq!(config.buffer_rows(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig<S: Scalar> {
    cell_size: S,
    margin: S,
    buffer_rows: usize,
}

impl<S: Scalar> GridConfig<S> {
    /// Creates a configuration from explicit values.
    ///
    /// Negative sizes are clamped to zero.
    #[must_use]
    pub fn new(cell_size: S, margin: S, buffer_rows: usize) -> Self {
        Self {
            cell_size: sanitize(cell_size),
            margin: sanitize(margin),
            buffer_rows,
        }
    }

    /// Returns a copy with the given cell size.
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: S) -> Self {
        self.cell_size = sanitize(cell_size);
        self
    }

    /// Returns a copy with the given inter-cell margin.
    #[must_use]
    pub fn with_margin(mut self, margin: S) -> Self {
        self.margin = sanitize(margin);
        self
    }

    /// Returns a copy with the given number of buffer rows.
    #[must_use]
    pub const fn with_buffer_rows(mut self, buffer_rows: usize) -> Self {
        self.buffer_rows = buffer_rows;
        self
    }

    /// Edge length of a single cell.
    #[must_use]
    pub const fn cell_size(&self) -> S {
        self.cell_size
    }

    /// Gap between adjacent cells.
    #[must_use]
    pub const fn margin(&self) -> S {
        self.margin
    }

    /// Extra rows materialized on each side of the viewport.
    #[must_use]
    pub const fn buffer_rows(&self) -> usize {
        self.buffer_rows
    }

    /// Distance between the starts of adjacent cells: `cell_size + margin`.
    #[must_use]
    pub fn pitch(&self) -> S {
        self.cell_size + self.margin
    }
}

impl<S: Scalar> Default for GridConfig<S> {
    fn default() -> Self {
        Self::new(
            S::from_usize(DEFAULT_CELL_SIZE),
            S::from_usize(DEFAULT_MARGIN),
            DEFAULT_BUFFER_ROWS,
        )
    }
}

fn sanitize<S: Scalar>(value: S) -> S {
    debug_assert!(
        value.is_finite(),
        "GridConfig sizes must be finite; got {value:?}"
    );
    if value.is_sign_negative() {
        S::zero()
    } else {
        value
    }
}
