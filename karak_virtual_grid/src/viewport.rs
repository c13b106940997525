// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only access to viewport geometry.
//!
//! The grid never reads window or document state directly. Hosts implement
//! [`ViewportQuery`] over whatever surface they render into (a browser window,
//! a terminal, a scroll view), and the grid samples it whenever it recomputes.

use core::cell::Cell;

use crate::Scalar;

/// Width and height of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize<S: Scalar> {
    /// Visible width.
    pub width: S,
    /// Visible height.
    pub height: S,
}

/// A snapshot of everything the grid reads from the environment at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSample<S: Scalar> {
    /// Visible width, used for the number of items per row.
    pub width: S,
    /// Visible height.
    pub height: S,
    /// Current scroll position of the page.
    pub scroll_offset: S,
    /// Distance from the top of the page to the top of the grid container.
    pub container_offset: S,
}

/// Environment geometry, sampled on demand.
///
/// Implementations must be cheap and side-effect free; the grid may call them
/// on every scroll event.
pub trait ViewportQuery {
    /// Scalar type of the reported geometry.
    type Scalar: Scalar;

    /// Current viewport width and height.
    fn viewport_size(&self) -> ViewportSize<Self::Scalar>;

    /// Current scroll offset from the top of the page.
    fn scroll_offset(&self) -> Self::Scalar;

    /// Offset of the grid container from the top of the page.
    fn container_offset(&self) -> Self::Scalar;

    /// Reads all geometry at once.
    fn sample(&self) -> ViewportSample<Self::Scalar> {
        let ViewportSize { width, height } = self.viewport_size();
        ViewportSample {
            width,
            height,
            scroll_offset: self.scroll_offset(),
            container_offset: self.container_offset(),
        }
    }
}

/// An in-memory viewport whose geometry is set explicitly.
///
/// Setters take `&self` so a viewport shared with a mounted grid through an
/// `Rc` can still be scrolled and resized by the host or a test.
#[derive(Debug, Clone)]
pub struct FixedViewport<S: Scalar> {
    size: Cell<ViewportSize<S>>,
    scroll_offset: Cell<S>,
    container_offset: Cell<S>,
}

impl<S: Scalar> FixedViewport<S> {
    /// Creates a viewport of the given size, scrolled to the top, with the
    /// container at the top of the page.
    #[must_use]
    pub fn new(width: S, height: S) -> Self {
        Self {
            size: Cell::new(ViewportSize { width, height }),
            scroll_offset: Cell::new(S::zero()),
            container_offset: Cell::new(S::zero()),
        }
    }

    /// Returns a copy with the container placed `offset` below the top of the page.
    #[must_use]
    pub fn with_container_offset(self, offset: S) -> Self {
        self.container_offset.set(offset);
        self
    }

    /// Sets the scroll offset.
    pub fn scroll_to(&self, offset: S) {
        self.scroll_offset.set(offset);
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&self, delta: S) {
        self.scroll_offset.set(self.scroll_offset.get() + delta);
    }

    /// Sets the viewport size.
    pub fn resize(&self, width: S, height: S) {
        self.size.set(ViewportSize { width, height });
    }

    /// Moves the grid container within the page.
    pub fn set_container_offset(&self, offset: S) {
        self.container_offset.set(offset);
    }
}

impl<S: Scalar> ViewportQuery for FixedViewport<S> {
    type Scalar = S;

    fn viewport_size(&self) -> ViewportSize<S> {
        self.size.get()
    }

    fn scroll_offset(&self) -> S {
        self.scroll_offset.get()
    }

    fn container_offset(&self) -> S {
        self.container_offset.get()
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedViewport, ViewportQuery, ViewportSample};

    #[test]
    fn sample_reflects_setters() {
        let viewport = FixedViewport::new(500.0_f32, 800.0).with_container_offset(120.0);
        viewport.scroll_to(40.0);
        viewport.scroll_by(10.0);
        viewport.resize(320.0, 640.0);
        assert_eq!(
            viewport.sample(),
            ViewportSample {
                width: 320.0,
                height: 640.0,
                scroll_offset: 50.0,
                container_offset: 120.0,
            }
        );
    }
}
