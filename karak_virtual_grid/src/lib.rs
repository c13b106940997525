// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Karak Virtual Grid: viewport-driven virtualization for very large uniform grids.
//!
//! This crate renders a collection of `count` identical markers (tens of
//! thousands is routine) as a row-major grid of fixed-size cells, while only
//! ever materializing the cells near the viewport. The container always
//! reserves the height of the *whole* collection, so scrollbars and scroll
//! offsets behave as if every cell existed.
//!
//! The core concepts are:
//!
//! - [`GridConfig`]: cell size, margin, and the number of buffer rows kept
//!   above and below the viewport.
//! - [`GridLayout`]: items per row (derived from the viewport width and never
//!   less than one), row height, total rows, and total height for a count.
//! - [`compute_visible_range`]: given a layout and a [`ViewportSample`], the
//!   half-open [`VisibleRange`] of indices to materialize. Its cost and output
//!   size are independent of `count`.
//! - [`RenderedItem`]: a positioned cell with a deterministic per-index [`Tint`].
//! - [`ViewportQuery`]: the host-provided accessor for viewport size, scroll
//!   offset, and container offset. [`FixedViewport`] is an in-memory version.
//! - [`SignalHub`] and [`Subscription`]: scroll/resize notifications with
//!   scope-bound listener registration.
//! - [`VirtualGrid`]: the renderer tying it together. It subscribes on mount,
//!   recomputes on every signal, re-binds when its [`GridShape`] changes, and
//!   releases its subscriptions on unmount or drop.
//!
//! This crate does not know about glyphs, colors, or any particular UI
//! framework. Host frameworks are responsible for:
//!
//! - Implementing [`ViewportQuery`] over their surface.
//! - Emitting [`ViewportSignal::Scroll`] and [`ViewportSignal::Resize`] on the hub.
//! - Sizing the container to [`GridFrame::container_height`] and drawing each
//!   [`RenderedItem`] at its `top`/`left` offset.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::rc::Rc;
//! use karak_virtual_grid::{FixedViewport, GridConfig, SignalHub, ViewportSignal, VirtualGrid};
//!
//! // A 500×800 viewport over 10 000 cups.
//! let viewport = Rc::new(FixedViewport::new(500.0_f64, 800.0));
//! let hub = SignalHub::new();
//! let mut grid = VirtualGrid::new(GridConfig::default(), Rc::clone(&viewport));
//! grid.set_count(10_000);
//! grid.mount(&hub);
//!
//! // 48px cells with 8px margins: floor(500 / 56) = 8 per row, 1250 rows.
//! let frame = grid.frame();
//! assert_eq!(grid.layout().items_per_row(), 8);
//! assert_eq!(frame.container_height, 1250.0 * 56.0);
//! assert!(frame.items.len() <= 8 * (15 + 2 * 2));
//!
//! // The host scrolls and notifies the grid.
//! viewport.scroll_by(2_800.0);
//! hub.emit(ViewportSignal::Scroll);
//! assert_eq!(grid.visible_range().start_row, 48);
//! ```
//!
//! ## Pure computation
//!
//! The layout and range math is usable without the renderer:
//!
//! ```rust
//! use karak_virtual_grid::{GridConfig, GridLayout, ViewportSample, compute_visible_range};
//!
//! let config = GridConfig::<f32>::default();
//! let layout = GridLayout::new(&config, 1_000, 500.0);
//! let sample = ViewportSample { width: 500.0, height: 112.0, scroll_offset: 0.0, container_offset: 0.0 };
//! let range = compute_visible_range(&layout, &sample, config.buffer_rows());
//! assert_eq!(range.indices(), 0..32);
//! ```
//!
//! Logging of mount, re-bind, and recompute events is available through the
//! `tracing` feature.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod grid;
mod item;
mod layout;
mod logging;
mod range;
mod scalar;
mod signal;
mod viewport;

pub use config::{DEFAULT_BUFFER_ROWS, DEFAULT_CELL_SIZE, DEFAULT_MARGIN, GridConfig};
pub use grid::{GridFrame, VirtualGrid};
pub use item::{MAX_DELAY_MILLIS, RenderedItem, Tint};
pub use layout::{CellPosition, GridLayout, GridShape};
pub use range::{VisibleRange, compute_visible_range};
pub use scalar::Scalar;
pub use signal::{SignalHub, Subscription, ViewportSignal};
pub use viewport::{FixedViewport, ViewportQuery, ViewportSample, ViewportSize};
