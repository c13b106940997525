// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The virtualized grid renderer.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::logging::{debug, trace};
use crate::{
    GridConfig, GridLayout, GridShape, RenderedItem, Scalar, SignalHub, Subscription,
    ViewportQuery, ViewportSample, ViewportSignal, VisibleRange, compute_visible_range,
};

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFrame<S: Scalar> {
    /// Height the container must reserve for the whole collection.
    pub container_height: S,
    /// The materialized index range.
    pub range: VisibleRange,
    /// One item per index in `range`, in index order.
    pub items: Vec<RenderedItem<S>>,
}

/// State shared between the grid and its signal listeners.
#[derive(Debug)]
struct GridState<S: Scalar> {
    config: GridConfig<S>,
    layout: GridLayout<S>,
    range: VisibleRange,
}

impl<S: Scalar> GridState<S> {
    fn relayout(&mut self, count: usize, width: S) {
        let layout = GridLayout::new(&self.config, count, width);
        if layout.shape() != self.layout.shape() {
            debug!(
                count,
                items_per_row = layout.items_per_row(),
                total_rows = layout.total_rows(),
                "grid layout changed"
            );
        }
        self.layout = layout;
    }

    fn recompute(&mut self, sample: &ViewportSample<S>) {
        self.range = compute_visible_range(&self.layout, sample, self.config.buffer_rows());
        trace!(
            start = self.range.start,
            end = self.range.end,
            "visible range recomputed"
        );
    }

    fn on_signal(&mut self, signal: ViewportSignal, sample: &ViewportSample<S>) {
        if signal == ViewportSignal::Resize {
            self.relayout(self.layout.count(), sample.width);
        }
        self.recompute(sample);
    }
}

/// Live scroll and resize subscriptions, tagged with the shape they were bound for.
#[derive(Debug)]
struct Binding {
    shape: GridShape,
    _scroll: Subscription,
    _resize: Subscription,
}

impl Binding {
    fn attach<V>(
        hub: &SignalHub,
        shape: GridShape,
        state: &Rc<RefCell<GridState<V::Scalar>>>,
        viewport: &Rc<V>,
    ) -> Self
    where
        V: ViewportQuery + 'static,
    {
        let listener = |signal: ViewportSignal| {
            let state = Rc::clone(state);
            let viewport = Rc::clone(viewport);
            move || state.borrow_mut().on_signal(signal, &viewport.sample())
        };
        Self {
            shape,
            _scroll: hub.listen(ViewportSignal::Scroll, listener(ViewportSignal::Scroll)),
            _resize: hub.listen(ViewportSignal::Resize, listener(ViewportSignal::Resize)),
        }
    }
}

/// Renders a grid of `count` uniform cells, materializing only what is near the viewport.
///
/// The grid:
/// - lays out `count` items row-major over cells of a fixed pitch, with the
///   number of items per row following the viewport width,
/// - reserves the full [`container_height`](Self::container_height) regardless
///   of how much is materialized,
/// - recomputes its [`VisibleRange`] on mount and on every scroll or resize
///   signal, reading geometry through a [`ViewportQuery`],
/// - produces one [`RenderedItem`] per index in that range.
///
/// While mounted with a non-zero count it holds one scroll and one resize
/// [`Subscription`] on the host's [`SignalHub`]. They are re-bound whenever
/// the grid's [`GridShape`] changes, and released by [`unmount`](Self::unmount),
/// by [`set_count(0)`](Self::set_count), and when the grid is dropped.
///
/// ```rust
/// use std::rc::Rc;
/// use karak_virtual_grid::{FixedViewport, GridConfig, SignalHub, ViewportSignal, VirtualGrid};
///
/// let viewport = Rc::new(FixedViewport::new(500.0_f32, 560.0));
/// let hub = SignalHub::new();
///
/// let mut grid = VirtualGrid::new(GridConfig::default(), Rc::clone(&viewport));
/// grid.set_count(10_000);
/// grid.mount(&hub);
///
/// let frame = grid.frame();
/// assert_eq!(frame.range.start, 0);
/// assert!(frame.items.len() < 200);
///
/// viewport.scroll_to(56_000.0);
/// hub.emit(ViewportSignal::Scroll);
/// assert!(grid.visible_range().start > 0);
/// ```
pub struct VirtualGrid<V: ViewportQuery + 'static> {
    state: Rc<RefCell<GridState<V::Scalar>>>,
    viewport: Rc<V>,
    hub: Option<SignalHub>,
    binding: Option<Binding>,
}

impl<V: ViewportQuery + 'static> VirtualGrid<V> {
    /// Creates an unmounted, empty grid.
    #[must_use]
    pub fn new(config: GridConfig<V::Scalar>, viewport: Rc<V>) -> Self {
        let width = viewport.viewport_size().width;
        let layout = GridLayout::new(&config, 0, width);
        Self {
            state: Rc::new(RefCell::new(GridState {
                config,
                layout,
                range: VisibleRange::EMPTY,
            })),
            viewport,
            hub: None,
            binding: None,
        }
    }

    /// The grid's configuration.
    #[must_use]
    pub fn config(&self) -> GridConfig<V::Scalar> {
        self.state.borrow().config
    }

    /// The viewport the grid samples.
    #[must_use]
    pub fn viewport(&self) -> &Rc<V> {
        &self.viewport
    }

    /// Number of items in the collection.
    #[must_use]
    pub fn count(&self) -> usize {
        self.state.borrow().layout.count()
    }

    /// The current layout.
    #[must_use]
    pub fn layout(&self) -> GridLayout<V::Scalar> {
        self.state.borrow().layout
    }

    /// The most recently computed visible range.
    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        self.state.borrow().range
    }

    /// Height the container reserves: `total_rows * row_height`.
    #[must_use]
    pub fn container_height(&self) -> V::Scalar {
        self.state.borrow().layout.total_height()
    }

    /// Returns `true` between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.hub.is_some()
    }

    /// Returns `true` while the grid holds its viewport subscriptions.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Activates the grid against `hub`.
    ///
    /// Samples the viewport, lays out, recomputes the visible range, and
    /// subscribes to scroll and resize signals. An empty grid does not
    /// subscribe until it is given a non-zero count. Mounting an already
    /// mounted grid moves it to `hub`.
    pub fn mount(&mut self, hub: &SignalHub) {
        self.binding = None;
        self.hub = Some(hub.clone());
        debug!(count = self.count(), "grid mounted");
        self.recompute();
    }

    /// Deactivates the grid, releasing its subscriptions.
    ///
    /// The last visible range is kept, so a host may still draw the final frame.
    pub fn unmount(&mut self) {
        if self.hub.take().is_some() {
            self.binding = None;
            debug!(count = self.count(), "grid unmounted");
        }
    }

    /// Replaces the collection count.
    ///
    /// The previous visible range is discarded. When mounted, the layout and
    /// range are recomputed immediately and the subscriptions follow the new
    /// shape; a count of zero releases them.
    pub fn set_count(&mut self, count: usize) {
        let width = self.viewport.viewport_size().width;
        {
            let mut state = self.state.borrow_mut();
            state.range = VisibleRange::EMPTY;
            state.relayout(count, width);
        }
        if self.is_mounted() {
            self.recompute();
        }
    }

    /// Re-samples the viewport, re-lays out, and recomputes the visible range.
    ///
    /// Signal listeners do this on their own; hosts call it when geometry
    /// changed without a signal (for example, the container moved). Does
    /// nothing on an unmounted grid.
    pub fn recompute(&mut self) {
        if !self.is_mounted() {
            return;
        }
        let sample = self.viewport.sample();
        {
            let mut state = self.state.borrow_mut();
            let count = state.layout.count();
            state.relayout(count, sample.width);
            state.recompute(&sample);
        }
        self.sync_binding();
    }

    /// Runs one render pass.
    ///
    /// Re-binds the subscriptions if the shape changed since they were bound
    /// (for example, after a resize changed the number of items per row), then
    /// materializes the visible range.
    pub fn frame(&mut self) -> GridFrame<V::Scalar> {
        self.sync_binding();
        let state = self.state.borrow();
        GridFrame {
            container_height: state.layout.total_height(),
            range: state.range,
            items: state
                .range
                .indices()
                .map(|index| RenderedItem::materialize(&state.layout, index))
                .collect(),
        }
    }

    /// Materializes the current visible range without touching subscriptions.
    pub fn items(&self) -> impl Iterator<Item = RenderedItem<V::Scalar>> + use<V> {
        let (layout, range) = {
            let state = self.state.borrow();
            (state.layout, state.range)
        };
        range
            .indices()
            .map(move |index| RenderedItem::materialize(&layout, index))
    }

    fn sync_binding(&mut self) {
        let Some(hub) = &self.hub else {
            self.binding = None;
            return;
        };
        let shape = self.state.borrow().layout.shape();
        if shape.count == 0 {
            if self.binding.take().is_some() {
                debug!("grid emptied; subscriptions released");
            }
            return;
        }
        if self
            .binding
            .as_ref()
            .is_some_and(|binding| binding.shape == shape)
        {
            return;
        }
        // Release the old listeners before attaching the new ones.
        self.binding = None;
        debug!(
            count = shape.count,
            items_per_row = shape.items_per_row.get(),
            total_rows = shape.total_rows,
            "grid subscriptions bound"
        );
        self.binding = Some(Binding::attach(hub, shape, &self.state, &self.viewport));
    }
}

impl<V: ViewportQuery + 'static> fmt::Debug for VirtualGrid<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("VirtualGrid")
            .field("layout", &state.layout)
            .field("range", &state.range)
            .field("mounted", &self.is_mounted())
            .field("bound", &self.is_bound())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;

    use super::VirtualGrid;
    use crate::{FixedViewport, GridConfig, SignalHub, ViewportSignal, VisibleRange};

    fn setup(
        count: usize,
        width: f32,
        height: f32,
    ) -> (Rc<FixedViewport<f32>>, SignalHub, VirtualGrid<FixedViewport<f32>>) {
        let viewport = Rc::new(FixedViewport::new(width, height));
        let hub = SignalHub::new();
        let mut grid = VirtualGrid::new(GridConfig::default(), Rc::clone(&viewport));
        grid.set_count(count);
        grid.mount(&hub);
        (viewport, hub, grid)
    }

    fn listeners(hub: &SignalHub) -> usize {
        ViewportSignal::ALL
            .iter()
            .map(|signal| hub.listener_count(*signal))
            .sum()
    }

    #[test]
    fn empty_grid_renders_nothing_and_does_not_subscribe() {
        let (_viewport, hub, mut grid) = setup(0, 500.0, 800.0);
        let frame = grid.frame();
        assert_eq!(frame.container_height, 0.0);
        assert!(frame.items.is_empty());
        assert!(grid.is_mounted());
        assert!(!grid.is_bound());
        assert_eq!(listeners(&hub), 0);
    }

    #[test]
    fn single_item_sits_at_the_margin() {
        let (_viewport, _hub, mut grid) = setup(1, 500.0, 800.0);
        let frame = grid.frame();
        assert_eq!(frame.items.len(), 1);
        assert_eq!(frame.items[0].index, 0);
        assert_eq!((frame.items[0].top, frame.items[0].left), (0.0, 8.0));
        assert_eq!(frame.container_height, 56.0);
    }

    #[test]
    fn mount_subscribes_once_per_signal() {
        let (_viewport, hub, grid) = setup(100, 500.0, 800.0);
        assert!(grid.is_bound());
        assert_eq!(hub.listener_count(ViewportSignal::Scroll), 1);
        assert_eq!(hub.listener_count(ViewportSignal::Resize), 1);
    }

    #[test]
    fn scroll_signal_moves_the_range() {
        let (viewport, hub, grid) = setup(10_000, 500.0, 560.0);
        assert_eq!(grid.visible_range().start, 0);

        // Row 100 at the top of the viewport; two buffer rows above it.
        viewport.scroll_to(5600.0);
        assert_eq!(hub.emit(ViewportSignal::Scroll), 1);
        let range = grid.visible_range();
        assert_eq!(range.start_row, 98);
        assert_eq!(range.start, 98 * 8);
        assert_eq!(range.end_row, 112);
    }

    #[test]
    fn resize_signal_relayouts_and_frame_rebinds() {
        let (viewport, hub, mut grid) = setup(100, 500.0, 800.0);
        assert_eq!(grid.layout().items_per_row(), 8);
        let before = grid.container_height();

        viewport.resize(250.0, 800.0);
        hub.emit(ViewportSignal::Resize);
        assert_eq!(grid.layout().items_per_row(), 4);
        assert!(grid.container_height() > before);

        let frame = grid.frame();
        assert_eq!(frame.container_height, 25.0 * 56.0);
        assert_eq!(listeners(&hub), 2);
        assert!(grid.is_bound());
    }

    #[test]
    fn set_count_resets_and_rebinds() {
        let (_viewport, hub, mut grid) = setup(100, 500.0, 800.0);
        grid.set_count(5000);
        assert_eq!(grid.count(), 5000);
        assert_eq!(grid.visible_range().start, 0);
        assert_eq!(listeners(&hub), 2);

        grid.set_count(0);
        assert_eq!(grid.visible_range(), VisibleRange::EMPTY);
        assert!(!grid.is_bound());
        assert_eq!(listeners(&hub), 0);
    }

    #[test]
    fn unmount_and_drop_release_subscriptions() {
        let (_viewport, hub, mut grid) = setup(100, 500.0, 800.0);
        grid.unmount();
        assert!(!grid.is_mounted());
        assert_eq!(listeners(&hub), 0);

        grid.mount(&hub);
        assert_eq!(listeners(&hub), 2);
        drop(grid);
        assert_eq!(listeners(&hub), 0);
    }

    #[test]
    fn unmounted_grid_ignores_recompute() {
        let viewport = Rc::new(FixedViewport::new(500.0_f32, 800.0));
        let mut grid = VirtualGrid::new(GridConfig::default(), viewport);
        grid.set_count(50);
        grid.recompute();
        assert!(grid.visible_range().is_empty());
        assert_eq!(grid.container_height(), 7.0 * 56.0);
    }

    #[test]
    fn items_match_frame() {
        let (_viewport, _hub, mut grid) = setup(300, 500.0, 300.0);
        let items: alloc::vec::Vec<_> = grid.items().collect();
        assert_eq!(items, grid.frame().items);
    }
}
