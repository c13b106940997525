// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for grid layout and visible range computation.
//!
//! These tests verify invariants that must hold for any count, viewport, and
//! scroll position:
//!
//! 1. Scrolling from top to bottom materializes every index, and only those.
//! 2. Visible ranges are valid: `start <= end <= count`, rows within bounds.
//! 3. The number of materialized items is bounded independently of count.
//! 4. Narrowing the viewport never decreases total rows or total height.
//! 5. Identical inputs yield identical ranges, through the pure function and
//!    through repeated signals on a mounted grid.

use std::rc::Rc;

use karak_virtual_grid::{
    FixedViewport, GridConfig, GridLayout, SignalHub, ViewportSample, ViewportSignal, VirtualGrid,
    compute_visible_range,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn config_strategy() -> impl Strategy<Value = GridConfig<f64>> {
    (1.0f64..=96.0, 0.0f64..=16.0, 0usize..=4)
        .prop_map(|(cell, margin, buffer)| GridConfig::new(cell, margin, buffer))
}

fn sample(width: f64, height: f64, scroll_offset: f64, container_offset: f64) -> ViewportSample<f64> {
    ViewportSample {
        width,
        height,
        scroll_offset,
        container_offset,
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Full-scroll traversal covers exactly 0..count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn full_scroll_materializes_every_index(
        count in 0usize..=2_000,
        config in config_strategy(),
        width in 0.0f64..=1_600.0,
        height in 40.0f64..=1_200.0,
        container_offset in 0.0f64..=400.0,
    ) {
        let layout = GridLayout::new(&config, count, width);
        let mut seen = vec![false; count];
        let bottom = container_offset + layout.total_height();

        let mut scroll = 0.0;
        loop {
            let range = compute_visible_range(
                &layout,
                &sample(width, height, scroll, container_offset),
                config.buffer_rows(),
            );
            prop_assert!(range.end <= count);
            for index in range.indices() {
                seen[index] = true;
            }
            if scroll >= bottom {
                break;
            }
            scroll += height;
        }

        let missing = seen.iter().position(|covered| !covered);
        prop_assert_eq!(missing, None, "index never materialized");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Range validity for arbitrary (including hostile) geometry
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn visible_range_is_always_valid(
        count in 0usize..=1_000_000,
        config in config_strategy(),
        width in -200.0f64..=4_000.0,
        height in -100.0f64..=4_000.0,
        scroll in -10_000.0f64..=10_000_000.0,
        container_offset in -500.0f64..=5_000.0,
    ) {
        let layout = GridLayout::new(&config, count, width);
        prop_assert!(layout.items_per_row() >= 1);

        let range = compute_visible_range(
            &layout,
            &sample(width, height, scroll, container_offset),
            config.buffer_rows(),
        );
        prop_assert!(range.start <= range.end);
        prop_assert!(range.end <= count);
        prop_assert!(range.start_row <= range.end_row);
        prop_assert!(range.end_row <= layout.total_rows());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Materialized items are bounded independently of count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn materialized_items_do_not_grow_with_count(
        count in 0usize..=10_000_000,
        config in config_strategy(),
        width in 0.0f64..=2_000.0,
        height in 0.0f64..=2_000.0,
        scroll in 0.0f64..=1.0e7,
    ) {
        let layout = GridLayout::new(&config, count, width);
        let range = compute_visible_range(
            &layout,
            &sample(width, height, scroll, 0.0),
            config.buffer_rows(),
        );

        let visible_rows = (height / layout.row_height()).ceil() as usize + 1;
        let bound = layout.items_per_row() * (visible_rows + 2 * config.buffer_rows());
        prop_assert!(
            range.len() <= bound,
            "materialized {} items, bound {}",
            range.len(),
            bound
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Narrowing increases rows monotonically
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn narrowing_never_reduces_total_rows(
        count in 0usize..=100_000,
        config in config_strategy(),
        wide in 0.0f64..=3_000.0,
        shrink in 0.0f64..=1.0,
    ) {
        let narrow = wide * shrink;
        let wide_layout = GridLayout::new(&config, count, wide);
        let narrow_layout = GridLayout::new(&config, count, narrow);

        prop_assert!(narrow_layout.items_per_row() <= wide_layout.items_per_row());
        prop_assert!(narrow_layout.total_rows() >= wide_layout.total_rows());
        prop_assert!(narrow_layout.total_height() >= wide_layout.total_height());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn identical_inputs_give_identical_ranges(
        count in 0usize..=100_000,
        config in config_strategy(),
        width in 0.0f64..=2_000.0,
        height in 0.0f64..=2_000.0,
        scroll in 0.0f64..=1.0e7,
    ) {
        let layout = GridLayout::new(&config, count, width);
        let s = sample(width, height, scroll, 0.0);
        let first = compute_visible_range(&layout, &s, config.buffer_rows());
        let second = compute_visible_range(&layout, &s, config.buffer_rows());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn redundant_signals_are_idempotent(
        count in 1usize..=50_000,
        width in 100.0f64..=2_000.0,
        height in 100.0f64..=2_000.0,
        scroll in 0.0f64..=1.0e6,
    ) {
        let viewport = Rc::new(FixedViewport::new(width, height));
        let hub = SignalHub::new();
        let mut grid = VirtualGrid::new(GridConfig::default(), Rc::clone(&viewport));
        grid.set_count(count);
        grid.mount(&hub);

        viewport.scroll_to(scroll);
        hub.emit(ViewportSignal::Scroll);
        let first = grid.frame();
        hub.emit(ViewportSignal::Scroll);
        hub.emit(ViewportSignal::Resize);
        let second = grid.frame();
        prop_assert_eq!(first, second);
    }
}

// ── Fixed scenarios ─────────────────────────────────────────────────────

#[test]
fn five_hundred_wide_fits_eight_cells() {
    let config = GridConfig::new(48.0_f64, 8.0, 2);
    let layout = GridLayout::new(&config, 1, 500.0);
    assert_eq!(layout.items_per_row(), 8);
}

#[test]
fn ten_thousand_cups_materialize_a_small_window() {
    let viewport = Rc::new(FixedViewport::new(500.0_f64, 900.0));
    let hub = SignalHub::new();
    let mut grid = VirtualGrid::new(GridConfig::default(), Rc::clone(&viewport));
    grid.set_count(10_000);
    grid.mount(&hub);

    let mut largest = 0;
    let mut scroll = 0.0;
    while scroll <= grid.container_height() {
        viewport.scroll_to(scroll);
        hub.emit(ViewportSignal::Scroll);
        largest = largest.max(grid.frame().items.len());
        scroll += 450.0;
    }
    // ceil(900 / 56) + 1 visible rows, two buffer rows each side, 8 per row.
    assert!(largest <= 8 * (17 + 1 + 4), "materialized {largest} items");
    assert!(largest > 0, "nothing was materialized");
}
