// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Karak calculator + virtualized cup collection in the terminal.
//!
//! This example shows how to combine:
//! - `karak_calculator` to turn an amount in dirhams into cups and result text,
//! - `karak_virtual_grid` to lay out one marker per cup and materialize only
//!   the rows around a simulated viewport as it scrolls and resizes,
//! - kurbo geometry to hit-test a pointer against the materialized cells.
//!
//! Run:
//! - `cargo run -p karak_demos --example karak_collection -- 1500`
//! - `RUST_LOG=karak_virtual_grid=debug cargo run -p karak_demos --example karak_collection`

use std::error::Error;
use std::rc::Rc;

use karak_calculator::{KarakCalculator, KarakRate, ORIGIN_FACT};
use karak_virtual_grid::{
    FixedViewport, GridConfig, GridFrame, SignalHub, ViewportQuery, ViewportSignal, VirtualGrid,
};
use kurbo::Point;
use tracing_subscriber::EnvFilter;

/// Logical pixels above the collection (header and calculator card).
const CONTAINER_OFFSET: f64 = 640.0;
const VIEWPORT_WIDTH: f64 = 480.0;
const VIEWPORT_HEIGHT: f64 = 336.0;
const MARKER: &str = "\u{2615}";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let amount = std::env::args().nth(1).unwrap_or_else(|| "150".to_owned());

    let mut calc = KarakCalculator::new(KarakRate::default());
    calc.set_input(amount);
    calc.calculate()?;

    println!("How Many Karaks Is That?");
    println!("  Did you know? {}", calc.annual_fact());
    println!("  {ORIGIN_FACT}");
    println!();
    if let Some(card) = calc.result_card() {
        println!("  {} cups of delicious karak chai", card.formatted_cups);
        println!("  {}", card.message());
        println!("  {}", card.price_basis);
    }

    let Some(cups) = calc.collection_count() else {
        return Ok(());
    };
    let count = usize::try_from(cups).unwrap_or(usize::MAX);

    let viewport = Rc::new(
        FixedViewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT).with_container_offset(CONTAINER_OFFSET),
    );
    let hub = SignalHub::new();
    let mut grid = VirtualGrid::new(GridConfig::default(), Rc::clone(&viewport));
    grid.set_count(count);
    grid.mount(&hub);

    println!();
    println!("Your Karak Collection");
    println!(
        "  Scroll down to see all {} cups!",
        karak_calculator::group_thousands(cups)
    );

    // Page down through the first few screens.
    for _ in 0..4 {
        draw(&grid.frame(), viewport.scroll_offset());
        viewport.scroll_by(VIEWPORT_HEIGHT);
        hub.emit(ViewportSignal::Scroll);
    }

    // Jump to the bottom of the collection.
    viewport.scroll_to(CONTAINER_OFFSET + grid.container_height() - VIEWPORT_HEIGHT);
    hub.emit(ViewportSignal::Scroll);
    draw(&grid.frame(), viewport.scroll_offset());

    // Halve the window width: fewer cups per row, more rows.
    viewport.resize(VIEWPORT_WIDTH / 2.0, VIEWPORT_HEIGHT);
    hub.emit(ViewportSignal::Resize);
    let frame = grid.frame();
    draw(&frame, viewport.scroll_offset());

    // Which cup sits under a pointer in the middle of the screen?
    let pointer = Point::new(
        VIEWPORT_WIDTH / 4.0,
        viewport.scroll_offset() - CONTAINER_OFFSET + VIEWPORT_HEIGHT / 2.0,
    );
    match frame.items.iter().find(|item| item.bounds().contains(pointer)) {
        Some(item) => println!(
            "  pointer at ({:.0}, {:.0}) is over cup #{} (hue {}°)",
            pointer.x,
            pointer.y,
            item.index + 1,
            item.tint.hue_degrees
        ),
        None => println!("  pointer at ({:.0}, {:.0}) is between cups", pointer.x, pointer.y),
    }

    grid.unmount();
    Ok(())
}

fn draw(frame: &GridFrame<f64>, scroll_offset: f64) {
    println!();
    println!(
        "-- scroll {scroll_offset:.0}px: rows {}..{} of {:.0}px, cups {}..{} materialized ({}) --",
        frame.range.start_row,
        frame.range.end_row,
        frame.container_height,
        frame.range.start,
        frame.range.end,
        frame.items.len(),
    );
    let mut items = frame.items.iter().peekable();
    while let Some(first) = items.next() {
        let mut line = String::from(MARKER);
        while items.next_if(|item| item.top == first.top).is_some() {
            line.push_str(MARKER);
        }
        println!("  {:>7.0} | {line}", first.top);
    }
}
