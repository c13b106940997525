// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport change signals and scoped subscriptions.
//!
//! A [`SignalHub`] is the host's end of the scroll and resize notifications.
//! Listeners are registered with [`SignalHub::listen`], which hands back a
//! [`Subscription`] guard. The listener stays registered exactly as long as the
//! guard lives: dropping it (explicitly, by replacing it, or by dropping its
//! owner during unwinding) removes the listener.
//!
//! ```rust
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use karak_virtual_grid::{SignalHub, ViewportSignal};
//!
//! let hub = SignalHub::new();
//! let hits = Rc::new(Cell::new(0));
//! let subscription = {
//!     let hits = Rc::clone(&hits);
//!     hub.listen(ViewportSignal::Scroll, move || hits.set(hits.get() + 1))
//! };
//!
//! assert_eq!(hub.emit(ViewportSignal::Scroll), 1);
//! drop(subscription);
//! assert_eq!(hub.emit(ViewportSignal::Scroll), 0);
//! assert_eq!(hits.get(), 1);
//! ```
//!
//! Hubs are single-threaded and are cheap handles: cloning one yields another
//! handle to the same set of listeners.

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;

/// A viewport change the grid reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportSignal {
    /// The scroll position changed.
    Scroll,
    /// The viewport size changed.
    Resize,
}

impl ViewportSignal {
    /// Every signal, in a stable order.
    pub const ALL: [Self; 2] = [Self::Scroll, Self::Resize];
}

type Callback = Rc<RefCell<dyn FnMut()>>;

struct Listener {
    id: u64,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    scroll: SmallVec<[Listener; 2]>,
    resize: SmallVec<[Listener; 2]>,
}

impl Registry {
    fn slot(&self, signal: ViewportSignal) -> &SmallVec<[Listener; 2]> {
        match signal {
            ViewportSignal::Scroll => &self.scroll,
            ViewportSignal::Resize => &self.resize,
        }
    }

    fn slot_mut(&mut self, signal: ViewportSignal) -> &mut SmallVec<[Listener; 2]> {
        match signal {
            ViewportSignal::Scroll => &mut self.scroll,
            ViewportSignal::Resize => &mut self.resize,
        }
    }
}

/// Single-threaded registry of viewport signal listeners.
#[derive(Clone, Default)]
pub struct SignalHub {
    registry: Rc<RefCell<Registry>>,
}

impl SignalHub {
    /// Creates a hub with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for `signal`.
    ///
    /// The callback is removed when the returned [`Subscription`] is dropped.
    pub fn listen<F>(&self, signal: ViewportSignal, callback: F) -> Subscription
    where
        F: FnMut() + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.slot_mut(signal).push(Listener {
            id,
            callback: Rc::new(RefCell::new(callback)),
        });
        Subscription {
            registry: Rc::downgrade(&self.registry),
            signal,
            id,
        }
    }

    /// Delivers `signal` to its listeners and returns how many ran.
    ///
    /// The set of listeners is captured before the first one runs, so
    /// listeners may subscribe or unsubscribe while being notified. A listener
    /// that is still running (because it emitted the same signal itself) is
    /// skipped rather than re-entered.
    pub fn emit(&self, signal: ViewportSignal) -> usize {
        let callbacks: SmallVec<[Callback; 4]> = self
            .registry
            .borrow()
            .slot(signal)
            .iter()
            .map(|listener| Rc::clone(&listener.callback))
            .collect();

        let mut ran = 0;
        for callback in &callbacks {
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (*callback)();
                ran += 1;
            }
        }
        ran
    }

    /// Number of listeners registered for `signal`.
    #[must_use]
    pub fn listener_count(&self, signal: ViewportSignal) -> usize {
        self.registry.borrow().slot(signal).len()
    }
}

impl fmt::Debug for SignalHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalHub")
            .field("scroll", &self.listener_count(ViewportSignal::Scroll))
            .field("resize", &self.listener_count(ViewportSignal::Resize))
            .finish_non_exhaustive()
    }
}

/// Keeps a listener registered on a [`SignalHub`] until dropped.
///
/// The guard does not keep the hub alive; if the hub goes away first, dropping
/// the guard is a no-op.
#[must_use = "dropping a Subscription immediately unregisters its listener"]
#[derive(Debug)]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    signal: ViewportSignal,
    id: u64,
}

impl Subscription {
    /// The signal this subscription listens to.
    #[must_use]
    pub const fn signal(&self) -> ViewportSignal {
        self.signal
    }

    /// Returns `true` while the listener is still registered on a live hub.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry
                .borrow()
                .slot(self.signal)
                .iter()
                .any(|listener| listener.id == self.id)
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .slot_mut(self.signal)
                .retain(|listener| listener.id != self.id);
        }
    }
}
