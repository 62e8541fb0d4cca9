// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-wall assembly: layout, window, and visibility in one pass.

use core::hash::Hash;

use lightwall_layout::{DeviceClass, GridGeometry, LayoutConfig, Viewport};
use lightwall_visibility::{ItemSpan, ProximityTracker, VisibilityEvent, WatchMode};
use lightwall_window::{ScrollAlign, VirtualizationPolicy, WindowRange, WindowState};

use crate::{SubscriptionId, Subscriptions};

/// Everything a [`GalleryCore`] reports to its subscribers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GalleryEvent<K> {
    /// The grid geometry changed (viewport resize or orientation change).
    GeometryChanged(GridGeometry),
    /// The materialized window changed; the host diffs it against the
    /// previous one to create/destroy children.
    WindowChanged(WindowRange),
    /// A watched item crossed the proximity boundary.
    Visibility(VisibilityEvent<K>),
}

/// One photo wall's rendering core.
///
/// Owns the layout configuration, the window controller, the proximity
/// tracker, and the subscription table. Each host sample
/// ([`GalleryCore::set_viewport`], [`GalleryCore::set_scroll_offset`],
/// [`GalleryCore::set_item_count`]) re-derives geometry → window →
/// visibility synchronously before returning, so subscribers only ever
/// observe the newest sample's window.
///
/// The item list itself stays with the host; the core sees a count and the
/// stable ids of watched items. Replacing the list is
/// [`GalleryCore::set_item_count`] plus re-watching what changed.
#[derive(Debug)]
pub struct GalleryCore<K> {
    device_class: DeviceClass,
    layout: LayoutConfig<'static>,
    policy: VirtualizationPolicy,
    viewport: Viewport,
    geometry: GridGeometry,
    window: WindowState,
    tracker: ProximityTracker<K>,
    subscriptions: Subscriptions<GalleryEvent<K>>,
    last_window: Option<WindowRange>,
}

impl<K: Eq + Hash + Clone> GalleryCore<K> {
    /// Creates a core for one wall on the given device class.
    #[must_use]
    pub fn new(device_class: DeviceClass) -> Self {
        Self::with_tracker(device_class, ProximityTracker::for_device_class(device_class))
    }

    /// Creates a core whose visibility tracking runs degraded
    /// (every watched item reports visible; see
    /// [`ProximityTracker::degraded`]).
    #[must_use]
    pub fn degraded(device_class: DeviceClass) -> Self {
        Self::with_tracker(device_class, ProximityTracker::degraded())
    }

    fn with_tracker(device_class: DeviceClass, tracker: ProximityTracker<K>) -> Self {
        let geometry = GridGeometry::MIN_SAFE;
        Self {
            device_class,
            layout: LayoutConfig::default(),
            policy: VirtualizationPolicy::default(),
            viewport: Viewport::new(0.0, 0.0),
            geometry,
            window: WindowState::new(geometry, 0.0),
            tracker,
            subscriptions: Subscriptions::new(),
            last_window: None,
        }
    }

    /// Replaces the layout configuration.
    pub fn set_layout(&mut self, layout: LayoutConfig<'static>) {
        self.layout = layout;
        self.apply_viewport();
    }

    /// Replaces the virtualization policy.
    pub fn set_policy(&mut self, policy: VirtualizationPolicy) {
        self.policy = policy;
    }

    /// Attaches an event handler; returns its disposer.
    pub fn subscribe(
        &mut self,
        handler: impl FnMut(&GalleryEvent<K>) + 'static,
    ) -> SubscriptionId {
        self.subscriptions.attach(handler)
    }

    /// Detaches a handler, returning `true` if it was attached.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.detach(id)
    }

    /// Number of live handlers, for lifecycle checks.
    #[must_use]
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.active()
    }

    /// The current grid geometry.
    #[must_use]
    pub const fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// The current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.window.scroll_offset()
    }

    /// Returns `true` if the current collection is large enough to window.
    ///
    /// Below the policy threshold the host renders every item and ignores
    /// the window.
    #[must_use]
    pub const fn should_virtualize(&self) -> bool {
        self.policy.should_virtualize(self.window.total_items())
    }

    /// The current window for the latest samples.
    #[must_use]
    pub fn window(&mut self) -> WindowRange {
        self.window.window()
    }

    /// The flat item indices covered by the current window.
    #[must_use]
    pub fn item_range(&mut self) -> core::ops::Range<usize> {
        self.window.item_range()
    }

    /// The vertical span of `row`, for registering watchers.
    #[must_use]
    pub fn row_span(&self, row: usize) -> ItemSpan {
        let (top, bottom) = self.window.row_span(row);
        ItemSpan::new(top, bottom)
    }

    /// Atomically replaces the collection length.
    pub fn set_item_count(&mut self, total_items: usize) {
        self.window.set_total_items(total_items);
        self.sync();
    }

    /// Feeds the latest viewport measurement (resize/orientation change).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.apply_viewport();
    }

    /// Feeds the latest scroll sample.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.window.set_scroll_offset(offset);
        self.sync();
    }

    /// Scrolls `row` into view with the given alignment.
    pub fn scroll_to_row(&mut self, row: usize, align: ScrollAlign) {
        self.window.scroll_to_row(row, align);
        self.sync();
    }

    /// Registers (or replaces) a visibility watcher for an item.
    pub fn watch_item(&mut self, key: K, span: ItemSpan, mode: WatchMode) {
        self.tracker.watch(key, span, mode);
    }

    /// Retires an item's watcher (it left the materialized window).
    pub fn unwatch_item(&mut self, key: &K) -> bool {
        self.tracker.unwatch(key)
    }

    /// Number of live watchers, for lifecycle checks.
    #[must_use]
    pub fn active_watchers(&self) -> usize {
        self.tracker.len()
    }

    /// Tears down every watcher and handler.
    ///
    /// After this, [`GalleryCore::active_subscriptions`] and
    /// [`GalleryCore::active_watchers`] are both zero.
    pub fn teardown(&mut self) {
        self.tracker.clear();
        self.subscriptions.clear();
        self.last_window = None;
    }

    /// Re-derives geometry from the stored viewport, then syncs.
    fn apply_viewport(&mut self) {
        let geometry = self.layout.compute(self.viewport, self.device_class);
        if geometry != self.geometry {
            self.geometry = geometry;
            self.window.set_geometry(geometry);
            self.subscriptions
                .emit(&GalleryEvent::GeometryChanged(geometry));
        }
        self.window.set_container_height(self.viewport.height.max(0.0));
        self.sync();
    }

    /// One synchronous pass over the latest samples: window, then visibility.
    fn sync(&mut self) {
        let window = self.window.window();
        if self.last_window != Some(window) {
            self.last_window = Some(window);
            self.subscriptions.emit(&GalleryEvent::WindowChanged(window));
        }

        let scroll_offset = self.window.scroll_offset();
        let events = self.tracker.update(scroll_offset, self.viewport.height);
        for event in events {
            self.subscriptions.emit(&GalleryEvent::Visibility(event));
        }
    }
}
