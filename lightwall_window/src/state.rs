// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns the latest layout/scroll samples.

use lightwall_layout::GridGeometry;

use crate::{WindowRange, compute_window};

/// Default lookahead in rows on each side of the visible band.
pub const DEFAULT_LOOKAHEAD_ROWS: usize = 1;

/// Alignment mode when scrolling a specific row into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the top of the row with the top of the container.
    Start,
    /// Center the row within the container.
    Center,
    /// Align the bottom of the row with the bottom of the container.
    End,
    /// Move just enough to make the row fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

/// Controller for a windowed photo grid.
///
/// This type:
/// - stores the latest item count, geometry, scroll offset, container height,
///   and lookahead,
/// - caches the last computed [`WindowRange`] behind a dirty flag so unchanged
///   samples cost nothing,
/// - exposes per-row visibility queries and row-aligned scrolling.
///
/// It does *not* know about any widget/view system; hosts wrap this and drive
/// child creation/removal and spacer nodes.
#[derive(Debug)]
pub struct WindowState {
    total_items: usize,
    geometry: GridGeometry,
    scroll_offset: f64,
    container_height: f64,
    lookahead_rows: usize,

    dirty: bool,
    last_window: WindowRange,
}

impl WindowState {
    /// Creates a new controller with the given geometry and container height.
    #[must_use]
    pub fn new(geometry: GridGeometry, container_height: f64) -> Self {
        Self {
            total_items: 0,
            geometry,
            scroll_offset: 0.0,
            container_height: container_height.max(0.0),
            lookahead_rows: DEFAULT_LOOKAHEAD_ROWS,
            dirty: true,
            last_window: WindowRange::EMPTY,
        }
    }

    /// Returns the current item count.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Replaces the item count.
    ///
    /// This is the host's atomic list swap: the core only ever sees a length,
    /// never the items themselves.
    pub fn set_total_items(&mut self, total_items: usize) {
        if total_items != self.total_items {
            self.total_items = total_items;
            self.dirty = true;
        }
    }

    /// Returns the current grid geometry.
    #[must_use]
    pub const fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Replaces the grid geometry (viewport resize or orientation change).
    pub fn set_geometry(&mut self, geometry: GridGeometry) {
        if geometry != self.geometry {
            self.geometry = geometry;
            self.dirty = true;
        }
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Sets the scroll offset from the latest scroll sample.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.dirty = true;
        }
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Returns the container height.
    #[must_use]
    pub const fn container_height(&self) -> f64 {
        self.container_height
    }

    /// Sets the container height.
    pub fn set_container_height(&mut self, height: f64) {
        let height = height.max(0.0);
        if height != self.container_height {
            self.container_height = height;
            self.dirty = true;
        }
    }

    /// Returns the lookahead row count.
    #[must_use]
    pub const fn lookahead_rows(&self) -> usize {
        self.lookahead_rows
    }

    /// Sets the lookahead row count.
    pub fn set_lookahead_rows(&mut self, rows: usize) {
        if rows != self.lookahead_rows {
            self.lookahead_rows = rows;
            self.dirty = true;
        }
    }

    /// Computes or returns the cached window for the latest samples.
    #[must_use]
    pub fn window(&mut self) -> WindowRange {
        if self.dirty {
            self.last_window = compute_window(
                self.total_items,
                &self.geometry,
                self.scroll_offset,
                self.container_height,
                self.lookahead_rows,
            );
            self.dirty = false;
        }
        self.last_window
    }

    /// The flat item indices covered by the current window.
    #[must_use]
    pub fn item_range(&mut self) -> core::ops::Range<usize> {
        let columns = self.geometry.columns;
        let total = self.total_items;
        self.window().item_range(columns, total)
    }

    /// Total number of rows for the current item count and geometry.
    #[must_use]
    pub const fn total_rows(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            let columns = if self.geometry.columns == 0 {
                1
            } else {
                self.geometry.columns
            };
            self.total_items.div_ceil(columns)
        }
    }

    /// The vertical span of `row` as `(top, bottom)` in content coordinates.
    ///
    /// The bottom excludes the trailing gap; it is the extent of the row's
    /// content, which is what visibility and alignment care about.
    #[must_use]
    pub fn row_span(&self, row: usize) -> (f64, f64) {
        let top = row as f64 * self.geometry.row_extent();
        (top, top + self.geometry.row_height)
    }

    /// The largest scroll offset that still keeps the viewport on content.
    #[must_use]
    pub fn max_scroll_offset(&mut self) -> f64 {
        let total_height = self.window().total_height;
        (total_height - self.container_height).max(0.0)
    }

    /// Clamps the current scroll offset so the viewport stays within content.
    pub fn clamp_scroll_to_content(&mut self) {
        let max_offset = self.max_scroll_offset();
        if self.scroll_offset > max_offset {
            self.set_scroll_offset(max_offset);
        }
    }

    /// Returns `true` if `row` lies entirely inside the un-overscanned viewport.
    #[must_use]
    pub fn is_row_fully_visible(&self, row: usize) -> bool {
        if row >= self.total_rows() {
            return false;
        }
        let (top, bottom) = self.row_span(row);
        top >= self.scroll_offset && bottom <= self.scroll_offset + self.container_height
    }

    /// Returns `true` if `row` overlaps the un-overscanned viewport at all.
    #[must_use]
    pub fn is_row_partially_visible(&self, row: usize) -> bool {
        if row >= self.total_rows() {
            return false;
        }
        let (top, bottom) = self.row_span(row);
        bottom > self.scroll_offset && top < self.scroll_offset + self.container_height
    }

    /// Scrolls so that `row` is brought into view using the given alignment.
    pub fn scroll_to_row(&mut self, row: usize, align: ScrollAlign) {
        let total_rows = self.total_rows();
        if total_rows == 0 {
            self.set_scroll_offset(0.0);
            return;
        }
        let row = row.min(total_rows - 1);
        let (top, bottom) = self.row_span(row);
        let container = self.container_height;

        let new_offset = match align {
            ScrollAlign::Start => top,
            ScrollAlign::End => (bottom - container).max(0.0),
            ScrollAlign::Center => ((top + bottom) / 2.0 - container / 2.0).max(0.0),
            ScrollAlign::Nearest => {
                let view_top = self.scroll_offset;
                let view_bottom = view_top + container;
                if top >= view_top && bottom <= view_bottom {
                    view_top
                } else if top < view_top {
                    top
                } else {
                    (bottom - container).max(0.0)
                }
            }
        };
        self.set_scroll_offset(new_offset);
    }
}
