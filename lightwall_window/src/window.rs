// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pure windowing function and its result type.

use core::ops::Range;

use lightwall_layout::GridGeometry;

/// `f64::floor`, via `libm` since this crate is `no_std`.
fn floor(x: f64) -> f64 {
    libm::floor(x)
}

/// `f64::ceil`, via `libm` since this crate is `no_std`.
fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}

/// The materialized row range of a windowed grid.
///
/// Rows are half-open: `first_row..end_row`. The range is positioned in
/// document space by `offset_y` and the host sizes its scroll spacer to
/// `total_height` so native scrollbar proportions stay correct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowRange {
    /// First materialized row (inclusive).
    pub first_row: usize,
    /// One past the last materialized row (exclusive).
    pub end_row: usize,
    /// Vertical offset of the materialized block from the content start.
    pub offset_y: f64,
    /// Total content height across all rows, materialized or not.
    pub total_height: f64,
}

impl WindowRange {
    /// The empty window used for empty collections.
    pub const EMPTY: Self = Self {
        first_row: 0,
        end_row: 0,
        offset_y: 0.0,
        total_height: 0.0,
    };

    /// Returns `true` if no rows are materialized.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_row == self.end_row
    }

    /// Number of materialized rows.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.end_row - self.first_row
    }

    /// Last materialized row (inclusive), if any.
    #[must_use]
    pub const fn last_row(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end_row - 1)
        }
    }

    /// Iterator-friendly view of the materialized rows.
    #[must_use]
    pub const fn rows(&self) -> Range<usize> {
        self.first_row..self.end_row
    }

    /// The flat item indices covered by the materialized rows.
    ///
    /// The end is clamped to `total_items` for the final, partially filled
    /// row.
    #[must_use]
    pub fn item_range(&self, columns: usize, total_items: usize) -> Range<usize> {
        let columns = columns.max(1);
        let start = (self.first_row.saturating_mul(columns)).min(total_items);
        let end = (self.end_row.saturating_mul(columns)).min(total_items);
        start..end
    }
}

/// Computes the minimal row window for one scroll sample.
///
/// - `total_items`: flat collection length; rows are `ceil(total / columns)`.
/// - `scroll_offset`: top of the viewport in content coordinates; negative or
///   non-finite samples (rubber-band overscroll, transient layout) clamp to 0.
/// - `container_height`: visible extent of the scroll container.
/// - `lookahead_rows`: extra rows materialized on both sides of the visible
///   band to hide scroll-triggered rendering latency.
///
/// The result always covers every row intersecting
/// `[scroll_offset, scroll_offset + container_height]`, materializes at least
/// one row for non-empty collections (a container shorter than one row must
/// not produce a permanently blank view), and materializes
/// `O(visible rows + 2 × lookahead)` rows independent of `total_items`.
///
/// This is a stateless pure function; hosts call it from the latest scroll
/// callback only, so a superseded sample can never clobber a newer window.
#[must_use]
pub fn compute_window(
    total_items: usize,
    geometry: &GridGeometry,
    scroll_offset: f64,
    container_height: f64,
    lookahead_rows: usize,
) -> WindowRange {
    if total_items == 0 {
        return WindowRange::EMPTY;
    }

    let columns = geometry.columns.max(1);
    let row_extent = {
        let extent = geometry.row_extent();
        if extent.is_finite() && extent > 0.0 {
            extent
        } else {
            GridGeometry::MIN_SAFE.row_extent()
        }
    };
    let total_rows = total_items.div_ceil(columns);

    let scroll_offset = clamp_sample(scroll_offset);
    let container_height = clamp_sample(container_height);

    let first_visible = {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Row index approximation; clamped to the row range immediately after"
        )]
        let row = floor(scroll_offset / row_extent) as isize;
        (row.max(0) as usize).min(total_rows - 1)
    };
    let first_row = first_visible.saturating_sub(lookahead_rows);

    let visible_rows = {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Row count approximation over finite, non-negative samples"
        )]
        let rows = ceil(container_height / row_extent) as usize;
        rows.max(1)
    };

    let end_row = first_row
        .saturating_add(visible_rows)
        .saturating_add(2 * lookahead_rows)
        .saturating_add(1)
        .min(total_rows);

    WindowRange {
        first_row,
        end_row,
        offset_y: first_row as f64 * row_extent,
        total_height: total_rows as f64 * row_extent,
    }
}

/// Clamps a host-supplied sample to a finite, non-negative value.
fn clamp_sample(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::{WindowRange, compute_window};
    use lightwall_layout::GridGeometry;

    fn reference_geometry() -> GridGeometry {
        GridGeometry::new(4, 300.0, 24.0)
    }

    #[test]
    fn empty_collection_yields_empty_window() {
        let window = compute_window(0, &reference_geometry(), 0.0, 800.0, 1);
        assert_eq!(window, WindowRange::EMPTY);
        assert_eq!(window.total_height, 0.0);
        assert!(window.last_row().is_none());
    }

    #[test]
    fn reference_scenario_materializes_a_handful_of_rows() {
        // 1280x800 viewport, 240 items, scroll at the top.
        let geometry = reference_geometry();
        let window = compute_window(240, &geometry, 0.0, 800.0, 1);

        assert_eq!(window.first_row, 0);
        // Three rows intersect the 800px viewport; lookahead adds a margin,
        // but nowhere near the 60 total rows.
        assert!(window.row_count() >= 3);
        assert!(window.row_count() <= 3 + 2 + 1);
        assert_eq!(window.offset_y, 0.0);
        assert_eq!(window.total_height, 60.0 * 324.0);

        let items = window.item_range(geometry.columns, 240);
        assert_eq!(items.start, 0);
        assert!(items.end <= 24);
    }

    #[test]
    fn materialized_count_is_independent_of_total_items() {
        let geometry = reference_geometry();
        let small = compute_window(240, &geometry, 3240.0, 800.0, 1);
        let large = compute_window(100_000, &geometry, 3240.0, 800.0, 1);
        assert_eq!(small.row_count(), large.row_count());
        assert_eq!(small.first_row, large.first_row);
    }

    #[test]
    fn window_covers_every_intersecting_row() {
        let geometry = reference_geometry();
        let extent = geometry.row_extent();
        let total_items = 10_000;
        let total_rows = total_items / geometry.columns;
        let container = 800.0;

        for step in 0..200 {
            let scroll = step as f64 * 37.3;
            let window = compute_window(total_items, &geometry, scroll, container, 1);
            for row in 0..total_rows {
                let top = row as f64 * extent;
                let bottom = top + geometry.row_height;
                let intersects = bottom > scroll && top < scroll + container;
                if intersects {
                    assert!(
                        window.rows().contains(&row),
                        "row {row} intersects viewport at scroll {scroll} but was not materialized"
                    );
                }
            }
        }
    }

    #[test]
    fn tiny_container_still_materializes_a_row() {
        let window = compute_window(100, &reference_geometry(), 0.0, 10.0, 0);
        assert!(!window.is_empty());
        assert!(window.row_count() >= 1);

        // Zero-height containers behave the same.
        let window = compute_window(100, &reference_geometry(), 0.0, 0.0, 0);
        assert!(!window.is_empty());
    }

    #[test]
    fn negative_and_non_finite_samples_clamp_to_zero() {
        let geometry = reference_geometry();
        let baseline = compute_window(100, &geometry, 0.0, 800.0, 1);
        assert_eq!(
            compute_window(100, &geometry, -250.0, 800.0, 1),
            baseline,
            "rubber-band overscroll clamps to the top window"
        );
        assert_eq!(compute_window(100, &geometry, f64::NAN, 800.0, 1), baseline);
    }

    #[test]
    fn scrolled_window_translates_by_whole_rows() {
        let geometry = reference_geometry();
        let extent = geometry.row_extent();

        // Scroll ten rows down.
        let window = compute_window(1000, &geometry, 10.0 * extent, 800.0, 1);
        assert_eq!(window.first_row, 9, "one lookahead row before the visible band");
        assert_eq!(window.offset_y, 9.0 * extent);
    }

    #[test]
    fn end_of_content_clamps_the_window() {
        let geometry = reference_geometry();
        let extent = geometry.row_extent();
        // 240 items / 4 columns = 60 rows; scroll far past the end.
        let window = compute_window(240, &geometry, 1_000.0 * extent, 800.0, 2);
        assert_eq!(window.end_row, 60);
        assert!(!window.is_empty());
    }

    #[test]
    fn item_range_clamps_the_partial_final_row() {
        // 10 items in 4 columns: rows 0..3, last row holds 2 items.
        let geometry = reference_geometry();
        let window = compute_window(10, &geometry, 0.0, 2000.0, 0);
        assert_eq!(window.end_row, 3);
        assert_eq!(window.item_range(geometry.columns, 10), 0..10);
    }

    #[test]
    fn degenerate_geometry_recovers_with_safe_extent() {
        // Hand-built geometry that violates the row_height invariant.
        let geometry = GridGeometry {
            columns: 4,
            row_height: 0.0,
            gap: 0.0,
        };
        let window = compute_window(100, &geometry, 500.0, 800.0, 1);
        assert!(!window.is_empty());
        assert!(window.total_height > 0.0);
    }
}
