// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint tables and the layout calculator itself.

use crate::{DeviceClass, GridGeometry, Orientation, Viewport};

/// One row of a breakpoint table: viewport widths at or above `min_width`
/// (up to the next breakpoint) use this column count, row height, and gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Minimum viewport width in logical pixels for this entry to apply.
    pub min_width: f64,
    /// Column count at this width.
    pub columns: usize,
    /// Target row height in logical pixels, before device biasing.
    pub row_height: f64,
    /// Gap between rows and columns in logical pixels.
    pub gap: f64,
}

/// The default breakpoint table, phone through wide desktop.
///
/// Entries are ascending by `min_width` and the first entry starts at zero so
/// every valid width matches.
pub const DEFAULT_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint {
        min_width: 0.0,
        columns: 2,
        row_height: 220.0,
        gap: 12.0,
    },
    Breakpoint {
        min_width: 640.0,
        columns: 3,
        row_height: 260.0,
        gap: 16.0,
    },
    Breakpoint {
        min_width: 1024.0,
        columns: 4,
        row_height: 300.0,
        gap: 24.0,
    },
    Breakpoint {
        min_width: 1440.0,
        columns: 5,
        row_height: 320.0,
        gap: 24.0,
    },
];

/// Configuration for the layout calculator.
///
/// The breakpoint table is borrowed so hosts can keep it in a constant; the
/// bias factors shrink row height on [`DeviceClass::Mobile`], where tall rows
/// cost the most per scrolled frame. All tunables here are empirically chosen
/// defaults, not derived truths; hosts are expected to adjust them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig<'a> {
    /// Breakpoint table, ascending by `min_width`, first entry at width 0.
    pub breakpoints: &'a [Breakpoint],
    /// Row-height multiplier applied on mobile devices.
    pub mobile_row_bias: f64,
    /// Additional row-height multiplier applied on mobile in landscape,
    /// where viewport height is scarce.
    pub mobile_landscape_bias: f64,
}

impl Default for LayoutConfig<'_> {
    fn default() -> Self {
        Self {
            breakpoints: DEFAULT_BREAKPOINTS,
            mobile_row_bias: 0.85,
            mobile_landscape_bias: 0.75,
        }
    }
}

impl LayoutConfig<'_> {
    /// Derives the grid geometry for a viewport and device class.
    ///
    /// Pure and idempotent: identical inputs yield bit-identical output.
    /// Invalid viewports and empty breakpoint tables fall back to
    /// [`GridGeometry::MIN_SAFE`].
    #[must_use]
    pub fn compute(&self, viewport: Viewport, device_class: DeviceClass) -> GridGeometry {
        if !viewport.is_valid() {
            return GridGeometry::MIN_SAFE;
        }
        let Some(bp) = select_breakpoint(self.breakpoints, viewport.width) else {
            return GridGeometry::MIN_SAFE;
        };

        let mut row_height = bp.row_height;
        if device_class == DeviceClass::Mobile {
            row_height *= self.mobile_row_bias;
            if viewport.orientation() == Orientation::Landscape {
                row_height *= self.mobile_landscape_bias;
            }
        }

        GridGeometry::new(bp.columns, row_height, bp.gap)
    }
}

/// Derives grid geometry using [`DEFAULT_BREAKPOINTS`] and default biases.
///
/// See [`LayoutConfig::compute`] for the contract.
#[must_use]
pub fn compute(viewport: Viewport, device_class: DeviceClass) -> GridGeometry {
    LayoutConfig::default().compute(viewport, device_class)
}

/// Returns the last breakpoint whose `min_width` is at or below `width`,
/// falling back to the first entry for widths below the table start.
fn select_breakpoint(table: &[Breakpoint], width: f64) -> Option<&Breakpoint> {
    table
        .iter()
        .rev()
        .find(|bp| bp.min_width <= width)
        .or_else(|| table.first())
}
