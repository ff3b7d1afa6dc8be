//! Placement of timestamps onto the uniform sampling grid.

use std::time::Duration;

/// The grid cell a timestamp falls into, and how far it is from the cell's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlacement {
    index: u64,
    offset_us: f64,
}

impl GridPlacement {
    /// Returns the 0-based index of the grid cell.
    #[inline]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Returns the signed distance from the cell center to the timestamp, in microseconds.
    ///
    /// Negative values mean the timestamp lies before the center, positive values after it.
    #[inline]
    pub fn offset_us(&self) -> f64 {
        self.offset_us
    }

    /// Returns the absolute distance to the cell center, in microseconds.
    #[inline]
    pub fn distance_us(&self) -> f64 {
        self.offset_us.abs()
    }
}

/// Computes the grid cell for a cumulative timestamp.
///
/// Cells are `period_us` wide and centered on multiples of `period_us`, so cell `n` spans
/// `[n*period - period/2, n*period + period/2)` and a timestamp of 0 is the center of cell 0.
pub fn grid_placement(cumulative_us: u64, period_us: f64) -> GridPlacement {
    let t = cumulative_us as f64;
    let index = ((t + period_us / 2.0) / period_us).floor() as u64;
    let offset_us = t - index as f64 * period_us;
    GridPlacement { index, offset_us }
}

/// Converts `d` to whole microseconds, saturating at `u64::MAX`.
pub(crate) fn saturating_micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}
