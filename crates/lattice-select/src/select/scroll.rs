//! Scroll synchronizer for the dropdown list.
//!
//! Keeps a target row visible by centering it in the viewport. The offset is a
//! pure function of the row and the [`ScrollMetrics`], so revealing the same
//! row twice yields the same offset.

use lattice_select_core::logging::targets;

/// Layout metrics of the option list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Height of one row.
    pub row_height: f32,
    /// Height of the visible area.
    pub viewport_height: f32,
    /// Number of rows in the list.
    pub row_count: usize,
}

impl ScrollMetrics {
    /// Metrics for a list showing at most `visible_rows` rows at a time.
    ///
    /// The viewport shrinks to fit when the list is shorter than that.
    pub fn for_list(row_height: f32, visible_rows: usize, row_count: usize) -> Self {
        Self {
            row_height,
            viewport_height: visible_rows.min(row_count) as f32 * row_height,
            row_count,
        }
    }

    /// Total height of all rows.
    pub fn content_height(&self) -> f32 {
        self.row_count as f32 * self.row_height
    }

    /// Largest valid scroll offset.
    pub fn max_offset(&self) -> f32 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    fn is_usable(&self) -> bool {
        self.row_height.is_finite()
            && self.row_height > 0.0
            && self.viewport_height.is_finite()
            && self.viewport_height >= 0.0
    }

    /// Offset that centers `row` in the viewport, clamped to the valid range.
    pub fn centered_offset(&self, row: usize) -> f32 {
        if !self.is_usable() || row >= self.row_count {
            return 0.0;
        }
        let row_center = row as f32 * self.row_height + self.row_height / 2.0;
        (row_center - self.viewport_height / 2.0).clamp(0.0, self.max_offset())
    }

    /// Clamp an arbitrary offset into the valid range.
    pub fn clamp(&self, offset: f32) -> f32 {
        if !self.is_usable() || !offset.is_finite() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }
}

/// Current scroll position of the dropdown list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSync {
    offset: f32,
}

impl ScrollSync {
    /// Create a synchronizer scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Scroll so `row` is centered. Returns whether the offset changed.
    pub fn reveal(&mut self, row: usize, metrics: &ScrollMetrics) -> bool {
        let offset = metrics.centered_offset(row);
        tracing::trace!(target: targets::SCROLL, row, offset, "reveal row");
        self.set(offset)
    }

    /// Scroll by a pixel delta, clamped. Returns whether the offset changed.
    pub fn scroll_by(&mut self, delta: f32, metrics: &ScrollMetrics) -> bool {
        self.set(metrics.clamp(self.offset + delta))
    }

    /// Return to the top.
    pub fn reset(&mut self) -> bool {
        self.set(0.0)
    }

    fn set(&mut self, offset: f32) -> bool {
        if self.offset == offset {
            return false;
        }
        self.offset = offset;
        true
    }
}
