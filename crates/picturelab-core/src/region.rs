//! Half-open rectangular regions of a picture.
//!
//! A region covers rows `[start_row, end_row)` and columns
//! `[start_col, end_col)`. Regions whose start is at or past their end on
//! either axis are empty and every operation treats them as a no-op.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A rectangle of picture cells, `[start_row, end_row) x [start_col, end_col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl Region {
    /// Bounds are given in the filter catalog's order: start row, start
    /// column, end row, end column.
    pub const fn new(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    /// The region covering a whole `height x width` grid.
    pub const fn whole(height: usize, width: usize) -> Self {
        Self::new(0, 0, height, width)
    }

    pub fn rows(&self) -> Range<usize> {
        self.start_row..self.end_row
    }

    pub fn cols(&self) -> Range<usize> {
        self.start_col..self.end_col
    }

    pub fn height(&self) -> usize {
        self.end_row.saturating_sub(self.start_row)
    }

    pub fn width(&self) -> usize {
        self.end_col.saturating_sub(self.start_col)
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows().contains(&row) && self.cols().contains(&col)
    }
}
