use std::ops::Range;

use crate::geom::{Point, Rect};
use crate::spatial::{screen_to_grid, CellCoord};

/// Rectangular block of grid cells, iterated row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRange {
    /// Half-open row span
    pub rows: Range<i32>,
    /// Half-open column span
    pub cols: Range<i32>,
}

impl CellRange {
    /// True when no cell is covered.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    /// Number of covered cells.
    pub fn len(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    /// Cells in raster order: rows outer, columns inner.
    pub fn iter(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let cols = self.cols.clone();
        self.rows
            .clone()
            .flat_map(move |row| cols.clone().map(move |col| CellCoord::new(row, col)))
    }
}

/// `[min, max + 1)` clamped to `[0, extent]`.
#[inline]
fn clamp_span(min: i32, max: i32, extent: i32) -> Range<i32> {
    min.clamp(0, extent)..(max + 1).clamp(0, extent)
}

/// Cells of a `rows × cols` grid touched by the camera rectangle `view`
/// (projected world pixels).
///
/// The four corners are inverted through the projection; the span of their
/// rows and columns, padded by one past the maximum, is clamped to the grid.
/// A camera entirely off the map yields an empty range.
pub fn visible_cells(view: Rect, tile_w: i32, tile_h: i32, rows: i32, cols: i32) -> CellRange {
    let [tl, tr, br, bl] = view.corners().map(|p| screen_to_grid(p, tile_w, tile_h));

    // With the diamond projection the top-right corner holds the lowest row,
    // bottom-left the highest; top-left the lowest column, bottom-right the
    // highest. Taking min/max over all four gives the same answer for any
    // non-negative camera size.
    let row_min = tl.row.min(tr.row).min(br.row).min(bl.row);
    let row_max = tl.row.max(tr.row).max(br.row).max(bl.row);
    let col_min = tl.col.min(tr.col).min(br.col).min(bl.col);
    let col_max = tl.col.max(tr.col).max(br.col).max(bl.col);

    CellRange {
        rows: clamp_span(row_min, row_max, rows),
        cols: clamp_span(col_min, col_max, cols),
    }
}

/// Screen box covered by a tile drawn at `at`.
#[inline]
pub fn tile_bounds(at: Point, tile_w: i32, tile_h: i32) -> Rect {
    Rect::new(at.x, at.y, tile_w, tile_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TW: i32 = 130;
    const TH: i32 = 66;

    #[test]
    fn demo_camera_range() {
        let range = visible_cells(Rect::new(0, 0, 800, 500), TW, TH, 20, 20);
        assert_eq!(range.rows, 0..8);
        assert_eq!(range.cols, 0..14);
        assert_eq!(range.len(), 8 * 14);
    }

    #[test]
    fn range_is_clamped_to_extent() {
        let range = visible_cells(Rect::new(0, 0, 800, 500), TW, TH, 5, 10);
        assert_eq!(range.rows, 0..5);
        assert_eq!(range.cols, 0..10);
    }

    #[test]
    fn iterates_rows_outer_columns_inner() {
        let range = CellRange { rows: 2..4, cols: 5..7 };
        let cells: Vec<_> = range.iter().collect();
        assert_eq!(
            cells,
            vec![
                CellCoord::new(2, 5),
                CellCoord::new(2, 6),
                CellCoord::new(3, 5),
                CellCoord::new(3, 6)
            ]
        );
    }

    #[test]
    fn camera_above_map_sees_nothing() {
        let range = visible_cells(Rect::new(-5000, -5000, 800, 500), TW, TH, 20, 20);
        assert!(range.is_empty());
        assert_eq!(range.iter().count(), 0);
    }

    #[test]
    fn camera_below_map_sees_nothing() {
        let range = visible_cells(Rect::new(0, 100_000, 800, 500), TW, TH, 20, 20);
        assert!(range.is_empty());
    }

    #[test]
    fn camera_right_of_map_sees_nothing() {
        // every row index is negative out here
        let range = visible_cells(Rect::new(100_000, 0, 800, 500), TW, TH, 20, 20);
        assert!(range.rows.is_empty());
        assert!(range.is_empty());
    }

    #[test]
    fn tile_bounds_use_catalog_size() {
        assert_eq!(tile_bounds(Point::new(-1000, -1000), TW, TH), Rect::new(-1000, -1000, 130, 66));
    }
}
