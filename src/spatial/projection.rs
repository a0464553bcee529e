use super::CellCoord;
use crate::geom::Point;

/// Extra pixels added to the tile width when inverting the projection.
///
/// Matches the one-pixel gap `grid_to_screen` leaves on each side of a tile
/// (`tw / 2 + 1`), so seams between 130×66 tiles map back to the right cell.
pub const SEAM_PAD: i32 = 2;

/// Maps a point in projected world-pixel space to the cell whose diamond
/// contains it.
///
/// Origin is the anchor of cell (0, 0).
#[inline]
pub fn screen_to_grid(p: Point, tile_w: i32, tile_h: i32) -> CellCoord {
    let x = p.x as f64;
    let y = p.y as f64;
    let th = tile_h as f64;
    let tw = (tile_w + SEAM_PAD) as f64;
    CellCoord::new((y / th - x / tw).floor() as i32, (y / th + x / tw).floor() as i32)
}

/// Maps a cell to its anchor point in projected world-pixel space.
///
/// Integer arithmetic; both divisions truncate.
#[inline]
pub fn grid_to_screen(cell: CellCoord, tile_w: i32, tile_h: i32) -> Point {
    let step = tile_w / 2 + 1;
    Point::new(
        cell.col * step - cell.row * step,
        (cell.row + cell.col) * tile_h / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TW: i32 = 130;
    const TH: i32 = 66;

    #[test]
    fn known_anchors() {
        assert_eq!(grid_to_screen(CellCoord::new(0, 0), TW, TH), Point::new(0, 0));
        assert_eq!(grid_to_screen(CellCoord::new(1, 0), TW, TH), Point::new(-66, 33));
        assert_eq!(grid_to_screen(CellCoord::new(0, 1), TW, TH), Point::new(66, 33));
        assert_eq!(grid_to_screen(CellCoord::new(19, 19), TW, TH), Point::new(0, 1254));
    }

    #[test]
    fn round_trip_over_demo_extent() {
        for row in 0..20 {
            for col in 0..20 {
                let cell = CellCoord::new(row, col);
                let anchor = grid_to_screen(cell, TW, TH);
                assert_eq!(screen_to_grid(anchor, TW, TH), cell, "anchor {:?}", anchor);
            }
        }
    }

    #[test]
    fn points_left_and_above_origin_floor_to_negative_cells() {
        assert_eq!(screen_to_grid(Point::new(0, -1), TW, TH), CellCoord::new(-1, -1));
        assert_eq!(screen_to_grid(Point::new(-1, 0), TW, TH), CellCoord::new(0, -1));
        assert_eq!(screen_to_grid(Point::new(1, 0), TW, TH), CellCoord::new(-1, 0));
    }

    #[test]
    fn viewport_corners_of_demo_camera() {
        // camera (0, 0, 800, 500)
        assert_eq!(screen_to_grid(Point::new(0, 0), TW, TH), CellCoord::new(0, 0));
        assert_eq!(screen_to_grid(Point::new(800, 0), TW, TH), CellCoord::new(-7, 6));
        assert_eq!(screen_to_grid(Point::new(800, 500), TW, TH), CellCoord::new(1, 13));
        assert_eq!(screen_to_grid(Point::new(0, 500), TW, TH), CellCoord::new(7, 7));
    }
}
