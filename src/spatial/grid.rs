use serde::{Deserialize, Serialize};

/// Identifier of a tile definition in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Raw numeric id.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// A (row, column) grid address. Signed, since projected points may land
/// outside the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellCoord {
    /// Row index (`i`)
    pub row: i32,
    /// Column index (`j`)
    pub col: i32,
}

impl CellCoord {
    /// Creates a coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        CellCoord { row, col }
    }
}

/// Contents of one grid cell: layers painted in order, each a run of tiles
/// painted in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Layer stack, bottom first.
    pub layers: Vec<Vec<TileId>>,
}

impl Cell {
    /// Iterates every tile of every layer in paint order.
    pub fn tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.layers.iter().flat_map(|layer| layer.iter().copied())
    }
}

/// Dense, fixed-extent layered map stored row-major.
///
/// Every coordinate in `[0, rows) × [0, cols)` has a cell. Addressing a cell
/// outside that range is a bug in the caller and panics.
#[derive(Debug, Clone)]
pub struct WorldGrid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

impl WorldGrid {
    /// Builds a `rows × cols` grid where every cell starts as a copy of
    /// `template`.
    pub fn filled(rows: i32, cols: i32, template: &[Vec<TileId>]) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "world grid extent must be positive, got {}x{}",
            rows,
            cols
        );
        let cell = Cell {
            layers: template.to_vec(),
        };
        WorldGrid {
            rows,
            cols,
            cells: vec![cell; (rows * cols) as usize],
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// True when `coord` lies inside the extent.
    #[inline]
    pub fn contains(&self, coord: CellCoord) -> bool {
        (0..self.rows).contains(&coord.row) && (0..self.cols).contains(&coord.col)
    }

    #[inline]
    fn index_of(&self, coord: CellCoord) -> usize {
        assert!(
            self.contains(coord),
            "cell ({}, {}) is outside the {}x{} world grid",
            coord.row,
            coord.col,
            self.rows,
            self.cols
        );
        (coord.row * self.cols + coord.col) as usize
    }

    /// Returns the cell at `coord`. Panics when out of range.
    #[inline]
    pub fn cell(&self, coord: CellCoord) -> &Cell {
        &self.cells[self.index_of(coord)]
    }

    /// Replaces one layer of a cell, growing the layer stack if needed.
    pub fn set_layer(&mut self, coord: CellCoord, layer: usize, tiles: Vec<TileId>) {
        let idx = self.index_of(coord);
        let layers = &mut self.cells[idx].layers;
        if layers.len() <= layer {
            layers.resize_with(layer + 1, Vec::new);
        }
        layers[layer] = tiles;
    }

    /// Iterates all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (CellCoord::new(i as i32 / cols, i as i32 % cols), c))
    }
}
