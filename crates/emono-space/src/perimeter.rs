//! The index ⇄ grid-cell tables.

use crate::movement::{self, MoveResult};
use crate::render::GridRender;
use emono_core::{BoardError, BoardGeometry, BoardIndex, Corner, GeometryError, GridCoord};
use indexmap::IndexMap;

/// Bijection between track indices and the perimeter cells of the render
/// grid, plus the movement step.
///
/// Both directions are tables built once at construction: `coords[i]` is the
/// cell of index `i`, and `cells` maps each perimeter cell back to its index.
/// Every index has exactly one cell and every perimeter cell exactly one
/// index; interior cells are never addressed.
///
/// # Examples
///
/// ```
/// use emono_core::GridCoord;
/// use emono_space::PerimeterMap;
///
/// let map = PerimeterMap::standard();
/// assert_eq!(map.coordinates_of(0).unwrap(), GridCoord::new(10, 10));
/// assert_eq!(map.coordinates_of(10).unwrap(), GridCoord::new(10, 0));
/// assert_eq!(map.index_of(0, 0).map(|i| i.get()), Some(20));
///
/// // Interior and off-grid probes are simply not found.
/// assert_eq!(map.index_of(5, 5), None);
/// assert_eq!(map.index_of(-1, 3), None);
/// ```
#[derive(Clone, Debug)]
pub struct PerimeterMap {
    geometry: BoardGeometry,
    coords: Vec<GridCoord>,
    cells: IndexMap<GridCoord, BoardIndex>,
}

impl PerimeterMap {
    /// Build the tables for `geometry`.
    pub fn new(geometry: BoardGeometry) -> Self {
        let coords: Vec<GridCoord> = (0..geometry.board_size() as u32)
            .map(|i| perimeter_coord(&geometry, i))
            .collect();
        let cells = coords
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, BoardIndex::new(i as u32)))
            .collect();
        Self {
            geometry,
            coords,
            cells,
        }
    }

    /// The standard 40-space board on an 11x11 grid.
    pub fn standard() -> Self {
        Self::new(BoardGeometry::standard())
    }

    /// Tables for a track of `board_size` spaces.
    pub fn for_board_size(board_size: usize) -> Result<Self, GeometryError> {
        Ok(Self::new(BoardGeometry::new(board_size)?))
    }

    /// The geometry these tables were built for.
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Number of track spaces (and of perimeter cells).
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always returns `false`: geometry rejects boards under four spaces.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Side length of the square grid.
    pub fn grid_side(&self) -> u32 {
        self.geometry.grid_side()
    }

    /// Cell of every index, in index order.
    pub fn coordinates(&self) -> &[GridCoord] {
        &self.coords
    }

    /// Grid cell of `index`. Fails with `OutOfRange` off the board.
    pub fn coordinates_of(&self, index: impl Into<i64>) -> Result<GridCoord, BoardError> {
        let index = self.geometry.index(index)?;
        Ok(self.coords[index.as_usize()])
    }

    /// Index of the cell at `(row, col)`.
    ///
    /// `None` for interior, negative and out-of-grid cells; renderers probe
    /// arbitrary cells, so a miss is not an error.
    pub fn index_of(&self, row: i32, col: i32) -> Option<BoardIndex> {
        let (Ok(row), Ok(col)) = (u32::try_from(row), u32::try_from(col)) else {
            log::trace!("no board space at [{row}, {col}]");
            return None;
        };
        self.index_at(GridCoord::new(row, col))
    }

    /// Index of `coord`, if it is a perimeter cell.
    pub fn index_at(&self, coord: GridCoord) -> Option<BoardIndex> {
        let found = self.cells.get(&coord).copied();
        if found.is_none() {
            log::trace!("no board space at {coord}");
        }
        found
    }

    /// Grid cells of the four corners, in track order.
    pub fn corner_coordinates(&self) -> [GridCoord; 4] {
        Corner::ALL.map(|c| self.coords[self.geometry.corner_index(c).as_usize()])
    }

    /// Whether `index` is one of the four corners.
    pub fn is_corner(&self, index: BoardIndex) -> bool {
        self.geometry.corner_at(index).is_some()
    }

    /// Move `steps` forward from `current`. See [`movement::advance`].
    pub fn advance(&self, current: impl Into<i64>, steps: u32) -> Result<MoveResult, BoardError> {
        movement::advance(&self.geometry, current, steps)
    }

    /// Forward distance between two indices. See [`movement::steps_between`].
    pub fn steps_between(
        &self,
        from: impl Into<i64>,
        to: impl Into<i64>,
    ) -> Result<u32, BoardError> {
        movement::steps_between(&self.geometry, from, to)
    }

    /// Travel forward to `target`. See [`movement::advance_to`].
    pub fn advance_to(
        &self,
        current: impl Into<i64>,
        target: impl Into<i64>,
    ) -> Result<MoveResult, BoardError> {
        movement::advance_to(&self.geometry, current, target)
    }

    /// Jump straight to `target`. See [`movement::relocate`].
    pub fn relocate(&self, target: impl Into<i64>) -> Result<MoveResult, BoardError> {
        movement::relocate(&self.geometry, target)
    }

    /// ASCII debug view with each index drawn in its cell.
    pub fn render_grid(&self) -> String {
        GridRender::new(self).to_string()
    }
}

impl Default for PerimeterMap {
    fn default() -> Self {
        Self::standard()
    }
}

/// Cell of index `i`, walking clockwise from the bottom-right corner.
fn perimeter_coord(geometry: &BoardGeometry, i: u32) -> GridCoord {
    let edge = geometry.edge_len();
    let offset = i % edge;
    match i / edge {
        0 => GridCoord::new(edge, edge - offset),
        1 => GridCoord::new(edge - offset, 0),
        2 => GridCoord::new(0, offset),
        _ => GridCoord::new(offset, edge),
    }
}
