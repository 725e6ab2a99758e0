//! Perimeter mapping compliance helpers.
//!
//! Each function checks one invariant of the index ⇄ cell bijection.
//! Reused by the unit tests for every board size.

use crate::perimeter::PerimeterMap;
use emono_core::{BoardIndex, GridCoord};
use indexmap::IndexSet;

/// Assert that no two indices share a cell and every index has one.
pub fn assert_injective(map: &PerimeterMap) {
    assert_eq!(
        map.coordinates().len(),
        map.geometry().board_size(),
        "coordinate table length != board size"
    );
    let unique: IndexSet<GridCoord> = map.coordinates().iter().copied().collect();
    assert_eq!(
        unique.len(),
        map.len(),
        "coordinate table maps two indices to the same cell"
    );
}

/// Assert `index_of(coordinates_of(i)) == i` for every index.
pub fn assert_roundtrip(map: &PerimeterMap) {
    for i in 0..map.len() as u32 {
        let coord = map
            .coordinates_of(i)
            .expect("index below board size must map");
        assert_eq!(
            map.index_of(coord.row as i32, coord.col as i32),
            Some(BoardIndex::new(i)),
            "index {i} -> {coord} does not map back"
        );
    }
}

/// Assert every produced cell is on the grid boundary, and every boundary
/// cell is produced.
pub fn assert_covers_perimeter(map: &PerimeterMap) {
    let side = map.grid_side();
    for &coord in map.coordinates() {
        assert!(
            coord.is_on_perimeter(side),
            "{coord} is not on the {side}x{side} perimeter"
        );
    }
    for row in 0..side {
        for col in 0..side {
            let coord = GridCoord::new(row, col);
            assert_eq!(
                map.index_at(coord).is_some(),
                coord.is_on_perimeter(side),
                "{coord}: perimeter membership and lookup disagree"
            );
        }
    }
}

/// Assert consecutive indices are one unit step apart, including the
/// wrap from the last index back to 0.
pub fn assert_closed_loop(map: &PerimeterMap) {
    let coords = map.coordinates();
    for (i, &a) in coords.iter().enumerate() {
        let b = coords[(i + 1) % coords.len()];
        assert_eq!(
            a.manhattan(b),
            1,
            "index {i} at {a} is not adjacent to its successor at {b}"
        );
    }
}

/// Assert the four corner indices land on the four grid corners.
pub fn assert_corners(map: &PerimeterMap) {
    let last = map.grid_side() - 1;
    let expected = [
        GridCoord::new(last, last),
        GridCoord::new(last, 0),
        GridCoord::new(0, 0),
        GridCoord::new(0, last),
    ];
    assert_eq!(map.corner_coordinates(), expected);
}

/// Assert two calls return identical tables.
pub fn assert_deterministic(map: &PerimeterMap) {
    let rebuilt = PerimeterMap::new(map.geometry());
    assert_eq!(map.coordinates(), rebuilt.coordinates());
}

/// Run every compliance check on a map.
pub fn run_full_compliance(map: &PerimeterMap) {
    assert_injective(map);
    assert_roundtrip(map);
    assert_covers_perimeter(map);
    assert_closed_loop(map);
    assert_corners(map);
    assert_deterministic(map);
}
