//! End-to-end checks of the board core as an engine and renderer see it.

use emono::prelude::*;
use emono_test_utils::{ring_layout, valid_sizes};
use std::collections::HashSet;

#[test]
fn corner_kinds_at_fixed_indices() {
    let board = Board::standard();
    let layout = board.layout();
    assert_eq!(layout.space_at(0).unwrap().kind(), SpaceKind::Start);
    assert_eq!(layout.space_at(10).unwrap().kind(), SpaceKind::DetentionCorner);
    assert_eq!(layout.space_at(20).unwrap().kind(), SpaceKind::SafeCorner);
    assert_eq!(
        layout.space_at(30).unwrap().kind(),
        SpaceKind::SendToDetentionCorner
    );
}

#[test]
fn range_failures() {
    let board = Board::standard();
    let out = |index| BoardError::OutOfRange { index, size: 40 };
    assert_eq!(board.layout().space_at(-1).unwrap_err(), out(-1));
    assert_eq!(board.layout().space_at(40).unwrap_err(), out(40));
    assert_eq!(board.perimeter().coordinates_of(40).unwrap_err(), out(40));
}

#[test]
fn grouping_reconstructs_the_board() {
    let layout = Board::standard().layout().clone();
    let mut seen = HashSet::new();
    let mut count = 0;
    for kind in layout.kinds() {
        for space in layout.spaces_of_kind(kind) {
            assert!(seen.insert(space.index), "{space} returned twice");
            count += 1;
        }
    }
    assert_eq!(count, 40);
    assert_eq!(seen.len(), 40);
}

#[test]
fn corners_agree_between_layout_and_grid() {
    let board = Board::standard();
    let cells = board.perimeter().corner_coordinates();
    for (space, cell) in board.layout().corner_spaces().into_iter().zip(cells) {
        assert_eq!(board.perimeter().coordinates_of(space.index).unwrap(), cell);
        assert!(board.perimeter().is_corner(space.index));
    }
}

#[test]
fn every_space_has_a_distinct_cell() {
    let board = Board::standard();
    let cells: HashSet<GridCoord> = board
        .layout()
        .iter()
        .map(|s| board.perimeter().coordinates_of(s.index).unwrap())
        .collect();
    assert_eq!(cells.len(), board.size());
}

#[test]
fn custom_boards_pair_with_matching_grids() {
    for size in valid_sizes(48) {
        let board = Board::new(ring_layout(size).unwrap());
        assert_eq!(board.perimeter().len(), size);
        let side = board.geometry().grid_side() as i32;
        let hits = (0..side)
            .flat_map(|r| (0..side).map(move |c| (r, c)))
            .filter(|&(r, c)| board.perimeter().index_of(r, c).is_some())
            .count();
        assert_eq!(hits, size);
    }
}

#[test]
fn a_full_game_of_moves_stays_on_the_board() {
    let board = Board::standard();
    let mut position = BoardIndex::START;
    let mut passes = 0;
    let rolls = [7u32, 11, 4, 12, 9, 6, 8, 3, 10, 5, 2, 12, 12, 12];
    for roll in rolls {
        let landing = board.land(position, roll).unwrap();
        if landing.movement.passed_start {
            passes += 1;
        }
        position = if landing.space.kind() == SpaceKind::SendToDetentionCorner {
            board
                .perimeter()
                .relocate(board.geometry().corner_index(Corner::Detention))
                .unwrap()
                .new_index
        } else {
            landing.movement.new_index
        };
    }
    let travelled: u32 = rolls.iter().sum();
    assert!(passes >= 1 && passes <= (travelled / 40) as usize + 1);
}

#[test]
fn landing_exports_to_json() {
    let board = Board::standard();
    let landing = board.land(0, 10).unwrap();
    let json = serde_json::to_value(landing).unwrap();
    assert_eq!(json["movement"]["new_index"], 10);
    assert_eq!(json["space"]["type"], "detention_corner");
    assert_eq!(json["coord"]["row"], 10);
    assert_eq!(json["coord"]["col"], 0);
}
