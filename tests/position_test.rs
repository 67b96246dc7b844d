//! Tests for the grid position enum.

use strum::IntoEnumIterator;
use tictactoe_grid::Position;

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_index_round_trip() {
    for pos in Position::iter() {
        assert_eq!(Position::from_index(pos.to_index()), Some(pos));
    }
}

#[test]
fn test_all_covers_every_position() {
    assert_eq!(Position::ALL.len(), 9);
    for (index, pos) in Position::ALL.iter().enumerate() {
        assert_eq!(pos.to_index(), index);
    }
    assert_eq!(Position::iter().count(), 9);
}

#[test]
fn test_row_and_column() {
    assert_eq!(Position::TopLeft.row(), 0);
    assert_eq!(Position::TopLeft.column(), 0);
    assert_eq!(Position::MiddleRight.row(), 1);
    assert_eq!(Position::MiddleRight.column(), 2);
    assert_eq!(Position::BottomCenter.row(), 2);
    assert_eq!(Position::BottomCenter.column(), 1);
}

#[test]
fn test_from_row_col() {
    assert_eq!(Position::from_row_col(0, 0), Some(Position::TopLeft));
    assert_eq!(Position::from_row_col(1, 1), Some(Position::Center));
    assert_eq!(Position::from_row_col(2, 2), Some(Position::BottomRight));
    assert_eq!(Position::from_row_col(3, 0), None);
    assert_eq!(Position::from_row_col(0, 3), None);
}

#[test]
fn test_row_col_round_trip() {
    for pos in Position::iter() {
        assert_eq!(Position::from_row_col(pos.row(), pos.column()), Some(pos));
    }
}

#[test]
fn test_display_uses_label() {
    assert_eq!(Position::Center.to_string(), "Center");
    assert_eq!(Position::TopLeft.to_string(), "Top-left");
    assert_eq!(Position::Center.label(), "Center");
}
