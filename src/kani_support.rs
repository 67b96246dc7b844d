//! Kani arbitrary implementations for grid types.
//!
//! These implementations allow Kani to explore all possible values of
//! our types during model checking.

#[cfg(kani)]
use crate::{Cell, Grid, Player, Position};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 9);
        Position::from_index(index as usize).unwrap()
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Grid {
    fn any() -> Self {
        let cells: [Cell; 9] = kani::any();
        Grid::from_cells(cells)
    }
}
