//! Formal verification of structural properties using the Kani model
//! checker.

#[cfg(kani)]
mod proofs {
    use crate::{Cell, Grid, Position};

    /// Proves the position/index mapping is a bijection on 0..9.
    #[kani::proof]
    fn verify_position_index_round_trip() {
        let pos: Position = kani::any();
        let index = pos.to_index();
        assert!(index < 9);
        assert_eq!(Position::from_index(index), Some(pos));
    }

    /// Proves a written cell reads back unchanged.
    #[kani::proof]
    fn verify_set_then_get() {
        let mut grid: Grid = kani::any();
        let pos: Position = kani::any();
        let cell: Cell = kani::any();

        grid.set(pos, cell);

        assert_eq!(grid.get(pos), cell);
    }

    /// Proves writing one cell leaves every other cell untouched.
    #[kani::proof]
    fn verify_set_is_local() {
        let mut grid: Grid = kani::any();
        let before = grid.clone();
        let pos: Position = kani::any();
        let other: Position = kani::any();
        kani::assume(pos != other);

        grid.set(pos, kani::any());

        assert_eq!(grid.get(other), before.get(other));
    }

    /// Proves the row view always presents 3 rows of 3 cells in
    /// row-major order.
    #[kani::proof]
    fn verify_rows_round_trip() {
        let grid: Grid = kani::any();
        let rows = grid.rows();
        assert_eq!(Grid::from_rows(rows), grid);
    }
}
