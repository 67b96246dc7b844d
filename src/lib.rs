//! Pure value types for a tic-tac-toe grid.
//!
//! This crate defines the structural contract for a 3x3 game grid:
//! a [`Grid`] of exactly 3 rows of 3 [`Cell`]s, each cell holding
//! [`Cell::Empty`] or the mark of one of two [`Player`]s. The arity
//! is fixed at the type level; dynamic input goes through a
//! validated [`TryFrom`] boundary that rejects any other shape.
//!
//! Game rules, move validation, and turn handling belong to
//! consumers of these types and are deliberately absent.
//!
//! # Example
//!
//! ```
//! use tictactoe_grid::{Cell, Grid, Player, Position};
//!
//! let mut grid = Grid::new();
//! assert!(grid.is_empty(Position::Center));
//!
//! grid.set(Position::Center, Cell::Occupied(Player::X));
//! assert_eq!(grid.get(Position::Center).player(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod grid;
mod kani_support;
mod position;
mod types;
mod verification;

pub use grid::{Grid, GridError};
pub use position::Position;
pub use types::{Cell, Player};

/// Alias for the marker a player places in a cell.
pub type Mark = Player;
