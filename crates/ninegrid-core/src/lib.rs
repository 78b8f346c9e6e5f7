//! Core data structures for the Ninegrid Sudoku engine.
//!
//! This crate provides the fundamental types shared by puzzle generation,
//! game play, and persistence:
//!
//! - [`Digit`]: a type-safe Sudoku digit in the range 1-9
//! - [`Position`]: a cell coordinate on the 9×9 board, with peer enumeration
//! - [`DigitSet`]: a bitset of digits, used for candidate (pencil) marks
//! - [`DigitGrid`]: a 9×9 grid of optional digits with the row/column/box
//!   legality predicate
//!
//! # Examples
//!
//! ```
//! use ninegrid_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//!
//! // 5 is no longer legal anywhere in row 0, column 0, or the top-left box
//! assert!(!grid.is_legal(Position::new(8, 0), Digit::D5));
//! assert!(grid.is_legal(Position::new(8, 8), Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridParseError},
    position::Position,
};
