//! This module contains the logic for checking Sudoku grids against the
//! rules of the game.
//!
//! A grid is considered valid if none of its 27 units (9 rows, 9 columns,
//! and 9 boxes) contains the same digit twice. Empty cells never conflict
//! with anything, so partially filled grids can be checked as well. The
//! whole-grid check is exposed as [is_valid], the per-cell safety check used
//! by the solver and the generator as [is_safe].

use crate::{BOX_SIZE, SIZE, SudokuGrid};

/// Indicates whether the given unit contains no duplicate digits. The unit
/// is provided as an iterator over the contents of its nine cells.
fn no_duplicates(unit: impl Iterator<Item = Option<u8>>) -> bool {
    let mut seen = 0u16;

    for cell in unit {
        if let Some(number) = cell {
            let bit = 1u16 << number;

            if seen & bit != 0 {
                return false;
            }

            seen |= bit;
        }
    }

    true
}

/// Indicates whether the given [SudokuGrid] violates no Sudoku rule, that
/// is, no row, column, or box contains a duplicate digit. Both fully and
/// partially filled grids can be checked; empty cells are ignored. The check
/// stops at the first violated unit.
pub fn is_valid(grid: &SudokuGrid) -> bool {
    for i in 0..SIZE {
        let row = (0..SIZE).map(|column| grid.get_cell(column, i).unwrap());
        let column = (0..SIZE).map(|row| grid.get_cell(i, row).unwrap());

        if !no_duplicates(row) || !no_duplicates(column) {
            return false;
        }
    }

    for box_column in (0..SIZE).step_by(BOX_SIZE) {
        for box_row in (0..SIZE).step_by(BOX_SIZE) {
            let cells = (0..SIZE).map(|i| {
                let column = box_column + i % BOX_SIZE;
                let row = box_row + i / BOX_SIZE;
                grid.get_cell(column, row).unwrap()
            });

            if !no_duplicates(cells) {
                return false;
            }
        }
    }

    true
}

fn row_free_of(grid: &SudokuGrid, column: usize, row: usize, number: u8)
        -> bool {
    for other_column in 0..SIZE {
        if other_column != column &&
                grid.has_number(other_column, row, number).unwrap() {
            return false;
        }
    }

    true
}

fn column_free_of(grid: &SudokuGrid, column: usize, row: usize, number: u8)
        -> bool {
    for other_row in 0..SIZE {
        if other_row != row &&
                grid.has_number(column, other_row, number).unwrap() {
            return false;
        }
    }

    true
}

fn box_free_of(grid: &SudokuGrid, column: usize, row: usize, number: u8)
        -> bool {
    let box_column = (column / BOX_SIZE) * BOX_SIZE;
    let box_row = (row / BOX_SIZE) * BOX_SIZE;

    for other_row in box_row..(box_row + BOX_SIZE) {
        for other_column in box_column..(box_column + BOX_SIZE) {
            // cells sharing the row or column were already checked
            if other_row != row && other_column != column &&
                    grid.has_number(other_column, other_row, number)
                        .unwrap() {
                return false;
            }
        }
    }

    true
}

/// Indicates whether the given `number` could be placed in the cell
/// specified by `column` and `row` without violating a Sudoku rule. That is
/// the case iff `number` does not already appear elsewhere in the cell's
/// row, column, or box. The content of the checked cell itself is ignored.
///
/// Both `column` and `row` must be in the range `[0, 9[`.
pub fn is_safe(grid: &SudokuGrid, column: usize, row: usize, number: u8)
        -> bool {
    row_free_of(grid, column, row, number) &&
        column_free_of(grid, column, row, number) &&
        box_free_of(grid, column, row, number)
}
