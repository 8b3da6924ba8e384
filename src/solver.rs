//! This module contains the logic for solving Sudoku.
//!
//! The [BacktrackingSolver](struct.BacktrackingSolver.html) finds a
//! completion of any solvable grid by exhaustive depth-first search and
//! reports [NoSolutionError](../error/struct.NoSolutionError.html) if no
//! completion exists.

use crate::{SIZE, SudokuGrid};
use crate::error::NoSolutionError;
use crate::validator;

/// Finds the first empty cell of the grid in row-major order, i.e. scanning
/// each row left to right before moving to the next one. Returns its
/// coordinates as `(column, row)`, or `None` if the grid is full.
fn find_empty_cell(grid: &SudokuGrid) -> Option<(usize, usize)> {
    for row in 0..SIZE {
        for column in 0..SIZE {
            if grid.get_cell(column, row).unwrap().is_none() {
                return Some((column, row));
            }
        }
    }

    None
}

fn solve_rec(grid: &mut SudokuGrid) -> bool {
    let (column, row) = match find_empty_cell(grid) {
        Some(coordinates) => coordinates,
        None => return true
    };

    for number in 1..=(SIZE as u8) {
        if validator::is_safe(grid, column, row, number) {
            grid.set_cell(column, row, number).unwrap();

            if solve_rec(grid) {
                return true;
            }

            grid.clear_cell(column, row).unwrap();
        }
    }

    false
}

fn count_solutions_rec(grid: &mut SudokuGrid, limit: usize) -> usize {
    let (column, row) = match find_empty_cell(grid) {
        Some(coordinates) => coordinates,
        None => return 1
    };

    let mut found = 0;

    for number in 1..=(SIZE as u8) {
        if validator::is_safe(grid, column, row, number) {
            grid.set_cell(column, row, number).unwrap();
            found += count_solutions_rec(grid, limit - found);
            grid.clear_cell(column, row).unwrap();

            if found >= limit {
                break;
            }
        }
    }

    found
}

/// Counts the completions of the given grid that satisfy all Sudoku rules,
/// stopping as soon as `limit` of them have been found. Used by the
/// generator to decide whether a puzzle is uniquely solvable without
/// enumerating the full solution space.
pub(crate) fn count_solutions(grid: &SudokuGrid, limit: usize) -> usize {
    if !validator::is_valid(grid) {
        return 0;
    }

    let mut scratch = grid.clone();
    count_solutions_rec(&mut scratch, limit)
}

/// A perfect solver which completes Sudoku grids by recursively testing all
/// safe digits for each empty cell, undoing every assignment that did not
/// lead to a solution. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// grid has many missing digits. For practical 9x9 puzzles the safety check
/// prunes almost all branches.
/// * It finds a solution whenever one exists, and proves the absence of a
/// solution otherwise.
///
/// The search order is fixed: empty cells are chosen in row-major order and
/// candidate digits are tried in ascending order. The first complete
/// solution found is returned, so solving is fully deterministic even for
/// grids with more than one solution.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    /// Solves the given [SudokuGrid], returning a grid in which all empty
    /// cells have been filled such that no Sudoku rule is violated. All
    /// cells that were filled in the input are unchanged in the output. The
    /// input grid itself is not modified; the search operates on a private
    /// copy.
    ///
    /// # Errors
    ///
    /// `NoSolutionError` if exhaustive search proves that no assignment of
    /// the empty cells satisfies all rules, or if the input grid already
    /// contains a duplicate in some unit.
    pub fn solve(&self, grid: &SudokuGrid)
            -> Result<SudokuGrid, NoSolutionError> {
        if !validator::is_valid(grid) {
            return Err(NoSolutionError);
        }

        let mut scratch = grid.clone();

        if solve_rec(&mut scratch) {
            Ok(scratch)
        }
        else {
            Err(NoSolutionError)
        }
    }
}
