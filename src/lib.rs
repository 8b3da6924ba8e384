// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a small, easy-to-understand engine for classic 9x9
//! Sudoku. It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking validity of fully or partially filled grids according to
//! standard Sudoku rules
//! * Solving Sudoku using a perfect backtracking algorithm
//! * Deriving a deterministic daily puzzle from a calendar date
//!
//! The engine is presentation-agnostic: it consumes and produces plain 9x9
//! grids of digits and performs no I/O. All entry points are pure functions
//! of their input, so independent grids may be processed from multiple
//! threads without synchronization.
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code. Codes can be
//! used to exchange grids, while pretty prints can be used to display a grid
//! in a clearer manner.
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 5).unwrap();
//! assert_eq!(Some(5), grid.get_cell(0, 0).unwrap());
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! The [validator] module checks whether a grid violates any of the 27 unit
//! constraints (9 rows, 9 columns, 9 boxes). Empty cells never conflict, so
//! a partially filled grid is valid as long as no unit contains a duplicate
//! digit.
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//! use sudoku_engine::validator;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 5).unwrap();
//! grid.set_cell(1, 0, 5).unwrap();
//!
//! // Two 5s in the top row.
//! assert!(!validator::is_valid(&grid));
//! ```
//!
//! # Solving Sudoku
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) finds a completion
//! of any solvable grid by depth-first search and reports
//! [NoSolutionError](error::NoSolutionError) otherwise. Cells that were
//! filled in the input are never touched by the search.
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//! use sudoku_engine::solver::BacktrackingSolver;
//! use sudoku_engine::validator;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 5).unwrap();
//!
//! let solution = BacktrackingSolver.solve(&grid).unwrap();
//!
//! assert!(solution.is_full());
//! assert!(validator::is_valid(&solution));
//! assert_eq!(Some(5), solution.get_cell(0, 0).unwrap());
//! ```
//!
//! # Daily puzzles
//!
//! [daily_puzzle](generator::daily_puzzle) derives a puzzle from a
//! [CalendarDate](generator::CalendarDate). The derivation is seeded by the
//! date alone, so the same date always yields the same puzzle.
//!
//! ```
//! use sudoku_engine::generator::{daily_puzzle, CalendarDate};
//!
//! let today = CalendarDate::new(2024, 3, 7);
//! assert_eq!(daily_puzzle(today), daily_puzzle(today));
//! ```

pub mod error;
pub mod generator;
pub mod solver;
pub mod validator;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// The number of columns and rows of a Sudoku grid.
pub const SIZE: usize = 9;

/// The width and height of one of the nine 3x3 boxes of a Sudoku grid.
pub const BOX_SIZE: usize = 3;

const CELL_COUNT: usize = SIZE * SIZE;

/// A 9x9 Sudoku grid composed of 81 cells, each of which may or may not be
/// occupied by a digit from 1 to 9. The grid is a plain value: it can be
/// cloned and compared freely and carries no identity beyond its content.
///
/// In the flat numeric encoding used by [SudokuGrid::from_values] and
/// [SudokuGrid::to_values], an empty cell is represented by 0.
///
/// `SudokuGrid` implements `Display`, rendering the grid with box-drawing
/// characters and thick separators around the 3x3 boxes:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 5 │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ...
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SudokuGrid {
    cells: Vec<Option<u8>>
}

fn to_char(cell: Option<u8>) -> char {
    if let Some(n) = cell {
        (b'0' + n) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char) -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);
    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗')
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢')
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣')
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝')
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ', '║')
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BOX_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str("\n")?;
            f.write_str(content_row(self, y).as_str())?;
            f.write_str("\n")?;
        }

        f.write_str(bottom_row().as_str())
    }
}

fn to_string(cell: &Option<u8>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

impl SudokuGrid {

    /// Creates a new, empty 9x9 Sudoku grid.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of exactly 81 entries, which are either empty or a digit from 1
    /// to 9. The entries are assigned left-to-right, top-to-bottom, where
    /// each row is completed before the next one is started. Whitespace in
    /// the entries is ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code
    /// `5, , , , , , , , ,<72 further entries>` parses to a grid whose
    /// top-left cell contains a 5.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<u8>()?;

            if number == 0 || number as usize > SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse](#method.parse). That is, a grid that is converted
    /// to a string and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_engine::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Creates a grid from a plain 9x9 matrix of numbers, where 0 denotes an
    /// empty cell and 1 to 9 denote a placed digit. `values` is indexed by
    /// row first, i.e. `values[row][column]`.
    ///
    /// # Errors
    ///
    /// `SudokuError::InvalidNumber` if any value is greater than 9.
    pub fn from_values(values: &[[u8; SIZE]; SIZE])
            -> SudokuResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();

        for (row, row_values) in values.iter().enumerate() {
            for (column, &value) in row_values.iter().enumerate() {
                if value as usize > SIZE {
                    return Err(SudokuError::InvalidNumber);
                }

                if value != 0 {
                    grid.cells[index(column, row)] = Some(value);
                }
            }
        }

        Ok(grid)
    }

    /// Converts the grid into a plain 9x9 matrix of numbers, where 0 denotes
    /// an empty cell. This is the inverse of [SudokuGrid::from_values]. The
    /// result is indexed by row first, i.e. `values[row][column]`.
    pub fn to_values(&self) -> [[u8; SIZE]; SIZE] {
        let mut values = [[0u8; SIZE]; SIZE];

        for row in 0..SIZE {
            for column in 0..SIZE {
                values[row][column] =
                    self.cells[index(column, row)].unwrap_or(0);
            }
        }

        values
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<u8>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: u8)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: u8)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number as usize > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c.is_none())
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(_) => self_cell == other_cell,
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Indicates whether the given grid is a valid solution to the puzzle
    /// posed by this grid. That is the case if all digits of this grid can
    /// be found in `solution`, it satisfies all Sudoku rules, and it is
    /// full.
    pub fn is_valid_solution(&self, solution: &SudokuGrid) -> bool {
        self.is_subset(solution) &&
            validator::is_valid(solution) &&
            solution.is_full()
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<u8>> {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const EMPTY_GRID_CODE: &str =
        ",,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,\
         ,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,";

    /// A full grid satisfying all Sudoku rules, obtained by shifting the
    /// digits 1 to 9 across rows.
    const SOLVED_GRID_CODE: &str = "\
        1,2,3,4,5,6,7,8,9,\
        4,5,6,7,8,9,1,2,3,\
        7,8,9,1,2,3,4,5,6,\
        2,3,4,5,6,7,8,9,1,\
        5,6,7,8,9,1,2,3,4,\
        8,9,1,2,3,4,5,6,7,\
        3,4,5,6,7,8,9,1,2,\
        6,7,8,9,1,2,3,4,5,\
        9,1,2,3,4,5,6,7,8";

    #[test]
    fn parse_ok() {
        let grid_res = SudokuGrid::parse("\
            5, , , ,3, , , , ,\
             , ,2, , , , , , ,\
             , , , , , , ,1, ,\
             , , , , , , , , ,\
             , ,7, , , , , , ,\
             , , , , , ,4, , ,\
             , , , ,9, , , , ,\
             , , , , , , , , ,\
             , , , , , , , ,6");

        if let Ok(grid) = grid_res {
            assert_eq!(Some(5), grid.get_cell(0, 0).unwrap());
            assert_eq!(Some(3), grid.get_cell(4, 0).unwrap());
            assert_eq!(Some(2), grid.get_cell(2, 1).unwrap());
            assert_eq!(Some(1), grid.get_cell(7, 2).unwrap());
            assert_eq!(Some(7), grid.get_cell(2, 4).unwrap());
            assert_eq!(Some(4), grid.get_cell(6, 5).unwrap());
            assert_eq!(Some(9), grid.get_cell(4, 6).unwrap());
            assert_eq!(Some(6), grid.get_cell(8, 8).unwrap());
            assert_eq!(None, grid.get_cell(1, 0).unwrap());
            assert_eq!(None, grid.get_cell(8, 7).unwrap());
            assert_eq!(8, grid.count_clues());
        }
        else {
            panic!("Parsing valid grid failed.");
        }
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse("1,2,3"));

        let too_long = format!("{},", EMPTY_GRID_CODE);
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(too_long.as_str()));
    }

    #[test]
    fn parse_number_format_error() {
        let code = EMPTY_GRID_CODE.replacen(",,", ",#,", 1);
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn parse_invalid_number() {
        let zero = EMPTY_GRID_CODE.replacen(",,", ",0,", 1);
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(zero.as_str()));

        let too_large = EMPTY_GRID_CODE.replacen(",,", ",10,", 1);
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(too_large.as_str()));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let mut grid = SudokuGrid::new();

        assert_eq!(EMPTY_GRID_CODE, grid.to_parseable_string());

        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(4, 4, 9).unwrap();
        grid.set_cell(8, 8, 5).unwrap();

        let code = grid.to_parseable_string();
        assert_eq!(grid, SudokuGrid::parse(code.as_str()).unwrap());
    }

    #[test]
    fn from_values_matches_parse() {
        let mut values = [[0u8; SIZE]; SIZE];
        values[0][0] = 5;
        values[2][7] = 1;
        values[8][8] = 6;

        let grid = SudokuGrid::from_values(&values).unwrap();

        assert_eq!(Some(5), grid.get_cell(0, 0).unwrap());
        assert_eq!(Some(1), grid.get_cell(7, 2).unwrap());
        assert_eq!(Some(6), grid.get_cell(8, 8).unwrap());
        assert_eq!(None, grid.get_cell(3, 3).unwrap());
        assert_eq!(values, grid.to_values());
    }

    #[test]
    fn from_values_rejects_invalid_number() {
        let mut values = [[0u8; SIZE]; SIZE];
        values[1][1] = 10;

        assert_eq!(Err(SudokuError::InvalidNumber),
            SudokuGrid::from_values(&values));
    }

    #[test]
    fn cell_access_out_of_bounds() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(0, 9));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(9, 9, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(0, 10));
    }

    #[test]
    fn set_cell_rejects_invalid_number() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 10));
        assert_eq!(None, grid.get_cell(0, 0).unwrap());
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = SudokuGrid::new();
        let mut partial = SudokuGrid::new();
        partial.set_cell(0, 0, 1).unwrap();
        partial.set_cell(3, 5, 2).unwrap();
        partial.set_cell(8, 8, 3).unwrap();
        let full = SudokuGrid::parse(SOLVED_GRID_CODE).unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(3, partial.count_clues());
        assert_eq!(CELL_COUNT, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    fn assert_subset_relation(a: &SudokuGrid, b: &SudokuGrid,
            a_subset_b: bool, b_subset_a: bool) {
        assert!(a.is_subset(b) == a_subset_b);
        assert!(a.is_superset(b) == b_subset_a);
        assert!(b.is_subset(a) == b_subset_a);
        assert!(b.is_superset(a) == a_subset_b);
    }

    #[test]
    fn empty_is_subset() {
        let empty = SudokuGrid::new();
        let full = SudokuGrid::parse(SOLVED_GRID_CODE).unwrap();

        assert_subset_relation(&empty, &empty, true, true);
        assert_subset_relation(&empty, &full, true, false);
    }

    #[test]
    fn true_subset() {
        let full = SudokuGrid::parse(SOLVED_GRID_CODE).unwrap();
        let mut partial = full.clone();
        partial.clear_cell(2, 2).unwrap();
        partial.clear_cell(5, 7).unwrap();

        assert_subset_relation(&partial, &full, true, false);
    }

    #[test]
    fn unrelated_grids_not_subsets() {
        let full = SudokuGrid::parse(SOLVED_GRID_CODE).unwrap();
        let mut changed = full.clone();

        // (0, 0) is 1 in the solved grid
        changed.set_cell(0, 0, 2).unwrap();

        assert_subset_relation(&changed, &full, false, false);
    }

    fn solution_example_puzzle() -> SudokuGrid {
        let mut puzzle = SudokuGrid::parse(SOLVED_GRID_CODE).unwrap();

        // Uncover the top-left box and the last row.
        for column in 0..BOX_SIZE {
            for row in 0..BOX_SIZE {
                puzzle.clear_cell(column, row).unwrap();
            }
        }

        for column in 0..SIZE {
            puzzle.clear_cell(column, 8).unwrap();
        }

        puzzle
    }

    #[test]
    fn solution_not_full() {
        let puzzle = solution_example_puzzle();
        let mut solution = SudokuGrid::parse(SOLVED_GRID_CODE).unwrap();
        solution.clear_cell(0, 0).unwrap();

        assert!(!puzzle.is_valid_solution(&solution));
    }

    #[test]
    fn solution_not_superset() {
        let puzzle = solution_example_puzzle();
        let solved = SudokuGrid::parse(SOLVED_GRID_CODE).unwrap();

        // Relabeling every digit keeps the grid full and rule-conform, but
        // no longer matches the puzzle's givens.
        let mut values = solved.to_values();

        for row in values.iter_mut() {
            for value in row.iter_mut() {
                *value = *value % 9 + 1;
            }
        }

        let relabeled = SudokuGrid::from_values(&values).unwrap();

        assert!(relabeled.is_full());
        assert!(validator::is_valid(&relabeled));
        assert!(!puzzle.is_valid_solution(&relabeled));
    }

    #[test]
    fn solution_violates_rules() {
        let puzzle = solution_example_puzzle();
        let mut solution = SudokuGrid::parse(SOLVED_GRID_CODE).unwrap();

        // Both cells are uncovered in the puzzle, so the result remains a
        // superset, but row 8 now has two 1s.
        solution.set_cell(0, 8, 1).unwrap();
        solution.set_cell(1, 8, 1).unwrap();

        assert!(!puzzle.is_valid_solution(&solution));
    }

    #[test]
    fn solution_correct() {
        let puzzle = solution_example_puzzle();
        let solution = SudokuGrid::parse(SOLVED_GRID_CODE).unwrap();

        assert!(puzzle.is_valid_solution(&solution));
    }

    #[test]
    fn display_shows_digits_and_boxes() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 5).unwrap();
        grid.set_cell(8, 8, 9).unwrap();

        let printed = format!("{}", grid);
        let lines: Vec<&str> = printed.lines().collect();

        assert_eq!(19, lines.len());
        assert!(lines[0].starts_with('╔'));
        assert!(lines[1].contains('5'));
        assert!(lines[17].contains('9'));
        assert!(lines[18].ends_with('╝'));
    }

    #[test]
    fn serde_round_trip() {
        let grid = SudokuGrid::parse(SOLVED_GRID_CODE).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: SudokuGrid =
            serde_json::from_str(json.as_str()).unwrap();

        assert_eq!(grid, deserialized);
    }
}
