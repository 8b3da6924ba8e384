//! This module contains logic for generating Sudoku puzzles.
//!
//! Generation is done by first generating a full grid with a [Generator] and
//! then removing some clues using a [Reducer]. Both are driven by a random
//! number generator; [daily_puzzle] wires them to an RNG seeded by a
//! [CalendarDate], which makes the derived puzzle a deterministic function
//! of the date.

use crate::{SIZE, SudokuGrid};
use crate::error::NoSolutionError;
use crate::solver;
use crate::validator;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::ThreadRng;

use rand_chacha::ChaCha8Rng;

use std::fmt::{self, Display, Formatter};

/// A plain calendar date used to key the daily puzzle. The date is a value
/// type with no relation to the system clock; callers that want "today's"
/// puzzle obtain the current date themselves and pass it in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8
}

impl CalendarDate {

    /// Creates a new calendar date from the given year, month (1 to 12), and
    /// day of month (1 to 31). The components are not validated against the
    /// calendar; two dates yield the same puzzle iff all their components
    /// are equal.
    pub fn new(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate {
            year,
            month,
            day
        }
    }

    /// Maps the date to a seed for the puzzle RNG. The encoding is the
    /// decimal concatenation of year, month, and day, so distinct dates
    /// never collide.
    fn seed(&self) -> u64 {
        self.year as u64 * 10_000 + self.month as u64 * 100 + self.day as u64
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// A generator randomly completes a [SudokuGrid], that is, fills all empty
/// cells such that no Sudoku rule is violated. It uses a random number
/// generator to decide the content. For most cases, sensible defaults are
/// provided by [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid, column: usize, row: usize)
            -> bool {
        if row == SIZE {
            return true;
        }

        let next_column = (column + 1) % SIZE;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).unwrap().is_some() {
            return self.fill_rec(grid, next_column, next_row);
        }

        for number in shuffle(&mut self.rng, 1..=(SIZE as u8)) {
            if validator::is_safe(grid, column, row, number) {
                grid.set_cell(column, row, number).unwrap();

                if self.fill_rec(grid, next_column, next_row) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
            }
        }

        false
    }

    /// Fills the given [SudokuGrid] with random digits such that no Sudoku
    /// rule is violated and all already present digits are kept. If that is
    /// not possible, an error is returned and the grid remains unchanged.
    ///
    /// The given grid is assumed to be rule-conform; a grid that already
    /// contains a duplicate is rejected.
    ///
    /// # Errors
    ///
    /// `NoSolutionError` if no completion of the grid satisfies the rules.
    pub fn fill(&mut self, grid: &mut SudokuGrid)
            -> Result<(), NoSolutionError> {
        if !validator::is_valid(grid) {
            return Err(NoSolutionError);
        }

        if self.fill_rec(grid, 0, 0) {
            Ok(())
        }
        else {
            Err(NoSolutionError)
        }
    }

    /// Generates a new random [SudokuGrid] in which every cell is filled and
    /// no Sudoku rule is violated.
    pub fn generate(&mut self) -> SudokuGrid {
        let mut grid = SudokuGrid::new();

        // filling an empty grid cannot fail
        self.fill(&mut grid).unwrap();
        grid
    }
}

/// A reducer can be applied to the output of a [Generator] to remove digits
/// from the grid as long as it remains uniquely solvable. A random number
/// generator decides which digits are removed.
///
/// [Reducer::new_default] yields a reducer with a [ThreadRng].
pub struct Reducer<R: Rng> {
    rng: R
}

impl Reducer<ThreadRng> {

    /// Creates a new reducer that uses a [ThreadRng] to decide which digits
    /// are removed.
    pub fn new_default() -> Reducer<ThreadRng> {
        Reducer::new(rand::thread_rng())
    }
}

impl<R: Rng> Reducer<R> {

    /// Creates a new reducer that uses the given random number generator to
    /// decide which digits are removed.
    pub fn new(rng: R) -> Reducer<R> {
        Reducer {
            rng
        }
    }

    /// Removes as many digits from the given [SudokuGrid] as possible while
    /// keeping it uniquely solvable. Digits are tried in random order; a
    /// removal that would permit a second solution is reverted. All changes
    /// are done to the given mutable grid.
    ///
    /// It is expected that the given grid is uniquely solvable to begin
    /// with, which holds in particular for full grids.
    pub fn reduce(&mut self, grid: &mut SudokuGrid) {
        let coordinates = (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |column| (column, row)));

        for (column, row) in shuffle(&mut self.rng, coordinates) {
            if let Some(number) = grid.get_cell(column, row).unwrap() {
                grid.clear_cell(column, row).unwrap();

                if solver::count_solutions(grid, 2) != 1 {
                    grid.set_cell(column, row, number).unwrap();
                }
            }
        }
    }
}

/// Derives the puzzle of the day for the given [CalendarDate]. A full random
/// grid is generated and then reduced, with all randomness drawn from a
/// [ChaCha8Rng] seeded by the date, so the same date always yields the same
/// puzzle. The result is rule-conform, not full, and uniquely solvable.
pub fn daily_puzzle(date: CalendarDate) -> SudokuGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(date.seed());
    let mut grid = Generator::new(&mut rng).generate();
    Reducer::new(&mut rng).reduce(&mut grid);
    grid
}
