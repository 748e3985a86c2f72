//! Minesweeper grid and game state machine

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::AppError;

/// Default grid height
pub const DEFAULT_ROWS: usize = 5;
/// Default grid width
pub const DEFAULT_COLS: usize = 5;
/// Default number of bombs
pub const DEFAULT_BOMBS: usize = 5;

/// Adjacency value stored in bomb cells
const BOMB_SENTINEL: i8 = -1;

/// One square of the grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub has_bomb: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Bombs among the in-bounds neighbours, or -1 for a bomb cell
    pub adjacent: i8,
}

/// Game progress
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Whether the game has ended
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A rows x cols minesweeper board
#[derive(Clone, Debug, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    bomb_count: usize,
    cells: Vec<Cell>,
    status: GameStatus,
}

impl Grid {
    /// Start a new game with bombs placed from the thread RNG.
    pub fn new(rows: usize, cols: usize, bombs: usize) -> Result<Self, AppError> {
        Self::with_rng(rows, cols, bombs, &mut rand::thread_rng())
    }

    /// Start a new game with bombs placed from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        bombs: usize,
        rng: &mut R,
    ) -> Result<Self, AppError> {
        validate(rows, cols, bombs)?;
        Ok(Self::generate(rows, cols, bombs, rng))
    }

    /// The default 5x5 game with 5 bombs.
    pub fn default_game() -> Self {
        Self::generate(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_BOMBS, &mut rand::thread_rng())
    }

    /// Build a game with bombs at exactly the given positions.
    pub fn from_bombs(rows: usize, cols: usize, bombs: &[(usize, usize)]) -> Result<Self, AppError> {
        validate(rows, cols, bombs.len())?;

        let mut cells = vec![Cell::default(); rows * cols];
        for &(row, col) in bombs {
            if row >= rows || col >= cols || cells[row * cols + col].has_bomb {
                return Err(AppError::InvalidBombPosition { row, col });
            }
            cells[row * cols + col].has_bomb = true;
        }

        Ok(Self::assemble(rows, cols, bombs.len(), cells))
    }

    /// Place bombs by shuffling every cell index and taking the first `bombs`.
    /// Parameters must already be validated.
    fn generate<R: Rng + ?Sized>(rows: usize, cols: usize, bombs: usize, rng: &mut R) -> Self {
        let mut indices: Vec<usize> = (0..rows * cols).collect();
        indices.shuffle(rng);

        let mut cells = vec![Cell::default(); rows * cols];
        for &index in &indices[..bombs] {
            cells[index].has_bomb = true;
        }

        Self::assemble(rows, cols, bombs, cells)
    }

    /// Fill in adjacency counts for a board whose bombs are placed
    fn assemble(rows: usize, cols: usize, bomb_count: usize, mut cells: Vec<Cell>) -> Self {
        let counts: Vec<i8> = (0..rows * cols)
            .map(|index| {
                if cells[index].has_bomb {
                    return BOMB_SENTINEL;
                }
                let bombs = neighbours(rows, cols, index / cols, index % cols)
                    .filter(|&(r, c)| cells[r * cols + c].has_bomb)
                    .count();
                bombs as i8
            })
            .collect();

        for (cell, adjacent) in cells.iter_mut().zip(counts) {
            cell.adjacent = adjacent;
        }

        Self {
            rows,
            cols,
            bomb_count,
            cells,
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn bomb_count(&self) -> usize {
        self.bomb_count
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Cell at (row, col), or None off the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|index| &self.cells[index])
    }

    /// Rows of cells, top to bottom
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Number of non-bomb cells that have been revealed
    pub fn revealed_safe_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.is_revealed && !cell.has_bomb)
            .count()
    }

    /// Number of flagged cells
    pub fn flag_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_flagged).count()
    }

    /// Reveal the cell at (row, col).
    ///
    /// Ignored once the game is over, off the grid, or on a revealed or
    /// flagged cell. Hitting a bomb exposes every bomb and loses the game.
    /// A zero cell opens its whole connected zero region plus the numbered
    /// border; flags stop the spread.
    pub fn reveal(&mut self, row: usize, col: usize) -> GameStatus {
        if self.status.is_over() {
            return self.status;
        }
        let Some(index) = self.index(row, col) else {
            return self.status;
        };
        let target = self.cells[index];
        if target.is_revealed || target.is_flagged {
            return self.status;
        }

        if target.has_bomb {
            for cell in self.cells.iter_mut().filter(|cell| cell.has_bomb) {
                cell.is_revealed = true;
                cell.is_flagged = false;
            }
            self.status = GameStatus::Lost;
            debug!(row, col, "minesweeper: bomb revealed, game lost");
            return self.status;
        }

        self.flood_fill(row, col);

        if self.revealed_safe_count() == self.rows * self.cols - self.bomb_count {
            self.status = GameStatus::Won;
            debug!("minesweeper: all safe cells revealed, game won");
        }
        self.status
    }

    /// Flip the flag on an unrevealed cell. Ignored once the game is over,
    /// off the grid, or on a revealed cell.
    pub fn toggle_flag(&mut self, row: usize, col: usize) {
        if self.status.is_over() {
            return;
        }
        if let Some(index) = self.index(row, col) {
            let cell = &mut self.cells[index];
            if !cell.is_revealed {
                cell.is_flagged = !cell.is_flagged;
            }
        }
    }

    fn flood_fill(&mut self, row: usize, col: usize) {
        let mut stack = vec![(row, col)];

        while let Some((r, c)) = stack.pop() {
            let cell = &mut self.cells[r * self.cols + c];
            if cell.is_revealed || cell.is_flagged {
                continue;
            }
            cell.is_revealed = true;

            if cell.adjacent == 0 && !cell.has_bomb {
                stack.extend(neighbours(self.rows, self.cols, r, c));
            }
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

/// Check that a grid can hold the requested bombs with at least one safe cell
fn validate(rows: usize, cols: usize, bombs: usize) -> Result<(), AppError> {
    let total = rows.checked_mul(cols).unwrap_or(0);
    if rows == 0 || cols == 0 || bombs >= total {
        return Err(AppError::InvalidConfiguration { rows, cols, bombs });
    }
    Ok(())
}

/// In-bounds 8-neighbourhood of (row, col)
fn neighbours(rows: usize, cols: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let row_range = row.saturating_sub(1)..=(row + 1).min(rows - 1);
    row_range.flat_map(move |r| {
        let col_range = col.saturating_sub(1)..=(col + 1).min(cols - 1);
        col_range
            .filter(move |&c| (r, c) != (row, col))
            .map(move |c| (r, c))
    })
}
