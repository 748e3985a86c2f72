//! Minesweeper Application
//!
//! Left click reveals a cell, right click toggles a flag. The game ends when
//! every safe cell is exposed or a bomb is hit.

mod grid;

pub use grid::{Cell, GameStatus, Grid, DEFAULT_BOMBS, DEFAULT_COLS, DEFAULT_ROWS};

use crate::error::AppError;

/// Minesweeper application state
#[derive(Clone, Debug)]
pub struct MinesweeperApp {
    grid: Grid,
}

impl Default for MinesweeperApp {
    fn default() -> Self {
        Self {
            grid: Grid::default_game(),
        }
    }
}

impl MinesweeperApp {
    /// Start with a custom board size
    pub fn with_config(rows: usize, cols: usize, bombs: usize) -> Result<Self, AppError> {
        Ok(Self {
            grid: Grid::new(rows, cols, bombs)?,
        })
    }

    /// Host an existing board
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.grid.status()
    }

    pub fn reveal(&mut self, row: usize, col: usize) -> GameStatus {
        self.grid.reveal(row, col)
    }

    pub fn toggle_flag(&mut self, row: usize, col: usize) {
        self.grid.toggle_flag(row, col);
    }

    /// Throw away the board and deal a fresh one of the same dimensions
    pub fn restart(&mut self) {
        // Dimensions were validated when the current grid was built.
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let bombs = self.grid.bomb_count();
        if let Ok(grid) = Grid::new(rows, cols, bombs) {
            self.grid = grid;
        }
    }

    /// Message shown under the board
    pub fn status_text(&self) -> &'static str {
        match self.grid.status() {
            GameStatus::InProgress => "",
            GameStatus::Won => "You win",
            GameStatus::Lost => "You lose",
        }
    }
}
