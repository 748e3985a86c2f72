//! Appberry Applications
//!
//! The toy applications hosted inside desktop windows:
//!
//! - **Minesweeper**: grid generation, flood-fill reveal, flags, win/loss
//! - **Calculator**: button pad over a safe arithmetic evaluator
//! - **Notepad**: a text buffer persisted through a [`KeyValueStore`]
//!
//! Each app is driven by [`AppInput`] events and hosted by an [`AppInstance`].
//!
//! # Example
//!
//! ```
//! use appberry_apps::{AppInput, AppInstance, AppKind, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! let mut app = AppInstance::launch(AppKind::Calculator, &store);
//! for label in ["7", "+", "8", "="] {
//!     app.handle_input(AppInput::Button { label: label.to_string() }, &mut store).unwrap();
//! }
//! assert_eq!(app.as_calculator().unwrap().display(), "15");
//! ```

pub mod apps;
pub mod error;
pub mod storage;

pub use apps::calculator::{evaluate, CalculatorApp, ExprError, CALCULATOR_BUTTONS};
pub use apps::minesweeper::{
    Cell, GameStatus, Grid, MinesweeperApp, DEFAULT_BOMBS, DEFAULT_COLS, DEFAULT_ROWS,
};
pub use apps::notepad::{NotepadApp, NOTEPAD_KEY};
pub use apps::{AppInput, AppInstance, AppKind};
pub use error::AppError;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
