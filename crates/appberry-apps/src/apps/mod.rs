//! Appberry Applications
//!
//! Each application has its own module containing its state and input
//! handling. [`AppInstance`] hosts one of them inside a window and routes
//! [`AppInput`] events to it.

pub mod calculator;
pub mod minesweeper;
pub mod notepad;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::storage::KeyValueStore;

pub use calculator::CalculatorApp;
pub use minesweeper::MinesweeperApp;
pub use notepad::NotepadApp;

/// The applications available from the start menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    Calculator,
    Notepad,
    Minesweeper,
}

impl AppKind {
    /// Start menu order
    pub const ALL: [AppKind; 3] = [AppKind::Calculator, AppKind::Notepad, AppKind::Minesweeper];

    /// Window title
    pub fn title(&self) -> &'static str {
        match self {
            AppKind::Calculator => "Calculator",
            AppKind::Notepad => "Notepad",
            AppKind::Minesweeper => "Minesweeper",
        }
    }
}

/// User input delivered to a hosted app
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppInput {
    /// Calculator button press
    Button { label: String },
    /// Left click on a minesweeper cell
    Reveal { row: usize, col: usize },
    /// Right click on a minesweeper cell
    ToggleFlag { row: usize, col: usize },
    /// Deal a new minesweeper board
    Restart,
    /// Notepad text changed
    Edit { text: String },
    /// Notepad save button
    Save,
}

/// A running application
#[derive(Clone, Debug)]
pub enum AppInstance {
    Calculator(CalculatorApp),
    Notepad(NotepadApp),
    Minesweeper(MinesweeperApp),
}

impl AppInstance {
    /// Mount a fresh instance of `kind`. Only the notepad reads the store.
    pub fn launch(kind: AppKind, store: &dyn KeyValueStore) -> Self {
        match kind {
            AppKind::Calculator => AppInstance::Calculator(CalculatorApp::new()),
            AppKind::Notepad => AppInstance::Notepad(NotepadApp::load(store)),
            AppKind::Minesweeper => AppInstance::Minesweeper(MinesweeperApp::default()),
        }
    }

    pub fn kind(&self) -> AppKind {
        match self {
            AppInstance::Calculator(_) => AppKind::Calculator,
            AppInstance::Notepad(_) => AppKind::Notepad,
            AppInstance::Minesweeper(_) => AppKind::Minesweeper,
        }
    }

    /// Route an input event to the app. Events meant for another kind of
    /// app are ignored.
    pub fn handle_input(
        &mut self,
        input: AppInput,
        store: &mut dyn KeyValueStore,
    ) -> Result<(), AppError> {
        match (self, input) {
            (AppInstance::Calculator(calc), AppInput::Button { label }) => calc.press(&label),
            (AppInstance::Minesweeper(game), AppInput::Reveal { row, col }) => {
                game.reveal(row, col);
            }
            (AppInstance::Minesweeper(game), AppInput::ToggleFlag { row, col }) => {
                game.toggle_flag(row, col)
            }
            (AppInstance::Minesweeper(game), AppInput::Restart) => game.restart(),
            (AppInstance::Notepad(notepad), AppInput::Edit { text }) => notepad.set_text(text),
            (AppInstance::Notepad(notepad), AppInput::Save) => notepad.save(store)?,
            _ => {}
        }
        Ok(())
    }

    pub fn as_calculator(&self) -> Option<&CalculatorApp> {
        match self {
            AppInstance::Calculator(calc) => Some(calc),
            _ => None,
        }
    }

    pub fn as_notepad(&self) -> Option<&NotepadApp> {
        match self {
            AppInstance::Notepad(notepad) => Some(notepad),
            _ => None,
        }
    }

    pub fn as_minesweeper(&self) -> Option<&MinesweeperApp> {
        match self {
            AppInstance::Minesweeper(game) => Some(game),
            _ => None,
        }
    }
}
