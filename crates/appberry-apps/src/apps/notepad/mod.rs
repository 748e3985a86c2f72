//! Notepad Application
//!
//! Text is loaded from the store when the app mounts and written back only
//! when the user saves.

use serde::Serialize;
use tracing::debug;

use crate::error::AppError;
use crate::storage::KeyValueStore;

/// Store key holding the notepad text
pub const NOTEPAD_KEY: &str = "notepad-content";

/// Notepad application state
#[derive(Clone, Debug, Default, Serialize)]
pub struct NotepadApp {
    text: String,
    /// Edited since the last load or save
    dirty: bool,
}

impl NotepadApp {
    /// Mount the notepad, reading any saved text. Absent means empty.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            text: store.get(NOTEPAD_KEY).unwrap_or_default(),
            dirty: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the buffer contents
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    /// Write the buffer to the store
    pub fn save(&mut self, store: &mut dyn KeyValueStore) -> Result<(), AppError> {
        store.set(NOTEPAD_KEY, &self.text)?;
        self.dirty = false;
        debug!(bytes = self.text.len(), "notepad: saved");
        Ok(())
    }
}
