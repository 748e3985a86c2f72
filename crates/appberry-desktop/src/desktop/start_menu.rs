//! Start menu visibility

use appberry_apps::AppKind;

/// Taskbar start menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartMenu {
    open: bool,
}

impl StartMenu {
    /// Entries in display order
    pub fn entries(&self) -> &'static [AppKind] {
        &AppKind::ALL
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Start button pressed
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn hide(&mut self) {
        self.open = false;
    }
}
