//! Desktop struct - windows plus the apps they host

use std::collections::HashMap;

use appberry_apps::{AppError, AppInput, AppInstance, KeyValueStore, MemoryStore};
use tracing::{debug, warn};

use crate::input::{Gesture, InputResult, InputRouter, PointerButton};
use crate::math::{Point, BOARD_STYLE};
use crate::window::{WindowId, WindowKind, WindowManager, WindowRecord, WindowRegion};
use super::StartMenu;

/// The desktop: open windows, their apps, gestures, and the start menu
///
/// All methods run synchronously to completion inside one UI event.
pub struct Desktop<S: KeyValueStore = MemoryStore> {
    /// Window manager
    pub windows: WindowManager,
    /// Gesture tracking
    input: InputRouter,
    /// App hosted by each open window
    apps: HashMap<WindowId, AppInstance>,
    /// Taskbar start menu
    start_menu: StartMenu,
    /// Client-scoped store for app persistence
    store: S,
}

impl Default for Desktop<MemoryStore> {
    fn default() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl<S: KeyValueStore> Desktop<S> {
    /// Create an empty desktop backed by `store`
    pub fn new(store: S) -> Self {
        Self {
            windows: WindowManager::new(),
            input: InputRouter::new(),
            apps: HashMap::new(),
            start_menu: StartMenu::default(),
            store,
        }
    }

    // =========================================================================
    // Start menu
    // =========================================================================

    /// Start button pressed
    pub fn toggle_start_menu(&mut self) {
        self.start_menu.toggle();
    }

    pub fn start_menu(&self) -> &StartMenu {
        &self.start_menu
    }

    /// Click on empty desktop space
    pub fn click_desktop(&mut self) {
        self.start_menu.hide();
    }

    // =========================================================================
    // Window lifecycle
    // =========================================================================

    /// Open a window hosting a fresh instance of `kind`
    pub fn open_app(&mut self, kind: WindowKind) -> WindowRecord {
        let window = self.windows.open(kind);
        self.apps
            .insert(window.id, AppInstance::launch(kind, &self.store));
        self.start_menu.hide();
        window
    }

    /// Close a window, dropping its app and any gesture on it
    pub fn close_window(&mut self, id: WindowId) {
        self.input.end(id);
        self.apps.remove(&id);
        self.windows.close(id);
    }

    /// Bring a window to the front
    pub fn focus_window(&mut self, id: WindowId) {
        self.windows.focus(id);
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Begin moving a window from the cursor position
    pub fn begin_move(&mut self, id: WindowId, cursor: Point) {
        let Some(window) = self.windows.get(id) else {
            return;
        };
        let origin = window.position;
        self.windows.focus(id);
        self.input.begin_move(id, origin, cursor);
    }

    /// Begin resizing a window from the cursor position
    pub fn begin_resize(&mut self, id: WindowId, cursor: Point) {
        let Some(window) = self.windows.get(id) else {
            return;
        };
        let origin = window.size;
        self.windows.focus(id);
        self.input.begin_resize(id, origin, cursor);
    }

    /// Apply the live cursor to the gesture on one window. Returns false if
    /// that window has no gesture.
    pub fn update_gesture(&mut self, id: WindowId, cursor: Point) -> bool {
        let Some(gesture) = self.input.gesture(id).copied() else {
            return false;
        };
        let delta = gesture.delta(cursor);
        match gesture {
            Gesture::Move { origin, .. } => self.windows.move_from(id, origin, delta),
            Gesture::Resize { origin, .. } => self.windows.resize_from(id, origin, delta),
        }
        true
    }

    /// Release the gesture on one window
    pub fn end_gesture(&mut self, id: WindowId) {
        self.input.end(id);
    }

    pub fn is_dragging(&self, id: WindowId) -> bool {
        self.input.is_dragging(id)
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Handle pointer down at a desktop position
    pub fn handle_pointer_down(&mut self, pos: Point, button: PointerButton) -> InputResult {
        let Some((window_id, region)) = self.windows.region_at(pos) else {
            self.click_desktop();
            return InputResult::Unhandled;
        };

        match (region, button) {
            (WindowRegion::CloseButton, PointerButton::Primary) => {
                self.close_window(window_id);
                InputResult::Handled
            }
            (WindowRegion::TitleBar, PointerButton::Primary) => {
                self.begin_move(window_id, pos);
                InputResult::Handled
            }
            (WindowRegion::ResizeHandle, PointerButton::Primary) => {
                self.begin_resize(window_id, pos);
                InputResult::Handled
            }
            (WindowRegion::Content, _) => self.handle_content_click(window_id, pos, button),
            _ => {
                self.windows.focus(window_id);
                InputResult::Handled
            }
        }
    }

    /// Focus the window and hand the click to its content. Minesweeper
    /// cells are handled here: primary reveals, secondary toggles the flag.
    fn handle_content_click(
        &mut self,
        window_id: WindowId,
        pos: Point,
        button: PointerButton,
    ) -> InputResult {
        self.windows.focus(window_id);

        let Some(content) = self.windows.get(window_id).map(|w| w.content_rect()) else {
            return InputResult::Unhandled;
        };
        let local = pos - content.position();

        let board = self
            .apps
            .get(&window_id)
            .and_then(|app| app.as_minesweeper())
            .map(|game| (game.grid().rows(), game.grid().cols()));

        let Some((rows, cols)) = board else {
            return InputResult::Forward {
                window_id,
                local_x: local.x,
                local_y: local.y,
                button,
            };
        };

        if let Some((row, col)) = BOARD_STYLE.cell_at(local, content.size().width, rows, cols) {
            let input = match button {
                PointerButton::Primary => AppInput::Reveal { row, col },
                PointerButton::Secondary => AppInput::ToggleFlag { row, col },
            };
            if let Err(err) = self.send_input(window_id, input) {
                warn!(window_id, error = %err, "minesweeper input failed");
            }
        }
        InputResult::Handled
    }

    /// CSS cursor for a desktop position. An active gesture keeps its cursor
    /// wherever the pointer goes.
    pub fn cursor_at(&self, pos: Point) -> &'static str {
        let gestures = self.input.active_windows();
        if let Some(gesture) = gestures.first().and_then(|&id| self.input.gesture(id)) {
            if gesture.is_move() {
                return WindowRegion::TitleBar.cursor();
            }
            if gesture.is_resize() {
                return WindowRegion::ResizeHandle.cursor();
            }
        }

        self.windows
            .region_at(pos)
            .map_or("default", |(_, region)| region.cursor())
    }

    /// Handle pointer move; every active gesture follows the cursor
    pub fn handle_pointer_move(&mut self, pos: Point) -> InputResult {
        let active = self.input.active_windows();
        if active.is_empty() {
            return InputResult::Unhandled;
        }
        for id in active {
            self.update_gesture(id, pos);
        }
        InputResult::Handled
    }

    /// Handle pointer up; releases every gesture
    pub fn handle_pointer_up(&mut self) -> InputResult {
        if self.input.any_active() {
            self.input.end_all();
            return InputResult::Handled;
        }
        InputResult::Unhandled
    }

    // =========================================================================
    // Hosted apps
    // =========================================================================

    /// Get the app hosted by a window
    pub fn app(&self, id: WindowId) -> Option<&AppInstance> {
        self.apps.get(&id)
    }

    /// Deliver input to the app hosted by a window. Unknown windows are ignored.
    pub fn send_input(&mut self, id: WindowId, input: AppInput) -> Result<(), AppError> {
        match self.apps.get_mut(&id) {
            Some(app) => app.handle_input(input, &mut self.store),
            None => {
                debug!(id, "input for unknown window dropped");
                Ok(())
            }
        }
    }

    /// Get the backing store
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appberry_apps::AppKind;

    #[test]
    fn test_open_hides_start_menu() {
        let mut desktop = Desktop::default();
        desktop.toggle_start_menu();
        assert!(desktop.start_menu().is_open());

        desktop.open_app(AppKind::Calculator);
        assert!(!desktop.start_menu().is_open());
    }

    #[test]
    fn test_click_on_empty_desktop_hides_menu() {
        let mut desktop = Desktop::default();
        desktop.toggle_start_menu();

        let result = desktop.handle_pointer_down(Point::new(5, 5), PointerButton::Primary);
        assert_eq!(result, InputResult::Unhandled);
        assert!(!desktop.start_menu().is_open());
    }

    #[test]
    fn test_close_drops_app_and_gesture() {
        let mut desktop = Desktop::default();
        let id = desktop.open_app(AppKind::Minesweeper).id;
        desktop.begin_move(id, Point::new(150, 110));

        desktop.close_window(id);
        assert!(desktop.app(id).is_none());
        assert!(!desktop.is_dragging(id));
        assert!(!desktop.update_gesture(id, Point::new(0, 0)));
    }

    #[test]
    fn test_content_click_forwards_local_coordinates() {
        let mut desktop = Desktop::default();
        let id = desktop.open_app(AppKind::Notepad).id;

        let result = desktop.handle_pointer_down(Point::new(110, 130), PointerButton::Primary);
        assert_eq!(
            result,
            InputResult::Forward {
                window_id: id,
                local_x: 10,
                local_y: 6,
                button: PointerButton::Primary,
            }
        );
    }

    #[test]
    fn test_cursor_follows_region_and_gesture() {
        let mut desktop = Desktop::default();
        desktop.open_app(AppKind::Notepad);

        assert_eq!(desktop.cursor_at(Point::new(50, 50)), "default");
        assert_eq!(desktop.cursor_at(Point::new(150, 110)), "move");
        assert_eq!(desktop.cursor_at(Point::new(295, 395)), "se-resize");

        desktop.handle_pointer_down(Point::new(295, 395), PointerButton::Primary);
        assert_eq!(desktop.cursor_at(Point::new(50, 50)), "se-resize");

        desktop.handle_pointer_up();
        desktop.handle_pointer_down(Point::new(150, 110), PointerButton::Primary);
        assert_eq!(desktop.cursor_at(Point::new(50, 50)), "move");
    }
}
