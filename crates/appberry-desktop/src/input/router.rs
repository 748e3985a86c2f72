//! Input router tracking per-window gestures

use std::collections::HashMap;
use crate::math::{Point, Size};
use crate::window::WindowId;
use super::Gesture;

/// Input router managing gesture state
///
/// Each window has at most one gesture. Gestures on different windows are
/// independent.
#[derive(Debug, Default)]
pub struct InputRouter {
    gestures: HashMap<WindowId, Gesture>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the gesture active on a window
    #[inline]
    pub fn gesture(&self, window_id: WindowId) -> Option<&Gesture> {
        self.gestures.get(&window_id)
    }

    /// Check if a window is being dragged or resized
    #[inline]
    pub fn is_dragging(&self, window_id: WindowId) -> bool {
        self.gestures.contains_key(&window_id)
    }

    /// Check if any gesture is active
    #[inline]
    pub fn any_active(&self) -> bool {
        !self.gestures.is_empty()
    }

    /// Windows with an active gesture
    pub fn active_windows(&self) -> Vec<WindowId> {
        self.gestures.keys().copied().collect()
    }

    /// Start window move operation, replacing any gesture on that window
    pub fn begin_move(&mut self, window_id: WindowId, origin: Point, start_cursor: Point) {
        self.gestures
            .insert(window_id, Gesture::Move { origin, start_cursor });
    }

    /// Start window resize operation, replacing any gesture on that window
    pub fn begin_resize(&mut self, window_id: WindowId, origin: Size, start_cursor: Point) {
        self.gestures
            .insert(window_id, Gesture::Resize { origin, start_cursor });
    }

    /// End the gesture on a window
    pub fn end(&mut self, window_id: WindowId) -> Option<Gesture> {
        self.gestures.remove(&window_id)
    }

    /// End every gesture
    pub fn end_all(&mut self) {
        self.gestures.clear();
    }
}
