//! Window manager for lifecycle, focus, and z-order

use tracing::debug;
use crate::math::{Point, Size, FRAME_STYLE};
use super::{default_size, WindowId, WindowKind, WindowRecord, WindowRegion};

/// Offset between successively opened windows
const CASCADE_STEP: i32 = 20;
/// Position of the first window
const CASCADE_ORIGIN: i32 = 100;

/// Window manager handling window lifecycle, z-order, and focus
///
/// Windows are kept in insertion order; stacking is purely a function of
/// each record's `z_order`.
pub struct WindowManager {
    /// Open windows in the order they were opened
    windows: Vec<WindowRecord>,
    /// Next window ID
    next_id: WindowId,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a new window manager
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            next_id: 1,
        }
    }

    /// Open a window for `kind`, cascaded from the windows already open and
    /// stacked above them.
    pub fn open(&mut self, kind: WindowKind) -> WindowRecord {
        let id = self.next_id;
        self.next_id += 1;

        let open_count = self.windows.len() as i32;
        let window = WindowRecord {
            id,
            kind,
            position: Point::splat(CASCADE_ORIGIN + CASCADE_STEP * open_count),
            size: default_size(kind),
            z_order: open_count as u32 + 1,
        };

        self.windows.push(window);
        debug!(id, ?kind, "window opened");
        window
    }

    /// Close a window
    pub fn close(&mut self, id: WindowId) -> Option<WindowRecord> {
        let index = self.windows.iter().position(|w| w.id == id)?;
        let window = self.windows.remove(index);
        debug!(id, "window closed");
        Some(window)
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Highest z-order in use, 0 when empty
    pub fn max_z(&self) -> u32 {
        self.windows.iter().map(|w| w.z_order).max().unwrap_or(0)
    }

    /// Focus a window (brings to top)
    pub fn focus(&mut self, id: WindowId) {
        let top = self.max_z() + 1;
        if let Some(window) = self.get_mut(id) {
            window.z_order = top;
        }
    }

    /// Get the frontmost window ID. Equal z-orders resolve to the later
    /// window, which is drawn last.
    pub fn focused(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .max_by_key(|w| w.z_order)
            .map(|w| w.id)
    }

    /// Place a window at `origin + delta`
    pub fn move_from(&mut self, id: WindowId, origin: Point, delta: Point) {
        if let Some(window) = self.get_mut(id) {
            window.position = origin + delta;
        }
    }

    /// Size a window to `origin + delta`, clamped to the minimum frame size
    pub fn resize_from(&mut self, id: WindowId, origin: Size, delta: Point) {
        if let Some(window) = self.get_mut(id) {
            let size = Size::new(origin.width + delta.x, origin.height + delta.y);
            window.size = size.at_least(FRAME_STYLE.min_size);
        }
    }

    /// Get all windows in insertion order
    pub fn windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter()
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&WindowRecord> {
        let mut windows: Vec<&WindowRecord> = self.windows.iter().collect();
        // Stable sort keeps insertion order among equal z-orders.
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Find which region of which window is at a desktop position (topmost)
    pub fn region_at(&self, pos: Point) -> Option<(WindowId, WindowRegion)> {
        self.windows_by_z()
            .into_iter()
            .rev()
            .find(|w| w.rect().contains(pos))
            .map(|w| (w.id, hit_test_window(w, pos)))
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// Hit test a window known to contain `pos`
fn hit_test_window(window: &WindowRecord, pos: Point) -> WindowRegion {
    if window.close_button_rect().contains(pos) {
        WindowRegion::CloseButton
    } else if window.resize_handle_rect().contains(pos) {
        WindowRegion::ResizeHandle
    } else if window.title_bar_rect().contains(pos) {
        WindowRegion::TitleBar
    } else {
        WindowRegion::Content
    }
}
