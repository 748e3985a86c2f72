//! Window record and chrome geometry

use serde::Serialize;
use crate::math::{Point, Rect, Size, FRAME_STYLE};
use super::{WindowId, WindowKind};

/// Default window size for a freshly opened app
pub fn default_size(kind: WindowKind) -> Size {
    match kind {
        WindowKind::Calculator => Size::new(200, 220),
        WindowKind::Notepad | WindowKind::Minesweeper => Size::new(200, 300),
    }
}

/// A window on the desktop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WindowRecord {
    /// Unique identifier, never reused
    pub id: WindowId,
    /// Hosted application
    pub kind: WindowKind,
    /// Top-left corner in desktop space
    pub position: Point,
    /// Outer size including chrome
    pub size: Size,
    /// Z-order (higher = on top)
    pub z_order: u32,
}

impl WindowRecord {
    /// Title bar text
    #[inline]
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Get the content area rectangle (excludes title bar)
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y + FRAME_STYLE.title_bar_height,
            self.size.width,
            self.size.height - FRAME_STYLE.title_bar_height,
        )
    }

    /// Get the close button rectangle
    pub fn close_button_rect(&self) -> Rect {
        let x = self.position.x + self.size.width
            - FRAME_STYLE.close_button_margin
            - FRAME_STYLE.close_button_width;
        Rect::new(
            x,
            self.position.y,
            FRAME_STYLE.close_button_width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Get the resize handle rectangle (bottom-right corner)
    pub fn resize_handle_rect(&self) -> Rect {
        let handle = FRAME_STYLE.resize_handle_size;
        Rect::new(
            self.position.x + self.size.width - handle,
            self.position.y + self.size.height - handle,
            handle,
            handle,
        )
    }
}
