//! Frame and content style constants

use super::{Point, Size};

/// Frame style constants for window chrome
pub struct FrameStyle {
    pub title_bar_height: i32,
    pub close_button_width: i32,
    pub close_button_margin: i32,
    pub resize_handle_size: i32,
    /// Smallest size a resize gesture may produce
    pub min_size: Size,
}

/// Default frame style matching the desktop theme
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 24,
    close_button_width: 20,
    close_button_margin: 4,
    resize_handle_size: 12,
    min_size: Size::new(120, 100),
};

/// Layout of the minesweeper board inside a window's content area
///
/// The board sits `padding` below the content top and is centred
/// horizontally; cells are square and separated by `cell_gap`.
pub struct BoardStyle {
    pub padding: i32,
    pub cell_size: i32,
    pub cell_gap: i32,
}

/// Default board layout
pub const BOARD_STYLE: BoardStyle = BoardStyle {
    padding: 8,
    cell_size: 32,
    cell_gap: 2,
};

impl BoardStyle {
    /// Width of a board with `cols` columns
    pub fn board_width(&self, cols: usize) -> i32 {
        let cols = cols as i32;
        cols * self.cell_size + (cols - 1).max(0) * self.cell_gap
    }

    /// Content-local top-left corner of the board
    pub fn board_origin(&self, content_width: i32, cols: usize) -> Point {
        let inner = content_width - 2 * self.padding;
        let centring = ((inner - self.board_width(cols)) / 2).max(0);
        Point::new(self.padding + centring, self.padding)
    }

    /// Cell under a content-local point, or None for gaps and points off the
    /// board
    pub fn cell_at(
        &self,
        local: Point,
        content_width: i32,
        rows: usize,
        cols: usize,
    ) -> Option<(usize, usize)> {
        let offset = local - self.board_origin(content_width, cols);
        let row = self.track_index(offset.y, rows)?;
        let col = self.track_index(offset.x, cols)?;
        Some((row, col))
    }

    /// Index of the cell along one axis, skipping gaps
    fn track_index(&self, offset: i32, count: usize) -> Option<usize> {
        if offset < 0 {
            return None;
        }
        let pitch = self.cell_size + self.cell_gap;
        if offset % pitch >= self.cell_size {
            return None;
        }
        let index = (offset / pitch) as usize;
        (index < count).then_some(index)
    }
}
