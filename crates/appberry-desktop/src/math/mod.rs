//! Core geometry types for the desktop
//!
//! All coordinates are whole pixels in desktop space. Positions may be
//! negative; windows are free to leave the visible area.

mod point;
mod rect;
mod size;
mod style;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
pub use style::{BoardStyle, FrameStyle, BOARD_STYLE, FRAME_STYLE};
