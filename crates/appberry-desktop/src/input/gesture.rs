//! Gesture state for drag operations

use crate::math::{Point, Size};

/// An in-progress pointer gesture on one window
///
/// The origin geometry and cursor are captured when the gesture begins.
/// Every update derives the new geometry from that snapshot and the total
/// cursor offset, so coalesced or dropped intermediate events cannot drift
/// the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Moving a window by its title bar
    Move {
        /// Window position at start
        origin: Point,
        /// Cursor position at start
        start_cursor: Point,
    },
    /// Resizing a window by its corner handle
    Resize {
        /// Window size at start
        origin: Size,
        /// Cursor position at start
        start_cursor: Point,
    },
}

impl Gesture {
    /// Check if this is a window move operation
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, Gesture::Move { .. })
    }

    /// Check if this is a window resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, Gesture::Resize { .. })
    }

    /// Total cursor offset since the gesture began
    #[inline]
    pub fn delta(&self, cursor: Point) -> Point {
        match self {
            Gesture::Move { start_cursor, .. } | Gesture::Resize { start_cursor, .. } => {
                cursor - *start_cursor
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_gesture() {
        let gesture = Gesture::Move {
            origin: Point::new(100, 100),
            start_cursor: Point::new(150, 110),
        };

        assert!(gesture.is_move());
        assert!(!gesture.is_resize());
        assert_eq!(gesture.delta(Point::new(170, 90)), Point::new(20, -20));
    }

    #[test]
    fn test_resize_gesture() {
        let gesture = Gesture::Resize {
            origin: Size::new(200, 300),
            start_cursor: Point::new(295, 395),
        };

        assert!(gesture.is_resize());
        assert_eq!(gesture.delta(Point::new(295, 395)), Point::ZERO);
    }
}
