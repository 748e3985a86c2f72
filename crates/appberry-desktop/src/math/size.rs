//! 2D size type for dimensions

use serde::{Deserialize, Serialize};

/// 2D size for width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grow each dimension up to at least `min`
    #[inline]
    pub fn at_least(self, min: Size) -> Self {
        Self::new(self.width.max(min.width), self.height.max(min.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_at_least() {
        let min = Size::new(120, 100);
        assert_eq!(Size::new(50, 500).at_least(min), Size::new(120, 500));
        assert_eq!(Size::new(300, -20).at_least(min), Size::new(300, 100));
        assert_eq!(Size::new(200, 300).at_least(min), Size::new(200, 300));
    }
}
