//! Input routing module
//!
//! Provides gesture tracking for window move and resize.

mod gesture;
mod result;
mod router;

pub use gesture::Gesture;
pub use result::InputResult;
pub use router::InputRouter;

use serde::Serialize;

/// Mouse button of a pointer-down event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    Primary,
    Secondary,
}
