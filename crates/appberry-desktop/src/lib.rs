//! Appberry Desktop
//!
//! Window management for the Appberry demo desktop:
//!
//! - **Windows**: open, close, focus, cascade placement, z-order stacking
//! - **Input**: per-window move and resize gestures anchored at their origin
//! - **Desktop**: the shell hosting one app per window plus the start menu
//!
//! # Example
//!
//! ```
//! use appberry_desktop::{Desktop, Point, WindowKind};
//!
//! let mut desktop = Desktop::default();
//! let calc = desktop.open_app(WindowKind::Calculator);
//! let notes = desktop.open_app(WindowKind::Notepad);
//! assert_eq!(desktop.windows.focused(), Some(notes.id));
//!
//! desktop.begin_move(calc.id, Point::new(150, 110));
//! desktop.update_gesture(calc.id, Point::new(170, 90));
//! desktop.end_gesture(calc.id);
//!
//! let moved = desktop.windows.get(calc.id).unwrap();
//! assert_eq!(moved.position, Point::new(120, 80));
//! assert_eq!(desktop.windows.focused(), Some(calc.id));
//! ```

pub mod desktop;
pub mod input;
pub mod math;
pub mod window;

pub use desktop::{Desktop, StartMenu};
pub use input::{Gesture, InputResult, InputRouter, PointerButton};
pub use math::{BoardStyle, FrameStyle, Point, Rect, Size, BOARD_STYLE, FRAME_STYLE};
pub use window::{default_size, WindowId, WindowKind, WindowManager, WindowRecord, WindowRegion};
