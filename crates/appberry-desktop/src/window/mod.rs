//! Window management module
//!
//! Provides window lifecycle, stacking order, and hit testing.

#[allow(clippy::module_inception)]
mod window;
mod manager;
mod region;

pub use window::{default_size, WindowRecord};
pub use manager::WindowManager;
pub use region::WindowRegion;

/// What a window hosts
pub use appberry_apps::AppKind as WindowKind;

/// Unique window identifier
pub type WindowId = u64;
