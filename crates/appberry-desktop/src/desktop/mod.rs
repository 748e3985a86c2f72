//! Desktop shell
//!
//! Ties the window manager, gesture tracking, the start menu, and the apps
//! hosted in each window together behind pointer-level entry points.

#[allow(clippy::module_inception)]
mod desktop;
mod start_menu;

pub use desktop::Desktop;
pub use start_menu::StartMenu;
