//! Terminal rendering.
//!
//! Each view gets its own submodule with a `render` function; shared chrome
//! (header, tabs, status bar, overlays) lives in [`common`].

pub mod common;
pub mod device;
pub mod notifications;
pub mod theme;
pub mod thresholds;
pub mod users;

pub use theme::Theme;
