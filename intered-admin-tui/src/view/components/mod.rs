//! Shared widgets

pub mod filterbar;
pub mod modal;
pub mod navigation;
pub mod statusbar;
pub mod table;
