//! Centralized theme for the gloss TUI.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builder functions
//! - `icons`: term and UI glyphs with Unicode and Nerd Font variants

pub mod icons;
pub mod palette;
pub mod styles;
