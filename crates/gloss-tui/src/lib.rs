//! gloss-tui - Terminal UI for gloss
//!
//! This crate provides the ratatui-based browser. It takes an [`AppState`]
//! from gloss-app and adds terminal rendering, event polling, and widgets.
//!
//! [`AppState`]: gloss_app::AppState

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
