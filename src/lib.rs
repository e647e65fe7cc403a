//! gloss Library
//!
//! A terminal glossary of data-science, statistics and linear-algebra terms.
//! The binary wires the CLI to these entry points; integration tests drive
//! them directly.

pub mod headless;

// Re-export main entry points
pub use gloss_app::config::{init_config, load_settings_from};
pub use gloss_app::content::load_content;
pub use gloss_tui::run;
