//! Configuration file parsing for gloss
//!
//! Supports `<config_dir>/gloss/config.toml`, or any path given with `--config`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config, load_settings, load_settings_from};
pub use types::*;
