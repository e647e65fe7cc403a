//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use super::types::Settings;
use gloss_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const GLOSS_DIR: &str = "gloss";

const DEFAULT_CONFIG: &str = r#"# gloss configuration

[display]
very_long_threshold = 500   # Split descriptions longer than this into sections
long_threshold = 100        # Truncate descriptions longer than this, with a word count
long_word_limit = 100       # Words shown before "Show more" for long descriptions
short_word_limit = 200      # Safety cap for short descriptions
section_word_limit = 150    # Words shown per collapsible section
enable_markdown = true      # Render **bold** and blank-line paragraphs

[ui]
icons = "unicode"           # "unicode" or "nerd_fonts"
technical_open = false      # Start with "Technical Details" expanded
"#;

/// Default location: `<config_dir>/gloss/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GLOSS_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, falling back to defaults
///
/// A missing file is normal. An unreadable or invalid file is logged and ignored.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Load from `path` if given, else from the default location
pub fn load_settings_from(path: Option<&Path>) -> Settings {
    match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => load_settings(&path),
        None => {
            debug!("No config directory available, using defaults");
            Settings::default()
        }
    }
}

/// Write a commented default config file at `path`
///
/// Returns `false` when a file already exists there (it is left untouched).
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        debug!("Config file already exists at {:?}", path);
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    info!("Created default config at {:?}", path);
    Ok(true)
}
