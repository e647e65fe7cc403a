//! Application error types with rich context
//!
//! The description pipeline itself never fails; these errors only surface at
//! the I/O edges (loading content files, reading config, driving the terminal).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Content Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Content file not found: {path}")]
    ContentNotFound { path: PathBuf },

    #[error("Unsupported content format for {path} (expected .toml or .json)")]
    ContentFormat { path: PathBuf },

    #[error("Unknown icon name: {name}")]
    UnknownIcon { name: String },

    #[error("Unknown diagram kind: {name}")]
    UnknownDiagram { name: String },

    #[error("Duplicate glossary term: {term}")]
    DuplicateTerm { term: String },

    #[error("No glossary entry for term: {term}")]
    TermNotFound { term: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn content_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ContentNotFound { path: path.into() }
    }

    pub fn content_format(path: impl Into<PathBuf>) -> Self {
        Self::ContentFormat { path: path.into() }
    }

    pub fn unknown_icon(name: impl Into<String>) -> Self {
        Self::UnknownIcon { name: name.into() }
    }

    pub fn unknown_diagram(name: impl Into<String>) -> Self {
        Self::UnknownDiagram { name: name.into() }
    }

    pub fn duplicate_term(term: impl Into<String>) -> Self {
        Self::DuplicateTerm { term: term.into() }
    }

    pub fn term_not_found(term: impl Into<String>) -> Self {
        Self::TermNotFound { term: term.into() }
    }

    /// Check if this error should stop the program before any UI is shown
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ContentNotFound { .. }
                | Error::ContentFormat { .. }
                | Error::UnknownIcon { .. }
                | Error::UnknownDiagram { .. }
                | Error::DuplicateTerm { .. }
                | Error::Json(_)
                | Error::Toml(_)
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
