//! gloss-app - Application state and card composition for gloss
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! browser, configuration loading, the bundled glossary, and the
//! [`GlossaryCard`] view model that front ends render.

pub mod card;
pub mod config;
pub mod content;
pub mod disclosure;
pub mod filter;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

// Re-export primary types
pub use card::{CardBody, FocusTarget, GlossaryCard, TechnicalDetails};
pub use config::{IconMode, Settings};
pub use disclosure::{DisclosurePanel, PanelVariant};
pub use filter::GlossaryFilter;
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, UiMode};
