//! gloss - A terminal glossary with progressive disclosure
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gloss::headless;
use gloss_app::config::default_config_path;
use gloss_app::{AppState, GlossaryFilter};
use gloss_core::prelude::*;

/// gloss - Browse data-science, statistics and linear-algebra terms
#[derive(Parser, Debug)]
#[command(name = "gloss", version)]
#[command(about = "A terminal glossary of data-science terms", long_about = None)]
struct Args {
    /// Glossary file to load (TOML or JSON) instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive browser (default)
    Browse,

    /// List terms
    List {
        /// Only terms in this category
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive search over terms and descriptions
        #[arg(long)]
        search: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the card for one term
    Show {
        /// Exact term, e.g. "Standard Deviation"
        term: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Open every panel and expand every truncated block
        #[arg(long)]
        expand: bool,
    },

    /// List categories with their term counts
    Categories,

    /// Write a commented default config file
    InitConfig,
}

fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logging goes to a file; a failure here must not stop the app
    if let Err(e) = gloss_core::logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    info!("Version {}", env!("CARGO_PKG_VERSION"));

    let result = run(args);
    if let Err(ref e) = result {
        if e.is_fatal() {
            error!("Application error: {:?}", e);
        } else {
            warn!("Command failed: {}", e);
        }
    }
    result
}

fn run(args: Args) -> Result<()> {
    let settings = gloss::load_settings_from(args.config.as_deref());
    let content = args.content.as_deref();

    match args.command.unwrap_or(Command::Browse) {
        Command::Browse => {
            let store = gloss::load_content(content)?;
            gloss::run(AppState::new(store, settings))
        }
        Command::List {
            category,
            search,
            json,
        } => {
            let store = gloss::load_content(content)?;
            let mut filter = GlossaryFilter::new();
            filter.category = category;
            filter.query = search.unwrap_or_default();
            headless::write_list(&mut io::stdout().lock(), &store, &settings, &filter, json)
        }
        Command::Show { term, json, expand } => {
            let store = gloss::load_content(content)?;
            let card = headless::build_card(&store, &settings, &term, expand)?;
            headless::write_card(&mut io::stdout().lock(), &card, &settings, json)
        }
        Command::Categories => {
            let store = gloss::load_content(content)?;
            headless::write_categories(&mut io::stdout().lock(), &store)
        }
        Command::InitConfig => init_config(args.config),
    }
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = path
        .or_else(default_config_path)
        .ok_or_else(|| Error::config("No config directory available; pass --config"))?;

    if gloss::init_config(&path)? {
        println!("Wrote default config to {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}
