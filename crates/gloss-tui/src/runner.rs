//! Main TUI runner - entry point and event loop

use gloss_app::{update, AppState, Message};
use gloss_core::prelude::*;

use super::{event, render, terminal};

/// Run the interactive browser until the user quits
pub fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();

    info!(
        "Starting browser with {} terms, icons={}",
        state.store.len(),
        state.settings.ui.icons
    );

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut state);
    ratatui::restore();

    if let Err(ref e) = result {
        error!("Browser exited with error: {}", e);
    }
    result
}

fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}

/// Run a message and every follow-up it produces through `update`
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        trace!("Processing {:?}", m);
        msg = update(state, m).message;
    }
}
