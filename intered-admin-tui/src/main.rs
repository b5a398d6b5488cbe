//! InterEd Admin TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input translation (`event/`)
//! - **Backend**: services from `intered-admin-core` (`backend/`)
//!
//! Startup order: config, logging, backend, terminal, main loop. The terminal
//! is restored whether or not the loop fails.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{Backend, ConfigService, JsonConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. Load configuration
    let config_service = JsonConfigService::new();
    let config = config_service.load()?;

    // 2. Logging goes to a file, stdout belongs to the UI
    let _log_guard = init_logging(&config.log_level)?;
    log::info!("Starting InterEd Admin");

    // 3. Services over the seeded in-memory store
    let backend = Backend::seeded()?;

    // 4. Create the app and load every list before the first frame
    view::theme::set_theme(config.theme);
    let mut app = model::App::new(backend, config, Box::new(config_service));
    update::update(&mut app, message::AppMessage::Refresh);
    app.clear_status();

    // 5. Initialize the terminal
    let mut terminal = init_terminal()?;

    // 6. Run the main loop
    let result = app::run(&mut terminal, &mut app);

    // 7. Restore the terminal (always)
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Main loop failed: {e:#}");
    }
    result
}
