//! Application main loop
//!
//! ```text
//! loop {
//!     terminal.draw(|f| view::render(app, f))     // render
//!     if app.should_quit { break }
//!     if let Some(event) = poll_event(100ms) {    // wait for input
//!         update(app, handle_event(event, app))
//!     }
//!     update(app, Tick)                           // drain task progress, expire flags
//! }
//! ```

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Runs the application main loop
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. Render UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. Check whether to quit
        if app.should_quit {
            break;
        }

        // 3. Poll events (100ms timeout)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. Translate the event into a message
            let msg = event::handle_event(event, app);

            // 5. Update state
            update::update(app, msg);
        }

        // 6. Background progress
        update::update(app, AppMessage::Tick);
    }

    Ok(())
}
