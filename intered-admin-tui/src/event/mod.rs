//! Event layer: input handling
//!
//! Turns keyboard input into messages.
//!
//! - `poll_event`: waits up to a timeout for the next terminal event, called by the main loop
//! - `handle_event`: dispatches a key event, in this order:
//!     1. an open search / date input line takes every key
//!     2. an open modal takes every key, by modal type
//!     3. global shortcuts
//!     4. the focused panel (navigation or content)

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
