//! Util layer: infrastructure unrelated to business logic
//!
//! - `terminal`: raw mode + alternate screen setup and teardown
//! - `logging`: file subscriber for `tracing` and bridged `log` records
//! - `clipboard`: OSC 52 clipboard writes
//! - `cycle`: wrap-around stepping through a fixed set of choices

mod clipboard;
mod cycle;
mod logging;
mod terminal;

pub use clipboard::copy_to_clipboard;
pub use cycle::step;
pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
