//! Message layer: event messages
//!
//! The bridge between Event and Update. Every user action and state change is
//! expressed as a message; the event layer translates raw key events into
//! them and the update layer consumes them to change the model.
//!
//! ```text
//! Event ──translate──▶ AppMessage ──consume──▶ Update ──mutate──▶ Model
//!                        ├─ NavigationMessage
//!                        ├─ ContentMessage
//!                        ├─ ModalMessage
//!                        └─ FilterMessage
//! ```

mod app;
mod content;
mod filter;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use filter::FilterMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
