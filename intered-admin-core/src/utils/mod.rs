//! Shared helpers

pub mod datetime;
mod feedback;

pub use feedback::CopyFeedback;
