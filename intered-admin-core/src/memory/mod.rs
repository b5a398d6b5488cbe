//! In-memory adapters for every external interface.
//!
//! They back the seeded back-office and double as fakes in tests.

mod backup;
mod dispatcher;
mod repository;
mod settings;

pub use backup::SimulatedBackupService;
pub use dispatcher::RecordingDispatcher;
pub use repository::InMemoryRepository;
pub use settings::InMemorySettingsStore;
