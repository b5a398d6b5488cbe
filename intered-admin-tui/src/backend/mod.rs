//! Backend layer: wraps `intered-admin-core`
//!
//! - `core_service`: owns the async runtime and the service context
//! - `config_service`: reads and writes the TUI config file

mod config_service;
mod core_service;

pub use config_service::{AppConfig, ConfigService, JsonConfigService};
pub use core_service::Backend;

#[cfg(test)]
pub use config_service::MemoryConfigService;
