//! Platform settings persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::PlatformSettings;

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load every settings panel
    async fn load(&self) -> CoreResult<PlatformSettings>;

    /// Save every settings panel
    ///
    /// # Arguments
    /// * `settings` - Complete settings document
    async fn save(&self, settings: &PlatformSettings) -> CoreResult<()>;
}
