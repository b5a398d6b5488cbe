use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::traits::SettingsStore;
use crate::types::PlatformSettings;

#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    settings: RwLock<PlatformSettings>,
}

impl InMemorySettingsStore {
    #[must_use]
    pub fn new(settings: PlatformSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> CoreResult<PlatformSettings> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: &PlatformSettings) -> CoreResult<()> {
        *self.settings.write().await = settings.clone();
        Ok(())
    }
}
