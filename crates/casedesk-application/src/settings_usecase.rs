//! Settings page use cases.

use casedesk_core::error::Result;
use casedesk_core::preference::{Preferences, Theme};

pub struct SettingsUseCase {
    preferences: Preferences,
}

impl SettingsUseCase {
    pub fn new(preferences: Preferences) -> Self {
        Self { preferences }
    }

    pub async fn theme(&self) -> Result<Theme> {
        self.preferences.theme().await
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<Theme> {
        self.preferences.set_theme(theme).await?;
        tracing::info!("Theme set to {}", theme);
        Ok(theme)
    }

    /// Flips between light and dark and returns the new theme.
    pub async fn toggle_theme(&self) -> Result<Theme> {
        let next = self.theme().await?.toggled();
        self.set_theme(next).await
    }
}
