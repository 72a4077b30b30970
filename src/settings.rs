//! Grid and timing settings
//!
//! Read from LocalStorage in the browser so a page can override the board
//! without a rebuild; native builds use the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH, TICK_INTERVAL_MS};
use crate::sim::GameState;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grid width in cells
    pub width: u32,
    /// Grid height in cells
    pub height: u32,
    /// Cell edge length in CSS pixels
    pub cell_size: u32,
    /// Milliseconds between ticks
    pub tick_interval_ms: u32,
    /// Fixed food seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "wrap_snake_settings";

    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        GameState::new(self.width, self.height)
            .map_err(|e| SettingsError::Invalid(e.to_string()))?;
        if self.cell_size == 0 {
            return Err(SettingsError::Invalid("cell_size must be positive".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(SettingsError::Invalid(
                "tick_interval_ms must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Board size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width * self.cell_size, self.height * self.cell_size)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(Ok(Some(json))) = storage.map(|s| s.get_item(Self::STORAGE_KEY)) {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring stored settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
