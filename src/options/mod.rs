//! Camera configuration with TOML preset support.
//!
//! Starting placement, tuning parameters, clip planes, and key bindings
//! serialize to/from TOML. Every struct uses `#[serde(default)]` so partial
//! files (e.g. only overriding `[camera]`) work correctly.

mod camera;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Projection};
use crate::error::FlycamError;
use crate::input::{InputProcessor, KeyBindings};

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera placement, tuning, and projection parameters.
    pub camera: CameraOptions,
    /// Movement key bindings.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FlycamError::preset_io(path, e))?;
        let options = Self::from_toml(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, FlycamError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| FlycamError::PresetFormat(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlycamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlycamError::PresetFormat(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| FlycamError::preset_io(parent, e))?;
        }
        std::fs::write(path, content)
            .map_err(|e| FlycamError::preset_io(path, e))
    }

    /// Camera initialised from [`CameraOptions`].
    #[must_use]
    pub fn build_camera(&self) -> Camera {
        Camera::from_options(&self.camera)
    }

    /// Projection for a `width` x `height` viewport using the configured
    /// clip planes.
    #[must_use]
    pub fn build_projection(&self, width: u32, height: u32) -> Projection {
        Projection::new(width, height)
            .with_clip_planes(self.camera.znear, self.camera.zfar)
    }

    /// Input processor using the configured bindings and pitch constraint.
    #[must_use]
    pub fn build_input(&self) -> InputProcessor {
        InputProcessor::with_key_bindings(self.keybindings.clone())
            .with_constrain_pitch(self.camera.constrain_pitch)
    }
}
