//! Configuration management for the virtual joystick
//!
//! Handles loading, validating and saving YAML joystick descriptions:
//! tuning settings, region layout and the canvas the joystick lives on.

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::geometry::{JoystickLayout, Region};
use crate::joystick::{JoystickSettings, VirtualJoystick};
use crate::space::FlatCanvas;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct JoystickConfig {
    #[serde(default)]
    pub joystick: JoystickSettings,
    #[serde(default)]
    pub layout: JoystickLayout,
    #[serde(default)]
    pub canvas: FlatCanvas,
}

impl JoystickConfig {
    /// Load configuration from file with validation
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        debug!("Loaded joystick config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: JoystickConfig = serde_yaml::from_str(contents)
            .context("Failed to parse YAML config")?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(self)
            .context("Failed to serialize config to YAML")?;

        fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration for correctness and consistency
    pub fn validate(&self) -> Result<()> {
        self.joystick.validate().context("Invalid joystick settings")?;

        let root = &self.layout.root;
        if !root.size.is_finite() || root.size.min_element() < 0.0 {
            anyhow::bail!("layout.root.size must be finite and non-negative");
        }
        if !root.pivot.is_finite() {
            anyhow::bail!("layout.root.pivot must be finite");
        }
        validate_region("base", &self.layout.base)?;
        validate_region("handle", &self.layout.handle)?;

        let canvas = &self.canvas;
        if !canvas.origin.is_finite() {
            anyhow::bail!("canvas.origin must be finite");
        }
        if !canvas.scale_factor.is_finite() || canvas.scale_factor <= 0.0 {
            anyhow::bail!(
                "canvas.scale_factor {} is invalid (must be > 0)",
                canvas.scale_factor
            );
        }
        match (&canvas.camera, canvas.render_mode.uses_camera()) {
            (None, true) => {
                anyhow::bail!("canvas.render_mode {} requires a camera", canvas.render_mode);
            }
            (Some(camera), _) => {
                if !camera.zoom.is_finite() || camera.zoom <= 0.0 {
                    anyhow::bail!("canvas.camera.zoom {} is invalid (must be > 0)", camera.zoom);
                }
                if !camera.center.is_finite() || !camera.viewport.is_finite() {
                    anyhow::bail!("canvas.camera center and viewport must be finite");
                }
            }
            (None, false) => {}
        }

        Ok(())
    }

    /// JSON schema of the config file
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(JoystickConfig);
        serde_json::to_string_pretty(&schema).context("Failed to serialize config schema")
    }

    /// Build a joystick from this configuration
    pub fn build(&self) -> VirtualJoystick<FlatCanvas> {
        VirtualJoystick::new(self.joystick, self.layout, self.canvas.clone())
    }
}

/// Validate a single region
fn validate_region(name: &str, region: &Region) -> Result<()> {
    if !region.size.is_finite() || region.size.min_element() < 0.0 {
        anyhow::bail!("layout.{}.size must be finite and non-negative", name);
    }
    if !region.anchored_position.is_finite() || !region.pivot.is_finite() || !region.anchor.is_finite() {
        anyhow::bail!("layout.{} positions must be finite", name);
    }
    Ok(())
}
