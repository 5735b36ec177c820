//! Pad configuration
//!
//! Loaded from YAML. Every field is optional:
//!
//! ```yaml
//! scheme: eight        # four | eight
//! interaction_size: 32 # inset in density-independent units
//! density: 2.0         # pixels per unit
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::warn;

use crate::error::Error;
use crate::pad::DirectionScheme;

/// Configuration fixed for the lifetime of one pad
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PadConfig {
    #[serde(default)]
    pub scheme: DirectionScheme,
    /// Inset subtracted from the pad radius, in density-independent units
    #[serde(default = "default_interaction_size")]
    pub interaction_size: f32,
    /// Pixels per density-independent unit
    #[serde(default = "default_density")]
    pub density: f32,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            scheme: DirectionScheme::default(),
            interaction_size: default_interaction_size(),
            density: default_density(),
        }
    }
}

impl PadConfig {
    /// Load configuration from file with validation
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read pad config: {}", path.display()))?;

        Self::from_yaml_str(&contents)
            .with_context(|| format!("Invalid pad config: {}", path.display()))
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults"
        let config: PadConfig = if yaml.trim().is_empty() {
            PadConfig::default()
        } else {
            serde_yaml::from_str(yaml).context("Failed to parse YAML pad config")?
        };

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> crate::Result<()> {
        if !self.interaction_size.is_finite() || self.interaction_size < 0.0 {
            warn!("Rejecting interaction_size {}", self.interaction_size);
            return Err(Error::InvalidConfig(format!(
                "interaction_size must be a finite value >= 0, got {}",
                self.interaction_size
            )));
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            warn!("Rejecting density {}", self.density);
            return Err(Error::InvalidConfig(format!(
                "density must be a finite value > 0, got {}",
                self.density
            )));
        }
        Ok(())
    }

    /// Interaction inset in pixels
    pub fn interaction_size_px(&self) -> f32 {
        self.interaction_size * self.density
    }
}

fn default_interaction_size() -> f32 { 32.0 }
fn default_density() -> f32 { 1.0 }
