use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{NOISE_FLOOR, NOISE_FLOOR_REFERENCE_PIXELS};
use crate::error::{AdmError, Result};
use crate::frame::PixelFormat;

/// Per-stream configuration. Any change requires a new [`super::AdmState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmConfig {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub pixel_format: PixelFormat,
}

impl AdmConfig {
    pub fn new(width: usize, height: usize, pixel_format: PixelFormat) -> Self {
        Self {
            width,
            height,
            pixel_format,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(AdmError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Resolution-relative floor below which num/den are treated as zero.
    pub fn noise_floor(&self) -> f64 {
        NOISE_FLOOR * (self.width * self.height) as f64 / NOISE_FLOOR_REFERENCE_PIXELS
    }
}

impl Default for AdmConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            pixel_format: PixelFormat::default(),
        }
    }
}

/// Label written before the score on each stats line.
///
/// `Vif` reproduces the literal text existing tooling parses, even though
/// the value is an ADM score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsLabel {
    #[default]
    Vif,
    Adm,
}

impl fmt::Display for StatsLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vif => write!(f, "vif"),
            Self::Adm => write!(f, "adm"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Stats file path, `-` for stdout. `None` disables stats output.
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub label: StatsLabel,
}

/// Everything needed to score one reference/distorted file pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub reference: PathBuf,
    pub distorted: PathBuf,
    /// Score frame chunks on Rayon workers, one working-buffer arena each.
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub adm: AdmConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            reference: PathBuf::from("reference.yuv"),
            distorted: PathBuf::from("distorted.yuv"),
            parallel: false,
            adm: AdmConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}
