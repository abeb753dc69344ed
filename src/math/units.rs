// src/math/units.rs

use crate::math::error::{MathError, MathResult};
use crate::math::utils::constants;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Umrechnungsfaktor von Pixelfläche in physikalische Fläche (z.B. m² pro px²).
///
/// Immer positiv und endlich; `ScaleFactor::new` prüft das.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub fn new(value: f64) -> MathResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Scale factor must be positive and finite, got {value}"),
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Wandelt eine Pixelfläche in physikalische Einheiten um.
    pub fn apply(&self, area_pixels: f64) -> f64 {
        area_to_physical_units(area_pixels, self.0)
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(constants::DEFAULT_SCALE_FACTOR)
    }
}

impl TryFrom<f64> for ScaleFactor {
    type Error = MathError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScaleFactor> for f64 {
    fn from(scale: ScaleFactor) -> Self {
        scale.0
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} per px²", self.0)
    }
}

/// Reine Multiplikation, keine Fehlerfälle.
pub fn area_to_physical_units(area_pixels: f64, scale_factor: f64) -> f64 {
    area_pixels * scale_factor
}
