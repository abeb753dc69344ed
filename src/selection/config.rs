// src/selection/config.rs

use crate::math::{
    error::{MathError, MathResult},
    geometry::ScanlineSampling,
    units::ScaleFactor,
    utils::constants,
};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Konfiguration der Polygon-Auswahl.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Maximaler Abstand (px) zwischen erstem und letztem Punkt beim Schließen.
    pub close_threshold: f64,
    /// Physikalische Fläche pro Pixelfläche (Standard: 0.052 m²/px²).
    pub scale_factor: f64,
    /// Abtastung der Scanline innerhalb einer Pixelzeile.
    pub sampling: ScanlineSampling,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            close_threshold: constants::CLOSE_THRESHOLD,
            scale_factor: constants::DEFAULT_SCALE_FACTOR,
            sampling: ScanlineSampling::default(),
        }
    }
}

impl SelectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_close_threshold(mut self, threshold: f64) -> Self {
        self.close_threshold = threshold;
        self
    }

    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn with_sampling(mut self, sampling: ScanlineSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Validierter Skalierungsfaktor.
    pub fn scale(&self) -> MathResult<ScaleFactor> {
        ScaleFactor::new(self.scale_factor)
    }

    pub fn validate(&self) -> MathResult<()> {
        if !self.close_threshold.is_finite() || self.close_threshold <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Close threshold must be positive and finite, got {}",
                    self.close_threshold
                ),
            });
        }
        self.scale()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SelectionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.close_threshold, 10.0);
        assert_eq!(config.scale_factor, 0.052);
        assert_eq!(config.sampling, ScanlineSampling::RowCenter);
    }

    #[test]
    fn test_builder() {
        let config = SelectionConfig::new()
            .with_close_threshold(4.0)
            .with_scale_factor(0.5)
            .with_sampling(ScanlineSampling::RowStart);
        assert!(config.validate().is_ok());
        assert_eq!(config.scale().unwrap().value(), 0.5);
        assert_eq!(config.sampling, ScanlineSampling::RowStart);
    }

    #[test]
    fn test_invalid_values() {
        assert!(
            SelectionConfig::new()
                .with_close_threshold(0.0)
                .validate()
                .is_err()
        );
        assert!(
            SelectionConfig::new()
                .with_scale_factor(-0.1)
                .validate()
                .is_err()
        );
        assert!(
            SelectionConfig::new()
                .with_close_threshold(f64::NAN)
                .validate()
                .is_err()
        );
    }
}
