// src/math/utils.rs

/// Mathematische Konstanten und Standardwerte der Auswahl
pub mod constants {
    /// Maximaler Abstand (px) zwischen erstem und letztem Punkt, damit das Polygon schließt.
    pub const CLOSE_THRESHOLD: f64 = 10.0;

    /// Mindestanzahl Punkte für ein geschlossenes Polygon.
    pub const MIN_POLYGON_POINTS: usize = 3;

    /// m² pro Pixelfläche
    pub const DEFAULT_SCALE_FACTOR: f64 = 0.052;

    /// Betragsgrenze (px) für Scanline-Zeilen. Eingaben sind Anzeige-Pixel;
    /// Zeilen außerhalb von `[-MAX_SCANLINE_EXTENT, MAX_SCANLINE_EXTENT)` werden nicht besucht.
    pub const MAX_SCANLINE_EXTENT: f64 = 1_048_576.0;
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    /// Konvertiert Radiant zu Grad
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians.to_degrees()
    }

    /// Normalisiert einen Winkel in Grad auf (-180, 180]
    pub fn normalize_degrees(degrees: f64) -> f64 {
        let mut result = degrees % 360.0;
        if result > 180.0 {
            result -= 360.0;
        } else if result <= -180.0 {
            result += 360.0;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_degrees_half_open_range() {
        assert_relative_eq!(angles::normalize_degrees(-180.0), 180.0);
        assert_relative_eq!(angles::normalize_degrees(180.0), 180.0);
        assert_relative_eq!(angles::normalize_degrees(270.0), -90.0);
        assert_relative_eq!(angles::normalize_degrees(-90.0), -90.0);
        assert_relative_eq!(angles::normalize_degrees(540.0), 180.0);
    }

    #[test]
    fn test_rad_to_deg() {
        assert_relative_eq!(angles::rad_to_deg(std::f64::consts::PI), 180.0);
        assert_relative_eq!(angles::rad_to_deg(std::f64::consts::FRAC_PI_2), 90.0);
    }
}
