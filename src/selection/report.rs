// src/selection/report.rs

use crate::math::{
    error::MathResult,
    geometry::{Polygon, PolygonProperties, ScanlineSampling},
    units::ScaleFactor,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statuszeile für die UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionStatus {
    #[default]
    SelectArea,
    AreaNotFound,
    RoofSelected,
}

impl fmt::Display for SelectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SelectionStatus::SelectArea => "Select the area",
            SelectionStatus::AreaNotFound => "Area not found",
            SelectionStatus::RoofSelected => "Roof selected",
        };
        f.write_str(text)
    }
}

/// Ergebnis einer abgeschlossenen Auswahl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionReport {
    pub point_count: usize,
    /// Kantenwinkel in Grad (gezeichnete Kanten, ohne Schließkante)
    pub slopes_deg: Vec<f64>,
    pub average_slope_deg: f64,
    /// Scanline-Fläche in px²
    pub area_pixels: f64,
    /// `area_pixels * scale_factor`
    pub area_physical: f64,
    pub scale_factor: f64,
    /// Exakte Ringfläche in px² zum Vergleich
    pub shoelace_area_pixels: f64,
}

impl SelectionReport {
    pub fn from_polygon(
        polygon: &Polygon,
        scale: ScaleFactor,
        sampling: ScanlineSampling,
    ) -> MathResult<Self> {
        let area_pixels = polygon.area_pixels_with(sampling);
        Ok(Self {
            point_count: polygon.len(),
            slopes_deg: polygon.slopes(),
            average_slope_deg: polygon.average_slope()?,
            area_pixels,
            area_physical: scale.apply(area_pixels),
            scale_factor: scale.value(),
            shoelace_area_pixels: polygon.shoelace_area(),
        })
    }
}

impl fmt::Display for SelectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Selected roof area: {:.2} square meters",
            self.area_physical
        )?;
        write!(f, "Average roof slope: {:.2} degrees", self.average_slope_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{geometry::PointSequence, types::Point};
    use approx::assert_relative_eq;

    #[test]
    fn test_report_for_square() {
        let sequence: PointSequence = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
            .into_iter()
            .map(Point::from)
            .collect();
        let polygon = Polygon::close(&sequence, 10.5).unwrap();
        let report = SelectionReport::from_polygon(
            &polygon,
            ScaleFactor::default(),
            ScanlineSampling::RowCenter,
        )
        .unwrap();

        assert_eq!(report.point_count, 4);
        assert_relative_eq!(report.area_pixels, 100.0);
        assert_relative_eq!(report.area_physical, 5.2);
        assert_relative_eq!(report.average_slope_deg, 90.0);
        assert_relative_eq!(report.shoelace_area_pixels, 100.0);
        assert_eq!(
            report.to_string(),
            "Selected roof area: 5.20 square meters\nAverage roof slope: 90.00 degrees"
        );
    }

    #[test]
    fn test_status_text() {
        assert_eq!(SelectionStatus::default().to_string(), "Select the area");
        assert_eq!(SelectionStatus::AreaNotFound.to_string(), "Area not found");
        assert_eq!(SelectionStatus::RoofSelected.to_string(), "Roof selected");
    }
}
