// src/math/geometry/polygon/properties.rs

use crate::math::error::MathResult;
use crate::math::geometry::polygon::{
    core::{Polygon, distance},
    scanline::{self, ScanlineSampling},
    slopes,
};
use crate::math::types::Bounds2D;
use geo::Area;

/// Trait für geometrische Eigenschaften geschlossener Polygone.
///
/// Flächen laufen über den geschlossenen Ring, Steigungen nur über die
/// gezeichneten Kanten. Diese Asymmetrie ist gewollt und darf nicht vereinheitlicht werden,
/// sonst ändern sich die Ergebnisse.
pub trait PolygonProperties {
    /// Scanline-Fläche in px² (Abtastung in der Zeilenmitte).
    fn area_pixels(&self) -> f64;

    /// Scanline-Fläche in px² mit expliziter Abtastung.
    fn area_pixels_with(&self, sampling: ScanlineSampling) -> f64;

    /// Exakte Fläche des Rings (Shoelace über `geo`), als Gegenprobe zur Scanline.
    fn shoelace_area(&self) -> f64;

    /// Kantenwinkel in Grad, ohne Schließkante.
    fn slopes(&self) -> Vec<f64>;

    /// Mittelwert von [`PolygonProperties::slopes`].
    fn average_slope(&self) -> MathResult<f64>;

    /// Umfang des Rings in px, inklusive Schließkante.
    fn perimeter(&self) -> f64;

    fn bounds(&self) -> Option<Bounds2D>;
}

impl PolygonProperties for Polygon {
    fn area_pixels(&self) -> f64 {
        scanline::polygon_area_pixels(self.vertices())
    }

    fn area_pixels_with(&self, sampling: ScanlineSampling) -> f64 {
        scanline::polygon_area_pixels_with(self.vertices(), sampling)
    }

    fn shoelace_area(&self) -> f64 {
        self.to_geo().unsigned_area()
    }

    fn slopes(&self) -> Vec<f64> {
        slopes::compute_slopes(self.vertices())
    }

    fn average_slope(&self) -> MathResult<f64> {
        slopes::average_slope(self.vertices())
    }

    fn perimeter(&self) -> f64 {
        self.ring_edges().map(|(a, b)| distance(a, b)).sum()
    }

    fn bounds(&self) -> Option<Bounds2D> {
        Bounds2D::from_points(self.vertices())
    }
}
