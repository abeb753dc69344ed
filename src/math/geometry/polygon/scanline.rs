// src/math/geometry/polygon/scanline.rs

use crate::math::types::{Bounds2D, Point};
use serde::{Deserialize, Serialize};

/// Höhe innerhalb einer Pixelzeile, an der die Scanline die Kanten schneidet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScanlineSampling {
    /// Zeilenmitte `y + 0.5`. Liefert für Polygone mit ganzzahligen Ecken die exakte Fläche.
    #[default]
    RowCenter,
    /// Zeilenanfang `y`. Überschätzt schräge Kanten um eine halbe Zeile pro Zeile
    /// (Dreieck (0,0),(10,0),(0,10) ergibt 55 statt 50).
    RowStart,
}

impl ScanlineSampling {
    pub fn sample_height(&self, row: i64) -> f64 {
        match self {
            ScanlineSampling::RowCenter => row as f64 + 0.5,
            ScanlineSampling::RowStart => row as f64,
        }
    }
}

/// Aufsteigend sortierte x-Schnittpunkte aller Ringkanten mit der Horizontalen `y`.
///
/// Der Ring schließt über `(i + 1) % n`, die Schließkante zählt also mit.
/// Halboffene Regel: pro Kante wird genau ein Endpunkt ausgeschlossen, damit
/// gemeinsame Vertices nicht doppelt gezählt werden.
pub fn scanline_intersections(points: &[Point], y: f64) -> Vec<f64> {
    let n = points.len();
    let mut xs = Vec::new();

    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];

        let crosses = (p1.y <= y && y < p2.y) || (p2.y <= y && y < p1.y);
        // Horizontale Kanten erfüllen `crosses` nie, der Vergleich schützt nur die Division
        if crosses && p1.y != p2.y {
            xs.push(p1.x + (y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y));
        }
    }

    xs.sort_by(f64::total_cmp);
    xs
}

/// Summe der gefüllten Spannen einer Zeile nach Even-Odd-Regel.
/// Ein unpaariger letzter Schnittpunkt (selbstschneidende/degenerierte Polygone) wird verworfen.
pub fn row_span_length(intersections: &[f64]) -> f64 {
    intersections
        .chunks_exact(2)
        .map(|pair| pair[1] - pair[0])
        .sum()
}

/// Pixelfläche per Scanline mit Abtastung in der Zeilenmitte.
pub fn polygon_area_pixels(points: &[Point]) -> f64 {
    polygon_area_pixels_with(points, ScanlineSampling::default())
}

/// Pixelfläche per Scanline.
///
/// Besucht jede ganzzahlige Zeile der Bounding Box `[floor(min_y), ceil(max_y))`.
/// Wirft nie einen Fehler: degenerierte Eingaben liefern einen nicht-negativen
/// Näherungswert (oft 0). Aufrufer sollten Folgen mit weniger als drei Punkten
/// vorher abweisen.
pub fn polygon_area_pixels_with(points: &[Point], sampling: ScanlineSampling) -> f64 {
    let Some(bounds) = Bounds2D::from_points(points) else {
        return 0.0;
    };

    bounds
        .scanline_rows()
        .map(|row| {
            let xs = scanline_intersections(points, sampling.sample_height(row));
            row_span_length(&xs)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn test_square_area() {
        let square = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert_relative_eq!(polygon_area_pixels(&square), 100.0);
        assert_relative_eq!(
            polygon_area_pixels_with(&square, ScanlineSampling::RowStart),
            100.0
        );
    }

    #[test]
    fn test_triangle_area() {
        let triangle = pts(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        assert_relative_eq!(polygon_area_pixels(&triangle), 50.0, epsilon = 1e-9);
        // Zeilenanfang: Breiten 10, 9, ..., 1
        assert_relative_eq!(
            polygon_area_pixels_with(&triangle, ScanlineSampling::RowStart),
            55.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_concave_polygon() {
        // U-Form: 30x20 Rechteck minus 10x10 Kerbe oben in der Mitte
        let u_shape = pts(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (20.0, 10.0),
            (20.0, 0.0),
            (30.0, 0.0),
            (30.0, 20.0),
            (0.0, 20.0),
        ]);
        assert_relative_eq!(polygon_area_pixels(&u_shape), 500.0);
        // Zeilen in der Kerbe haben vier Schnittpunkte
        assert_eq!(scanline_intersections(&u_shape, 5.5), vec![0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_orientation_does_not_matter() {
        let ccw = pts(&[(0.0, 0.0), (12.0, 0.0), (12.0, 7.0), (0.0, 7.0)]);
        let cw: Vec<Point> = ccw.iter().rev().copied().collect();
        assert_relative_eq!(polygon_area_pixels(&ccw), polygon_area_pixels(&cw));
    }

    #[test]
    fn test_shared_vertex_counted_once() {
        // Scanline exakt auf der Spitze einer Raute
        let diamond = pts(&[(5.0, 0.0), (10.0, 5.0), (5.0, 10.0), (0.0, 5.0)]);
        let xs = scanline_intersections(&diamond, 5.0);
        assert_eq!(xs.len(), 2);
        assert_relative_eq!(polygon_area_pixels(&diamond), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_odd_intersection_tail_is_dropped() {
        assert_eq!(row_span_length(&[1.0, 4.0, 9.0]), 3.0);
        assert_eq!(row_span_length(&[7.0]), 0.0);
        assert_eq!(row_span_length(&[]), 0.0);
    }

    #[test]
    fn test_degenerate_input_is_not_an_error() {
        assert_eq!(polygon_area_pixels(&[]), 0.0);
        assert_eq!(polygon_area_pixels(&pts(&[(3.0, 3.0)])), 0.0);
        // Zwei Punkte: hin und zurück ergibt eine Spanne der Länge 0
        assert_eq!(polygon_area_pixels(&pts(&[(0.0, 0.0), (5.0, 10.0)])), 0.0);
        // Kollinear
        let collinear = pts(&[(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)]);
        assert_relative_eq!(polygon_area_pixels(&collinear), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_self_intersecting_is_best_effort() {
        // Schleife (Achterform): Even-Odd zählt beide Dreiecke
        let bowtie = pts(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
        let area = polygon_area_pixels(&bowtie);
        assert!(area >= 0.0);
        assert_relative_eq!(area, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_area_is_idempotent() {
        let polygon = pts(&[(3.0, 1.0), (40.0, 7.0), (33.0, 29.0), (11.0, 25.0), (2.0, 12.0)]);
        let first = polygon_area_pixels(&polygon);
        let second = polygon_area_pixels(&polygon);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
