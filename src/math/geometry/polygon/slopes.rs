// src/math/geometry/polygon/slopes.rs

use crate::math::{
    error::{MathError, MathResult},
    types::Point,
    utils::angles,
};

/// Steigungswinkel jeder gezeichneten Kante `(points[i], points[i + 1])` in Grad, Bereich (-180, 180].
///
/// Die Schließkante zählt hier bewusst NICHT mit (im Gegensatz zur Flächenberechnung).
/// Für weniger als zwei Punkte ist das Ergebnis leer.
pub fn compute_slopes(points: &[Point]) -> Vec<f64> {
    points
        .windows(2)
        .map(|edge| edge_angle(edge[0], edge[1]))
        .collect()
}

/// Winkel einer einzelnen Kante in Grad (y wächst im Bildraum nach unten).
pub fn edge_angle(from: Point, to: Point) -> f64 {
    let radians = (to.y - from.y).atan2(to.x - from.x);
    angles::normalize_degrees(angles::rad_to_deg(radians))
}

/// Arithmetisches Mittel von [`compute_slopes`].
pub fn average_slope(points: &[Point]) -> MathResult<f64> {
    let slopes = compute_slopes(points);
    if slopes.is_empty() {
        return Err(MathError::InsufficientPoints {
            expected: 2,
            actual: points.len(),
        });
    }
    Ok(slopes.iter().sum::<f64>() / slopes.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn test_axis_aligned_edges() {
        assert_eq!(compute_slopes(&pts(&[(0.0, 0.0), (10.0, 0.0)])), vec![0.0]);
        assert_eq!(compute_slopes(&pts(&[(0.0, 0.0), (0.0, 10.0)])), vec![90.0]);
        assert_eq!(compute_slopes(&pts(&[(0.0, 10.0), (0.0, 0.0)])), vec![-90.0]);
    }

    #[test]
    fn test_leftward_edge_is_plus_180() {
        // atan2(0, -x) liefert π, atan2(-0.0, -x) liefert -π: beide landen bei +180
        assert_eq!(compute_slopes(&pts(&[(10.0, 0.0), (0.0, 0.0)])), vec![180.0]);
        let negative_zero = vec![Point::new(10.0, 0.0), Point::new(0.0, -0.0)];
        assert_eq!(edge_angle(negative_zero[0], negative_zero[1]), 180.0);
    }

    #[test]
    fn test_fewer_than_two_points() {
        assert!(compute_slopes(&[]).is_empty());
        assert!(compute_slopes(&pts(&[(4.0, 4.0)])).is_empty());
        assert_eq!(
            average_slope(&pts(&[(4.0, 4.0)])),
            Err(MathError::InsufficientPoints {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_average_of_triangle_edges() {
        // Rechtwinkliges Dreieck, manuell am Startpunkt geschlossen: 0°, 135°, -90°
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (0.0, 1.0)]);
        let slopes = compute_slopes(&points);
        assert_eq!(slopes.len(), 3);
        assert_relative_eq!(slopes[0], 0.0);
        assert_relative_eq!(slopes[1], 135.0);
        assert_relative_eq!(slopes[2], -90.0);
        assert_relative_eq!(average_slope(&points).unwrap(), 15.0);
    }

    #[test]
    fn test_average_of_zero_ninety_and_135_degrees() {
        // Kanten eines rechtwinklig-gleichschenkligen Dreiecks: 0°, 90°, 135°
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 20.0)]);
        let slopes = compute_slopes(&points);
        assert_eq!(slopes.len(), 3);
        assert_relative_eq!(slopes[0], 0.0);
        assert_relative_eq!(slopes[1], 90.0);
        assert_relative_eq!(slopes[2], 135.0);
        assert_relative_eq!(average_slope(&points).unwrap(), 75.0);
    }

    #[test]
    fn test_closing_edge_is_excluded() {
        let square = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let slopes = compute_slopes(&square);
        assert_eq!(slopes, vec![0.0, 90.0, 180.0]);
        assert_relative_eq!(average_slope(&square).unwrap(), 90.0);
    }
}
