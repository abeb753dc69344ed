// src/math/types/point.rs
use bevy::math::{DVec2, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ein angeklickter Bildpunkt in Pixelkoordinaten (Anzeigeraum, y wächst nach unten).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Verlustbehaftet (f64 -> f32), nur für Darstellung gedacht.
    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Conversion traits
impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self {
            x: v.x as f64,
            y: v.y as f64,
        }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<Point> for geo::Coord<f64> {
    fn from(p: Point) -> Self {
        geo::Coord { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn test_conversions() {
        let p: Point = (2.0, -3.0).into();
        assert_eq!(p, Point::new(2.0, -3.0));

        let from_vec: Point = Vec2::new(1.5, 2.5).into();
        assert_eq!(from_vec, Point::new(1.5, 2.5));

        let back: DVec2 = from_vec.into();
        assert_eq!(back, DVec2::new(1.5, 2.5));
    }
}
