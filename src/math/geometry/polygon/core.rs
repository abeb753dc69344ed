// src/math/geometry/polygon/core.rs

use crate::math::{
    error::MathError,
    types::{Bounds2D, Point},
    utils::constants,
};
use std::fmt;

/// Euklidischer Abstand zwischen zwei Punkten.
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance_to(p2)
}

/// Grund, warum eine Punktfolge (noch) nicht geschlossen werden kann.
///
/// Das ist ein Status für die UI, kein Fehler: Die Auswahl bleibt offen
/// und der Nutzer kann weitere Punkte setzen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CloseRejection {
    /// Weniger als drei Punkte.
    TooFewPoints { actual: usize },
    /// Erster und letzter Punkt liegen nicht nah genug beieinander.
    EndpointsNotAdjacent { distance: f64, threshold: f64 },
}

impl CloseRejection {
    /// Kurzer, stabiler Bezeichner (z.B. für Logs oder eine UI-Übersetzung).
    pub fn code(&self) -> &'static str {
        match self {
            CloseRejection::TooFewPoints { .. } => "too_few_points",
            CloseRejection::EndpointsNotAdjacent { .. } => "endpoints_not_adjacent",
        }
    }
}

impl fmt::Display for CloseRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseRejection::TooFewPoints { actual } => write!(
                f,
                "at least {} points are needed, got {}",
                constants::MIN_POLYGON_POINTS,
                actual
            ),
            CloseRejection::EndpointsNotAdjacent {
                distance,
                threshold,
            } => write!(
                f,
                "last point is {distance:.2} px away from the first (must be below {threshold:.2} px)"
            ),
        }
    }
}

impl From<CloseRejection> for MathError {
    fn from(rejection: CloseRejection) -> Self {
        match rejection {
            CloseRejection::TooFewPoints { actual } => MathError::InsufficientPoints {
                expected: constants::MIN_POLYGON_POINTS,
                actual,
            },
            CloseRejection::EndpointsNotAdjacent {
                distance,
                threshold,
            } => MathError::EndpointsNotAdjacent {
                distance,
                threshold,
            },
        }
    }
}

/// Prüft die Schließbedingung und liefert bei Misserfolg den Grund.
/// Zu wenige Punkte werden vor dem Abstand geprüft.
pub fn check_closure(points: &[Point], threshold: f64) -> Result<(), CloseRejection> {
    if points.len() < constants::MIN_POLYGON_POINTS {
        return Err(CloseRejection::TooFewPoints {
            actual: points.len(),
        });
    }

    // len >= 3, first/last existieren
    let (first, last) = (points[0], points[points.len() - 1]);
    let gap = distance(first, last);
    if gap < threshold {
        Ok(())
    } else {
        Err(CloseRejection::EndpointsNotAdjacent {
            distance: gap,
            threshold,
        })
    }
}

/// `true` gdw. mindestens drei Punkte vorliegen und der Abstand erster/letzter Punkt
/// strikt kleiner als `threshold` ist.
pub fn can_close(points: &[Point], threshold: f64) -> bool {
    check_closure(points, threshold).is_ok()
}

/// Offene Punktfolge, wie sie durch Klicks entsteht.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn bounds(&self) -> Option<Bounds2D> {
        Bounds2D::from_points(&self.points)
    }

    pub fn can_close(&self, threshold: f64) -> bool {
        can_close(&self.points, threshold)
    }
}

impl FromIterator<Point> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Point>> for PointSequence {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Geschlossenes Polygon.
///
/// Entsteht nur über [`Polygon::close`] und ist danach unveränderlich. Die
/// Schließkante (letzter -> erster Punkt) wird NICHT als Punkt gespeichert,
/// sie ist nur über [`Polygon::ring_edges`] sichtbar.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Schließt eine Punktfolge, falls die Schließbedingung gilt.
    pub fn close(sequence: &PointSequence, threshold: f64) -> Result<Self, CloseRejection> {
        check_closure(sequence.points(), threshold)?;
        Ok(Self {
            vertices: sequence.points().to_vec(),
        })
    }

    /// Gibt einen Slice der Vertices zurück (ohne dupliziertem Startpunkt).
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Kanten wie gezeichnet: `(v[i], v[i + 1])`, ohne Schließkante.
    pub fn open_edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }

    /// Alle Kanten des Rings: `(v[i], v[(i + 1) % n])`, inklusive Schließkante.
    pub fn ring_edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Die synthetische Kante vom letzten zurück zum ersten Punkt.
    pub fn closing_edge(&self) -> (Point, Point) {
        // close() garantiert mindestens drei Vertices
        (self.vertices[self.vertices.len() - 1], self.vertices[0])
    }

    /// Ring als `geo::Polygon` (ohne Löcher).
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        let exterior: Vec<geo::Coord<f64>> = self.vertices.iter().map(|&p| p.into()).collect();
        geo::Polygon::new(geo::LineString::from(exterior), vec![])
    }
}

/// Display-Implementierung für Debugging.
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon({} vertices, closed)", self.vertices.len())
    }
}

/// Konvertierung von `Polygon` zu `Vec<Point>`.
impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
