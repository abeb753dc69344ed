// src/debug/visualization/svg.rs
use crate::math::types::{Bounds2D, Point};
use crate::selection::session::SelectionSession;
use bevy::log::info;
use std::path::Path;
use svg::Document;
use svg::node::element::{Circle, Line};

// Gleiche Optik wie die Auswahl auf der Zeichenfläche: rote Punkte, blaue Kanten
const POINT_RADIUS: f64 = 3.0;
const POINT_FILL: &str = "red";
const EDGE_STROKE: &str = "blue";
const EDGE_WIDTH: f64 = 1.0;
const PADDING: f64 = 10.0;

fn edge(from: Point, to: Point, class: &str) -> Line {
    Line::new()
        .set("x1", from.x)
        .set("y1", from.y)
        .set("x2", to.x)
        .set("y2", to.y)
        .set("stroke", EDGE_STROKE)
        .set("stroke-width", EDGE_WIDTH)
        .set("class", class)
}

/// Baut ein SVG der Auswahl: ein Kreis pro Punkt, eine Linie pro gezeichneter Kante
/// und, falls `closed`, die Schließkante zurück zum ersten Punkt.
///
/// Ohne `bounds` wird die Bounding Box der Punkte plus 10 px Rand verwendet.
pub fn outline_document(points: &[Point], closed: bool, bounds: Option<Bounds2D>) -> Document {
    let view = bounds
        .or_else(|| Bounds2D::from_points(points).map(|b| b.expand(PADDING)))
        .unwrap_or_else(|| Bounds2D {
            min: Point::new(0.0, 0.0),
            max: Point::new(PADDING, PADDING),
        });

    let mut document = Document::new()
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                view.min.x,
                view.min.y,
                view.width(),
                view.height()
            ),
        )
        .set("width", view.width())
        .set("height", view.height());

    for pair in points.windows(2) {
        document = document.add(edge(pair[0], pair[1], "edge"));
    }

    if closed {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            document = document.add(edge(last, first, "closing-edge"));
        }
    }

    // Punkte zuletzt, damit sie über den Linien liegen
    for point in points {
        document = document.add(
            Circle::new()
                .set("cx", point.x)
                .set("cy", point.y)
                .set("r", POINT_RADIUS)
                .set("fill", POINT_FILL)
                .set("class", "point"),
        );
    }

    document
}

/// SVG des aktuellen Stands einer Sitzung.
pub fn session_document(session: &SelectionSession) -> Document {
    outline_document(session.points(), session.is_closed(), None)
}

/// Speichert das SVG.
pub fn save_outline_svg(path: impl AsRef<Path>, document: &Document) -> std::io::Result<()> {
    svg::save(path.as_ref(), document)?;
    info!("Outline SVG '{}' wurde erstellt.", path.as_ref().display());
    Ok(())
}
