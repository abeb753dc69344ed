// src/selection/events.rs
use crate::math::{geometry::CloseRejection, types::Point};
use crate::selection::report::SelectionReport;
use bevy::prelude::*;

// --- Kommandos von der UI an die Auswahl ---

/// Ein Klick auf das Bild (Pixelkoordinaten im Anzeigeraum).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointAdded {
    pub point: Point,
}

impl PointAdded {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            point: Point::new(x, y),
        }
    }
}

/// Der Nutzer hat "Fertig" gedrückt.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct FinishRequested;

/// Auswahl verwerfen und neu beginnen.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetRequested;

// --- Ergebnisse für die UI ---

#[derive(Event, Debug, Clone)]
pub struct SelectionClosed {
    pub report: SelectionReport,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SelectionRejected {
    pub reason: CloseRejection,
}

/// Punkt kam nach dem Schließen und wurde ignoriert.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointRejected {
    pub point: Point,
}
