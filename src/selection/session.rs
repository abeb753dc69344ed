// src/selection/session.rs

use crate::math::{
    error::{MathError, MathResult},
    geometry::{
        CloseRejection, PointSequence, Polygon, PolygonProperties, ScanlineSampling,
    },
    types::Point,
    units::{ScaleFactor, area_to_physical_units},
    utils::constants,
};
use crate::selection::{
    config::SelectionConfig,
    report::{SelectionReport, SelectionStatus},
};
use std::fmt;

/// Zustand der Auswahl.
///
/// `Empty -> Collecting -> Closed`; `reset` führt aus jedem Zustand zurück nach `Empty`.
/// Aus `Closed` gibt es keinen anderen Ausweg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionPhase {
    #[default]
    Empty,
    Collecting,
    Closed,
}

impl fmt::Display for SelectionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionPhase::Empty => "empty",
            SelectionPhase::Collecting => "collecting",
            SelectionPhase::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Antwort auf einen Schließversuch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloseOutcome {
    pub closed: bool,
    pub reason: Option<CloseRejection>,
}

impl CloseOutcome {
    fn success() -> Self {
        Self {
            closed: true,
            reason: None,
        }
    }

    fn rejected(reason: CloseRejection) -> Self {
        Self {
            closed: false,
            reason: Some(reason),
        }
    }
}

/// Eine Auswahlsitzung: Punktfolge plus Schließzustand hinter einer API.
#[derive(Debug, Clone)]
pub struct SelectionSession {
    close_threshold: f64,
    sampling: ScanlineSampling,
    sequence: PointSequence,
    /// Geschlossenes Polygon plus die beim Schließen gültige Abtastung.
    polygon: Option<(Polygon, ScanlineSampling)>,
    phase: SelectionPhase,
    status: SelectionStatus,
}

impl SelectionSession {
    /// Sitzung mit Standard-Schwelle (10 px) und Abtastung in der Zeilenmitte.
    pub fn new() -> Self {
        Self::with_config(&SelectionConfig::default())
    }

    pub fn with_config(config: &SelectionConfig) -> Self {
        Self {
            close_threshold: config.close_threshold,
            sampling: config.sampling,
            sequence: PointSequence::new(),
            polygon: None,
            phase: SelectionPhase::Empty,
            status: SelectionStatus::SelectArea,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn status(&self) -> SelectionStatus {
        self.status
    }

    pub fn points(&self) -> &[Point] {
        self.sequence.points()
    }

    pub fn is_closed(&self) -> bool {
        self.phase == SelectionPhase::Closed
    }

    pub fn close_threshold(&self) -> f64 {
        self.close_threshold
    }

    /// Übernimmt Schwelle und Abtastung einer geänderten Konfiguration.
    /// Ein bereits geschlossenes Polygon behält die Abtastung vom Zeitpunkt des Schließens;
    /// die neue gilt erst nach `reset`.
    pub fn apply_config(&mut self, config: &SelectionConfig) {
        self.close_threshold = config.close_threshold;
        self.sampling = config.sampling;
    }

    /// Hängt einen Punkt an. Im Zustand `Closed` wird der Punkt abgewiesen.
    pub fn add_point(&mut self, point: impl Into<Point>) -> MathResult<()> {
        if self.phase == SelectionPhase::Closed {
            return Err(self.invalid_state("add_point"));
        }
        self.sequence.push(point.into());
        self.phase = SelectionPhase::Collecting;
        Ok(())
    }

    /// Versucht, das Polygon zu schließen ("Fertig").
    ///
    /// Schlägt die Schließbedingung fehl, bleibt die Auswahl offen (`Collecting`)
    /// und der Status wechselt auf "Area not found".
    pub fn try_close(&mut self) -> CloseOutcome {
        if self.polygon.is_some() {
            return CloseOutcome::success();
        }

        match Polygon::close(&self.sequence, self.close_threshold) {
            Ok(polygon) => {
                self.polygon = Some((polygon, self.sampling));
                self.phase = SelectionPhase::Closed;
                self.status = SelectionStatus::RoofSelected;
                CloseOutcome::success()
            }
            Err(reason) => {
                self.phase = SelectionPhase::Collecting;
                self.status = SelectionStatus::AreaNotFound;
                CloseOutcome::rejected(reason)
            }
        }
    }

    /// Das geschlossene Polygon; nur im Zustand `Closed`.
    pub fn polygon(&self) -> MathResult<&Polygon> {
        self.closed("polygon").map(|(polygon, _)| polygon)
    }

    pub fn average_slope_degrees(&self) -> MathResult<f64> {
        let (polygon, _) = self.closed("average_slope_degrees")?;
        polygon.average_slope()
    }

    pub fn area_pixels(&self) -> MathResult<f64> {
        let (polygon, sampling) = self.closed("area_pixels")?;
        Ok(polygon.area_pixels_with(sampling))
    }

    pub fn area_physical_units(&self, scale_factor: f64) -> MathResult<f64> {
        let (polygon, sampling) = self.closed("area_physical_units")?;
        Ok(area_to_physical_units(
            polygon.area_pixels_with(sampling),
            scale_factor,
        ))
    }

    pub fn report(&self, scale: ScaleFactor) -> MathResult<SelectionReport> {
        let (polygon, sampling) = self.closed("report")?;
        SelectionReport::from_polygon(polygon, scale, sampling)
    }

    /// Verwirft alle Punkte und kehrt nach `Empty` zurück.
    pub fn reset(&mut self) {
        self.sequence.clear();
        self.polygon = None;
        self.phase = SelectionPhase::Empty;
        self.status = SelectionStatus::SelectArea;
    }

    /// Ob ein "Fertig" jetzt erfolgreich wäre, ohne den Zustand zu ändern.
    pub fn can_close(&self) -> bool {
        self.polygon.is_some() || self.sequence.can_close(self.close_threshold)
    }

    /// Anzahl Punkte, die noch fehlen, bevor ein Schließen überhaupt möglich ist.
    pub fn missing_points(&self) -> usize {
        constants::MIN_POLYGON_POINTS.saturating_sub(self.sequence.len())
    }

    fn closed(&self, operation: &'static str) -> MathResult<(&Polygon, ScanlineSampling)> {
        self.polygon
            .as_ref()
            .map(|(polygon, sampling)| (polygon, *sampling))
            .ok_or_else(|| self.invalid_state(operation))
    }

    fn invalid_state(&self, operation: &'static str) -> MathError {
        MathError::InvalidState {
            operation,
            phase: self.phase.to_string(),
        }
    }
}

impl Default for SelectionSession {
    fn default() -> Self {
        Self::new()
    }
}
