//! Bevy-Anbindung der Polygon-Auswahl.
//!
//! Die UI schickt Kommandos (`PointAdded`, `FinishRequested`, `ResetRequested`)
//! und liest Ergebnisse (`SelectionClosed`, `SelectionRejected`, `PointRejected`).
//! Die Geometrie selbst kennt kein Bevy; sie steckt im `SelectionSession` der
//! Ressource `RoofSelection`.

use super::{
    config::SelectionConfig,
    events::{
        FinishRequested, PointAdded, PointRejected, ResetRequested, SelectionClosed,
        SelectionRejected,
    },
    report::{SelectionReport, SelectionStatus},
    session::SelectionSession,
};
use crate::math::geometry::CloseRejection;
use bevy::prelude::*;

/// Globale Auswahl-Ressource: die Sitzung plus das letzte Ergebnis für die Anzeige.
#[derive(Resource, Debug, Clone)]
pub struct RoofSelection {
    pub session: SelectionSession,
    pub last_report: Option<SelectionReport>,
    pub last_rejection: Option<CloseRejection>,
}

impl RoofSelection {
    pub fn new(config: &SelectionConfig) -> Self {
        Self {
            session: SelectionSession::with_config(config),
            last_report: None,
            last_rejection: None,
        }
    }

    pub fn status(&self) -> SelectionStatus {
        self.session.status()
    }
}

impl FromWorld for RoofSelection {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<SelectionConfig>()
            .cloned()
            .unwrap_or_default();
        match config.validate() {
            Ok(()) => Self::new(&config),
            Err(err) => {
                warn!("SelectionConfig is invalid, using defaults: {}", err);
                let fallback = SelectionConfig::default();
                world.insert_resource(fallback.clone());
                Self::new(&fallback)
            }
        }
    }
}

/// Registriert Konfiguration, Auswahl-Ressource, Events und die Systeme, die sie verbinden.
///
/// Reihenfolge innerhalb eines Frames: Konfiguration übernehmen, Reset, Punkte, Fertig.
/// Ein Frame mit Klicks und "Fertig" sieht also zuerst die Klicks.
pub struct RoofSelectionPlugin;

impl Plugin for RoofSelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectionConfig>()
            .init_resource::<RoofSelection>()
            .add_event::<PointAdded>()
            .add_event::<FinishRequested>()
            .add_event::<ResetRequested>()
            .add_event::<SelectionClosed>()
            .add_event::<SelectionRejected>()
            .add_event::<PointRejected>()
            .add_systems(
                Update,
                (
                    sync_selection_config_system,
                    handle_reset_requests_system,
                    handle_point_added_system,
                    handle_finish_requested_system,
                )
                    .chain(),
            );
    }
}

fn sync_selection_config_system(
    config: Res<SelectionConfig>,
    mut selection: ResMut<RoofSelection>,
) {
    if !config.is_changed() {
        return;
    }
    if let Err(err) = config.validate() {
        warn!("SelectionConfig is invalid and will be ignored: {}", err);
        return;
    }
    selection.session.apply_config(&config);
}

fn handle_reset_requests_system(
    mut events: EventReader<ResetRequested>,
    mut selection: ResMut<RoofSelection>,
) {
    // Mehrere Resets im selben Frame wirken wie einer
    if events.read().count() == 0 {
        return;
    }
    selection.session.reset();
    selection.last_report = None;
    selection.last_rejection = None;
    info!("Roof selection was reset.");
}

fn handle_point_added_system(
    mut events: EventReader<PointAdded>,
    mut selection: ResMut<RoofSelection>,
    mut rejected: EventWriter<PointRejected>,
) {
    for event in events.read() {
        match selection.session.add_point(event.point) {
            Ok(()) => debug!(
                "Point {} added ({} total).",
                event.point,
                selection.session.points().len()
            ),
            Err(err) => {
                warn!("Point {} ignored: {}", event.point, err);
                rejected.send(PointRejected { point: event.point });
            }
        }
    }
}

fn handle_finish_requested_system(
    mut events: EventReader<FinishRequested>,
    config: Res<SelectionConfig>,
    mut selection: ResMut<RoofSelection>,
    mut closed: EventWriter<SelectionClosed>,
    mut rejected: EventWriter<SelectionRejected>,
) {
    if events.read().count() == 0 {
        return;
    }

    let outcome = selection.session.try_close();
    if let Some(reason) = outcome.reason {
        warn!("{}: {}", selection.session.status(), reason);
        selection.last_rejection = Some(reason);
        rejected.send(SelectionRejected { reason });
        return;
    }
    if selection.last_report.is_some() {
        // Bereits geschlossen und gemeldet
        return;
    }

    let report = match config.scale().and_then(|scale| selection.session.report(scale)) {
        Ok(report) => report,
        Err(err) => {
            error!("Could not evaluate the closed polygon: {}", err);
            return;
        }
    };
    info!(
        "{}: {:.2} px² -> {:.2} (scale {}), average slope {:.2}°",
        selection.session.status(),
        report.area_pixels,
        report.area_physical,
        report.scale_factor,
        report.average_slope_deg
    );
    selection.last_rejection = None;
    selection.last_report = Some(report.clone());
    closed.send(SelectionClosed { report });
}
