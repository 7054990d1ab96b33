//! Use-Case: Laden und Committen der aktiven Punktliste.
//!
//! Zwei-Stufen-Modell: der `points_store` des Layers ist der
//! unveränderliche, normalisierte Snapshot; der Edit-Buffer ist die
//! einzige Arbeitskopie. Übergänge laufen ausschließlich hier durch.

use crate::app::state::AppState;
use crate::core::{BoxPose, TrackPoint};
use crate::persist;

/// Committet den Buffer: normalisiert die Punkte und schreibt sie als
/// getaggten Store in den aktiven Layer zurück.
///
/// Für Box-Layer wird dabei die explizit gesetzte Pose nachgeführt,
/// damit ein Track ohne Keyframes die vom User gewählte Position behält.
pub fn commit_active_points(state: &mut AppState) {
    let Some(name) = state.layers.active_name().map(str::to_string) else {
        return;
    };

    let space = state.canvas_space();
    let normalized = space.normalize_points(&state.buffer.points);
    let store = persist::write_points_store(&normalized);

    let Some(layer) = state.layers.get_mut(&name) else {
        return;
    };
    layer.points_store = store;

    if layer.is_box() {
        if let Some(point) = normalized.first() {
            layer.box_pose = BoxPose {
                x: point.pos.x,
                y: point.pos.y,
                scale: point.box_scale,
                rotation: layer.box_pose.rotation,
            };
        }
    }
    log::debug!(
        "Punktliste von '{}' persistiert ({} Punkte)",
        name,
        normalized.len()
    );
}

/// Lädt die Punktliste des aktiven Layers in den Buffer.
///
/// Getaggte Stores werden bedingungslos denormalisiert; ungetaggte
/// Bestandsdaten laufen durch die Betrags-Heuristik. Unlesbare Stores
/// ergeben eine leere Liste (bereits in `persist` abgefangen).
pub fn load_active_points(state: &mut AppState) {
    let Some(layer) = state.layers.active_layer() else {
        state.buffer.clear();
        return;
    };

    let parsed = persist::parse_points_store(&layer.points_store);
    let space = state.canvas_space();
    let mut points: Vec<TrackPoint> = match parsed.format {
        // Format-Tag vorhanden: sicher normalisiert, Heuristik unnötig
        Some(_) => parsed
            .points
            .iter()
            .map(|p| TrackPoint {
                pos: space.denormalize_pos(p.pos),
                ..*p
            })
            .collect(),
        None => space.denormalize_points(&parsed.points),
    };

    let interpolation = layer.interpolation;
    state.ensure_uids(&mut points);
    state.buffer.points = points;
    state.buffer.interpolation = interpolation;
}

/// Wechselt den aktiven Layer.
///
/// Der bisherige Buffer wird zuerst persistiert (der Buffer ist geteilter
/// Zustand, keine Kopie), ein laufender Drag abgebrochen, dann werden
/// Punktliste und Interpolationsmodus des neuen Layers geladen.
pub fn set_active_layer(state: &mut AppState, name: Option<String>) {
    if state.editor.drag.is_some() {
        log::debug!("Layer-Wechsel bricht laufenden Drag ab");
        super::drag_transform_cancel(state);
    }

    commit_active_points(state);
    state.editor.highlighted = None;
    state.layers.set_active(name);
    load_active_points(state);

    log::info!(
        "Aktiver Layer: {}",
        state.layers.active_name().unwrap_or("(keiner)")
    );
}

/// Ersetzt die aktive Punktliste komplett und persistiert sofort.
pub fn replace_active_points(state: &mut AppState, mut points: Vec<TrackPoint>) {
    if state.layers.active_name().is_none() {
        log::warn!("SetActivePoints ohne aktiven Layer ignoriert");
        return;
    }
    for point in points.iter_mut() {
        point.clamp_scales();
    }
    state.ensure_uids(&mut points);
    state.buffer.points = points;
    commit_active_points(state);
}
