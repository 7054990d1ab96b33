//! Handler für Canvas-, Hintergrundbild- und Options-Änderungen.

use glam::Vec2;

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Setzt die Canvas-Größe.
///
/// Punkte sind relativ zum Quellbild gespeichert; ein Resize verschiebt
/// deshalb keine Geometrie. Der Buffer hält Canvas-Koordinaten und wird
/// über Commit + Neuladen auf den neuen Raum umgerechnet.
pub fn set_canvas_size(state: &mut AppState, size: Vec2) {
    if size.x <= 0.0 || size.y <= 0.0 {
        log::warn!("Ungültige Canvas-Größe {:?} ignoriert", size);
        return;
    }
    crate::app::use_cases::active_points::commit_active_points(state);
    state.view.canvas_size = size;
    crate::app::use_cases::active_points::load_active_points(state);
    log::debug!("Canvas-Größe: {}x{}", size.x, size.y);
}

/// Setzt die Hintergrundbild-Metadaten (None = Bild entfernt).
pub fn set_background_image(state: &mut AppState, size: Option<Vec2>) {
    crate::app::use_cases::active_points::commit_active_points(state);
    state.view.image_size = size;
    crate::app::use_cases::active_points::load_active_points(state);
    match size {
        Some(s) => log::info!("Hintergrundbild: {}x{}", s.x, s.y),
        None => log::info!("Hintergrundbild entfernt"),
    }
}

/// Setzt Skalierung und Offset des Hintergrundbilds auf dem Canvas.
pub fn set_image_transform(state: &mut AppState, scale: f32, offset: Vec2) {
    crate::app::use_cases::active_points::commit_active_points(state);
    state.view.image_scale = scale;
    state.view.image_offset = offset;
    crate::app::use_cases::active_points::load_active_points(state);
}

/// Wendet neue Optionen an.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options;
    log::info!("Optionen angewendet");
}
