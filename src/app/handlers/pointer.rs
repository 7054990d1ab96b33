//! Handler für Drag-Sitzungen auf der aktiven Punktliste.

use glam::Vec2;

use crate::app::use_cases::{self, drag_transform};
use crate::app::AppState;

/// Startet einen Einzelpunkt-Drag.
pub fn begin_point_drag(state: &mut AppState, uid: u64, pointer: Vec2) {
    let session = drag_transform::begin_point_drag(&state.buffer.points, uid, pointer);
    begin(state, session);
}

/// Startet eine Box-Punkt-Skalierung.
pub fn begin_box_point_scale(state: &mut AppState, uid: u64, pointer: Vec2) {
    let session = drag_transform::begin_box_point_scale(&state.buffer.points, uid, pointer);
    begin(state, session);
}

/// Startet eine Ganz-Layer-Rotation.
pub fn begin_rotate_all(state: &mut AppState, anchor_uid: u64, pointer: Vec2) {
    let session = drag_transform::begin_rotate_all(&state.buffer.points, anchor_uid, pointer);
    begin(state, session);
}

/// Startet eine Ganz-Layer-Skalierung.
pub fn begin_scale_all(state: &mut AppState, anchor_uid: u64, pointer: Vec2) {
    let session = drag_transform::begin_scale_all(&state.buffer.points, anchor_uid, pointer);
    begin(state, session);
}

/// Startet eine Ganz-Layer-Translation.
pub fn begin_translate_all(state: &mut AppState, anchor_uid: u64, pointer: Vec2) {
    let session = drag_transform::begin_translate_all(&state.buffer.points, anchor_uid, pointer);
    begin(state, session);
}

/// Gemeinsamer Start: höchstens eine Sitzung gleichzeitig.
fn begin(state: &mut AppState, session: Option<drag_transform::DragSession>) {
    if state.editor.drag.is_some() {
        log::debug!("Drag-Start ignoriert: Sitzung läuft bereits");
        return;
    }
    state.editor.drag = session;
}

/// Schreibt die aktuelle Pointer-Position in die laufende Sitzung.
pub fn update_drag(state: &mut AppState, pointer: Vec2) {
    if let Some(session) = state.editor.drag.as_ref() {
        drag_transform::apply_pointer_move(session, &mut state.buffer.points, pointer);
    }
}

/// Beendet die Sitzung. Ganz-Layer-Rotation und -Skalierung persistieren
/// die Punktliste genau einmal; alle Sitzungsdaten werden geleert.
pub fn end_drag(state: &mut AppState) {
    let Some(session) = state.editor.drag.take() else {
        return;
    };
    if session.commits_on_release() {
        use_cases::active_points::commit_active_points(state);
    }
}

/// Bricht die Sitzung ab (Pointer hat den gültigen Bereich verlassen).
pub fn cancel_drag(state: &mut AppState) {
    use_cases::drag_transform_cancel(state);
}
