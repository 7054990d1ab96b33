//! Use-Cases: die eigentliche Mutationslogik hinter den Handlern.

pub mod active_points;
pub mod box_timeline;
pub mod drag_transform;
pub mod edit_points;

use super::state::AppState;

/// Bricht eine laufende Drag-Sitzung ab: Snapshot wiederherstellen und
/// alle Sitzungsfelder leeren, damit kein Anker in die nächste
/// Interaktion hineinlebt.
pub fn drag_transform_cancel(state: &mut AppState) {
    if let Some(session) = state.editor.drag.take() {
        drag_transform::restore_snapshot(&session, &mut state.buffer.points);
        log::debug!("Drag-Sitzung abgebrochen");
    }
}
