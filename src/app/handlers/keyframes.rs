//! Handler für Keyframe- und Timeline-Operationen.

use crate::app::use_cases::box_timeline;
use crate::app::AppState;

/// Setzt (oder ersetzt) einen Keyframe an der aktuellen Pose.
pub fn add_key(state: &mut AppState, layer: &str, frame: u32) {
    box_timeline::capture_key(state, layer, frame);
}

/// Löscht den Keyframe am Frame. Ein Miss ist kein Fehler.
pub fn delete_key(state: &mut AppState, layer: &str, frame: u32) {
    box_timeline::delete_key(state, layer, frame);
}

/// Leert den Keyframe-Track eines Layers.
pub fn clear_keys(state: &mut AppState, layer: &str) {
    box_timeline::clear_keys(state, layer);
}

/// Committet einen Timeline-Frame in Buffer bzw. Store.
pub fn apply_frame(state: &mut AppState, layer: &str, frame: f32) {
    box_timeline::apply_frame(state, layer, frame);
}

/// Legt eine Vorschau-Pose in den Vorschau-Slot.
pub fn set_preview(state: &mut AppState, layer: &str, frame: f32) {
    box_timeline::set_preview(state, layer, frame);
}

/// Verwirft die Vorschau-Pose eines Layers.
pub fn clear_preview(state: &mut AppState, layer: &str) {
    box_timeline::clear_preview(state, layer);
}

/// Setzt die Timeline-Länge (mindestens 1 Frame).
pub fn set_max_frames(state: &mut AppState, max_frames: u32) {
    state.timeline.max_frames = max_frames.max(1);
    log::info!("Timeline-Länge: {} Frames", state.timeline.max_frames);
}
