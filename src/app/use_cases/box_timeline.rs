//! Use-Case: Box-Timeline — Pose berechnen, Scrub committen, Vorschau.

use glam::Vec2;

use crate::app::state::{AppState, BoxPreview};
use crate::core::{clamp_frame, clamp_frame_f32, clamp_scale, BoxKeyframe, BoxPose, Layer, TrackPoint};
use crate::persist;

/// Berechnet die Pose eines Box-Layers an einem (fraktionalen) Frame.
///
/// Delegiert an den Keyframe-Track im konfigurierten Interpolationsmodus;
/// ein leerer Track liefert die zuletzt explizit gesetzte Pose des Layers.
pub fn compute_pose(layer: &Layer, frame: f32, max_frames: u32) -> BoxPose {
    let frame = clamp_frame_f32(frame, max_frames);
    layer
        .box_keys
        .pose_at(frame, layer.interpolation, layer.box_pose)
}

/// Committet einen Timeline-Frame: schreibt die berechnete Pose in den
/// Live-Buffer (aktiver Layer) bzw. direkt in den Store (inaktiver Layer)
/// und setzt die Scrub-Position. Keyframes am Frame bleiben unberührt —
/// Scrubben erzeugt nie Keyframes.
///
/// Gibt `false` zurück, wenn nichts geschrieben wurde (unbekannter Layer,
/// kein Box-Layer, oder der Buffer gehört gerade einer Drag-Sitzung).
pub fn apply_frame(state: &mut AppState, name: &str, frame: f32) -> bool {
    let frame = clamp_frame_f32(frame, state.timeline.max_frames);

    let Some(layer) = state.layers.get(name) else {
        log::warn!("ApplyBoxFrame: Layer '{}' unbekannt", name);
        return false;
    };
    if !layer.is_box() {
        log::warn!("ApplyBoxFrame: Layer '{}' ist kein Box-Layer", name);
        return false;
    }

    // Einzelschreiber-Regel: läuft gerade ein Drag auf dem Buffer dieses
    // Layers, wird der Commit verworfen statt dazwischenzuschreiben.
    if state.is_active(name) && state.editor.drag.is_some() {
        log::debug!("ApplyBoxFrame: Drag aktiv, Commit für '{}' übersprungen", name);
        return false;
    }

    let pose = compute_pose(layer, frame, state.timeline.max_frames);

    if state.is_active(name) {
        write_pose_to_buffer(state, pose);
    } else {
        write_pose_to_store(state, name, pose);
    }

    if let Some(layer) = state.layers.get_mut(name) {
        layer.box_timeline_point = frame;
        layer.box_pose = pose;
    }
    true
}

/// Rechnet eine Vorschau-Pose und legt sie in den Vorschau-Slot.
/// Scrub-Position, Buffer und Store bleiben unberührt.
pub fn set_preview(state: &mut AppState, name: &str, frame: f32) -> bool {
    let Some(layer) = state.layers.get(name) else {
        log::warn!("SetBoxPreview: Layer '{}' unbekannt", name);
        return false;
    };
    if !layer.is_box() {
        return false;
    }

    let pose = compute_pose(layer, frame, state.timeline.max_frames);
    state.editor.box_preview = Some(BoxPreview {
        layer: name.to_string(),
        pose,
    });
    true
}

/// Verwirft die Vorschau-Pose eines Layers (falls vorhanden).
pub fn clear_preview(state: &mut AppState, name: &str) {
    if state
        .editor
        .box_preview
        .as_ref()
        .is_some_and(|p| p.layer == name)
    {
        state.editor.box_preview = None;
    }
}

/// Setzt (oder ersetzt) einen Keyframe an der aktuellen Pose des Layers.
///
/// Die "aktuelle Pose" ist die des Live-Buffers, wenn der Layer aktiv
/// ist, sonst die zuletzt gespeicherte.
pub fn capture_key(state: &mut AppState, name: &str, frame: u32) -> bool {
    let frame = clamp_frame(frame, state.timeline.max_frames);

    let Some(layer) = state.layers.get(name) else {
        log::warn!("AddBoxKey: Layer '{}' unbekannt", name);
        return false;
    };
    if !layer.is_box() {
        log::warn!("AddBoxKey: Layer '{}' ist kein Box-Layer", name);
        return false;
    }

    let pose = current_pose(state, layer);
    let max_frames = state.timeline.max_frames;
    if let Some(layer) = state.layers.get_mut(name) {
        layer
            .box_keys
            .add_or_replace(BoxKeyframe::from_pose(frame, pose), max_frames);
        log::info!("Keyframe für '{}' an Frame {} gesetzt", name, frame);
    }
    true
}

/// Löscht den Keyframe eines Layers am (geklemmten) Frame.
pub fn delete_key(state: &mut AppState, name: &str, frame: u32) -> bool {
    let max_frames = state.timeline.max_frames;
    let Some(layer) = state.layers.get_mut(name) else {
        return false;
    };
    let removed = layer.box_keys.delete(frame, max_frames);
    if removed {
        log::info!("Keyframe für '{}' an Frame {} gelöscht", name, frame);
    }
    removed
}

/// Leert den Keyframe-Track eines Layers.
pub fn clear_keys(state: &mut AppState, name: &str) {
    if let Some(layer) = state.layers.get_mut(name) {
        layer.box_keys.clear();
        log::info!("Alle Keyframes für '{}' gelöscht", name);
    }
}

/// Aktuelle Pose eines Box-Layers: Buffer-Stand wenn aktiv, sonst die
/// zuletzt gespeicherte Pose.
fn current_pose(state: &AppState, layer: &Layer) -> BoxPose {
    if state.is_active(&layer.name) {
        if let Some(point) = state.buffer.points.first() {
            let normalized = state.canvas_space().normalize_pos(point.pos);
            return BoxPose {
                x: normalized.x,
                y: normalized.y,
                scale: point.box_scale,
                rotation: layer.box_pose.rotation,
            };
        }
    }
    layer.box_pose
}

/// Schreibt die Pose in den Live-Buffer des aktiven Layers.
fn write_pose_to_buffer(state: &mut AppState, pose: BoxPose) {
    let canvas_pos = state
        .canvas_space()
        .denormalize_pos(Vec2::new(pose.x, pose.y));

    if state.buffer.points.is_empty() {
        let uid = state.alloc_uid();
        state.buffer.points.push(TrackPoint::new(canvas_pos, uid));
    }
    let point = &mut state.buffer.points[0];
    point.pos = canvas_pos;
    point.box_scale = clamp_scale(pose.scale);
}

/// Schreibt die Pose direkt in den Store eines inaktiven Layers.
fn write_pose_to_store(state: &mut AppState, name: &str, pose: BoxPose) {
    let Some(layer) = state.layers.get_mut(name) else {
        return;
    };
    // Box-Layer besitzen genau einen Punkt; die bestehende uid überlebt
    let uid = persist::parse_points_store(&layer.points_store)
        .points
        .first()
        .map(|p| p.uid)
        .unwrap_or(0);
    let mut point = TrackPoint::new(Vec2::new(pose.x, pose.y), uid);
    point.box_scale = clamp_scale(pose.scale);
    layer.points_store = persist::write_points_store(&[point]);
}
