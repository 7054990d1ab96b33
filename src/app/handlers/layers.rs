//! Handler für Layer-Verwaltung und Punktlisten-Operationen.

use glam::Vec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{DrivenConfig, EasingConfig, InterpolationMode, Layer, LayerKind};

/// Wechselt den aktiven Layer (persistiert vorher den Buffer).
pub fn set_active_layer(state: &mut AppState, name: Option<String>) {
    use_cases::active_points::set_active_layer(state, name);
}

/// Legt einen neuen Layer an.
pub fn add_layer(state: &mut AppState, name: String, kind: LayerKind) {
    if state.layers.add(Layer::new(name.clone(), kind)) {
        log::info!("Layer '{}' angelegt ({:?})", name, kind);
    }
}

/// Entfernt einen Layer samt Playback-Uhr und Vorschau.
pub fn remove_layer(state: &mut AppState, name: &str) {
    state.playback.stop(name);
    use_cases::box_timeline::clear_preview(state, name);

    let war_aktiv = state.is_active(name);
    if state.layers.remove(name).is_some() {
        if war_aktiv {
            use_cases::drag_transform_cancel(state);
            state.buffer.clear();
        }
        log::info!("Layer '{}' entfernt", name);
    }
}

/// Schaltet einen Layer ein oder aus.
pub fn set_enabled(state: &mut AppState, name: &str, on: bool) {
    if let Some(layer) = state.layers.get_mut(name) {
        layer.on = on;
    }
}

/// Setzt den Interpolationsmodus. Beim aktiven Layer zieht der Buffer mit.
pub fn set_interpolation(state: &mut AppState, name: &str, mode: InterpolationMode) {
    if let Some(layer) = state.layers.get_mut(name) {
        layer.interpolation = mode;
    }
    if state.is_active(name) {
        state.buffer.interpolation = mode;
    }
}

/// Setzt die Wiederholungsanzahl eines Layers.
pub fn set_repeat(state: &mut AppState, name: &str, repeat: u32) {
    if let Some(layer) = state.layers.get_mut(name) {
        layer.set_repeat(repeat);
    }
}

/// Setzt die Gesamtskalierung eines Layers.
pub fn set_scale(state: &mut AppState, name: &str, scale: f32) {
    if let Some(layer) = state.layers.get_mut(name) {
        layer.set_scale(scale);
    }
}

/// Setzt die Easing-Konfiguration eines Layers.
pub fn set_easing(state: &mut AppState, name: &str, easing: EasingConfig) {
    if let Some(layer) = state.layers.get_mut(name) {
        layer.easing = easing;
    }
}

/// Setzt die Driven-Konfiguration eines Layers.
pub fn set_driven(state: &mut AppState, name: &str, driven: Option<DrivenConfig>) {
    if let Some(layer) = state.layers.get_mut(name) {
        layer.driven = driven;
    }
}

/// Ersetzt die aktive Punktliste und persistiert sofort.
pub fn set_active_points(state: &mut AppState, points: Vec<crate::core::TrackPoint>) {
    use_cases::active_points::replace_active_points(state, points);
}

/// Persistiert den Buffer in den Store des aktiven Layers.
pub fn commit_active_points(state: &mut AppState) {
    use_cases::active_points::commit_active_points(state);
}

/// Fügt einen Punkt an Canvas-Position in den aktiven Pfad ein.
pub fn add_point(state: &mut AppState, pos: Vec2) {
    if state.layers.active_name().is_none() {
        log::warn!("AddPoint ohne aktiven Layer ignoriert");
        return;
    }
    let uid = state.alloc_uid();
    use_cases::edit_points::insert_point(&mut state.buffer.points, pos, uid);
    log::debug!("Punkt {} an ({:.1}, {:.1}) eingefügt", uid, pos.x, pos.y);
}

/// Löscht einen Punkt der aktiven Punktliste über seine uid.
pub fn delete_point(state: &mut AppState, uid: u64) {
    if use_cases::edit_points::remove_point(&mut state.buffer.points, uid) {
        if state.editor.highlighted == Some(uid) {
            state.editor.highlighted = None;
        }
        log::debug!("Punkt {} gelöscht", uid);
    }
}

/// Setzt die Hervorhebung auf einen Punkt (None = keine).
pub fn set_highlighted(state: &mut AppState, uid: Option<u64>) {
    if state.editor.highlighted == uid {
        return;
    }
    for point in state.buffer.points.iter_mut() {
        point.highlighted = Some(point.uid) == uid;
    }
    state.editor.highlighted = uid;
}
