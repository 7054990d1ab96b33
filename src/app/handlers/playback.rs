//! Handler für das kooperative Box-Timeline-Playback.
//!
//! Es gibt keine Hintergrund-Threads: der Host ruft `AdvancePlayback`
//! mit der verstrichenen Zeit, und jeder fällige Frame läuft durch
//! denselben Commit-Scrub-Pfad wie ein manueller Drag.

use crate::app::use_cases::box_timeline;
use crate::app::AppState;

/// Startet das Playback eines Box-Layers.
/// Eine bereits laufende Uhr desselben Layers wird ersetzt — pro Layer
/// existiert nie mehr als eine.
pub fn start(state: &mut AppState, layer: &str) {
    let Some(l) = state.layers.get(layer) else {
        log::warn!("Playback-Start: Layer '{}' unbekannt", layer);
        return;
    };
    if !l.is_box() {
        log::warn!("Playback-Start: Layer '{}' ist kein Box-Layer", layer);
        return;
    }
    state.playback.start(layer);
    log::info!("Playback für '{}' gestartet", layer);
}

/// Stoppt das Playback eines Layers. Stoppen ohne laufende Uhr ist ok.
pub fn stop(state: &mut AppState, layer: &str) {
    if state.playback.stop(layer) {
        log::info!("Playback für '{}' gestoppt", layer);
    }
}

/// Schreibt alle Playback-Uhren um die verstrichene Zeit fort und
/// committet fällige Frames.
pub fn advance(state: &mut AppState, delta_seconds: f32) {
    if delta_seconds <= 0.0 {
        return;
    }
    let interval = state.options.playback_frame_interval();

    for name in state.playback.playing_layers() {
        let steps = {
            let Some(acc) = state.playback.accumulator_mut(&name) else {
                continue;
            };
            *acc += delta_seconds;
            let steps = (*acc / interval).floor() as u32;
            *acc -= steps as f32 * interval;
            steps
        };
        if steps == 0 {
            continue;
        }

        let Some(layer) = state.layers.get(&name) else {
            // Layer während des Playbacks verschwunden → Uhr aufräumen
            state.playback.stop(&name);
            continue;
        };

        let max_frames = state.timeline.max_frames.max(1);
        let current = (layer.box_timeline_point.floor() as u32).clamp(1, max_frames);
        // Ganze Frames weiterschalten, Wrap von max_frames zurück auf 1
        let frame = ((current - 1 + steps) % max_frames) + 1;
        box_timeline::apply_frame(state, &name, frame as f32);
    }
}
