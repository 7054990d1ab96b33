//! Mapping von UI-Intents auf mutierende App-Commands.

use glam::Vec2;

use super::events::PointerButton;
use super::use_cases::edit_points;
use super::{AppCommand, AppIntent, AppState};
use crate::core::SpatialIndex;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            pos,
            button,
            modifier,
            target,
        } => map_pointer_pressed(state, pos, button, modifier, target),
        AppIntent::PointerMoved { pos } => {
            if state.editor.drag.is_some() {
                vec![AppCommand::UpdateDrag { pointer: pos }]
            } else {
                // Idle: nur die Hervorhebung unter dem Pointer nachführen
                vec![AppCommand::SetHighlightedPoint {
                    uid: hit_test(state, pos),
                }]
            }
        }
        AppIntent::PointerReleased => {
            if state.editor.drag.is_some() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerCancelled => {
            if state.editor.drag.is_some() {
                vec![AppCommand::CancelDrag]
            } else {
                Vec::new()
            }
        }

        AppIntent::ActiveLayerChanged { name } => vec![AppCommand::SetActiveLayer { name }],
        AppIntent::LayerCreated { name, kind } => vec![AppCommand::AddLayer { name, kind }],
        AppIntent::LayerRemoved { name } => vec![AppCommand::RemoveLayer { name }],
        AppIntent::LayerToggled { name, on } => vec![AppCommand::SetLayerEnabled { name, on }],
        AppIntent::LayerInterpolationChanged { name, mode } => {
            vec![AppCommand::SetLayerInterpolation { name, mode }]
        }
        AppIntent::LayerRepeatChanged { name, repeat } => {
            vec![AppCommand::SetLayerRepeat { name, repeat }]
        }
        AppIntent::LayerScaleChanged { name, scale } => {
            vec![AppCommand::SetLayerScale { name, scale }]
        }
        AppIntent::LayerEasingChanged { name, easing } => {
            vec![AppCommand::SetLayerEasing { name, easing }]
        }
        AppIntent::LayerDrivenChanged { name, driven } => {
            vec![AppCommand::SetLayerDriven { name, driven }]
        }

        AppIntent::ActivePointsReplaced { points } => {
            vec![AppCommand::SetActivePoints { points }]
        }
        AppIntent::AddPointRequested { pos } => vec![AppCommand::AddPointAt { pos }],
        AppIntent::DeletePointRequested { uid } => vec![AppCommand::DeletePoint { uid }],

        AppIntent::AddBoxKeyRequested { layer, frame } => {
            vec![AppCommand::AddBoxKey { layer, frame }]
        }
        AppIntent::DeleteBoxKeyRequested { layer, frame } => {
            vec![AppCommand::DeleteBoxKey { layer, frame }]
        }
        AppIntent::ClearBoxKeysRequested { layer } => vec![AppCommand::ClearBoxKeys { layer }],
        AppIntent::BoxTimelineScrubbed {
            layer,
            frame,
            commit,
        } => {
            if commit {
                vec![AppCommand::ApplyBoxFrame { layer, frame }]
            } else {
                vec![AppCommand::SetBoxPreview { layer, frame }]
            }
        }
        AppIntent::BoxPreviewCleared { layer } => vec![AppCommand::ClearBoxPreview { layer }],

        AppIntent::PlaybackStartRequested { layer } => vec![AppCommand::StartPlayback { layer }],
        AppIntent::PlaybackStopRequested { layer } => vec![AppCommand::StopPlayback { layer }],
        AppIntent::PlaybackTicked { delta_seconds } => {
            vec![AppCommand::AdvancePlayback { delta_seconds }]
        }

        AppIntent::CanvasResized { size } => vec![AppCommand::SetCanvasSize { size }],
        AppIntent::BackgroundImageChanged { size } => {
            vec![AppCommand::SetBackgroundImage { size }]
        }
        AppIntent::ImageTransformChanged { scale, offset } => {
            vec![AppCommand::SetImageTransform { scale, offset }]
        }
        AppIntent::MaxFramesChanged { max_frames } => vec![AppCommand::SetMaxFrames { max_frames }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Löst einen Pointer-Druck in den passenden Drag-Start (oder die
/// Sofort-Löschung) auf.
///
/// Zielauflösung: Box-Layer per Spatial-Hit-Test gegen den Buffer,
/// andere Layer über die direkte Referenz des Renderers. Trifft der
/// Pointer keinen Punkt, startet schlicht kein Drag — das ist kein Fehler.
fn map_pointer_pressed(
    state: &AppState,
    pos: Vec2,
    button: PointerButton,
    modifier: bool,
    target: Option<u64>,
) -> Vec<AppCommand> {
    let Some(active) = state.layers.active_layer() else {
        return Vec::new();
    };

    let uid = if active.is_box() {
        hit_test(state, pos)
    } else {
        target
    };
    let Some(uid) = uid else {
        return Vec::new();
    };

    match (button, modifier) {
        (PointerButton::Primary, false) => vec![AppCommand::BeginPointDrag { uid, pointer: pos }],
        (PointerButton::Primary, true) => vec![AppCommand::BeginRotateAll {
            anchor_uid: uid,
            pointer: pos,
        }],
        (PointerButton::Middle, true) => vec![AppCommand::BeginTranslateAll {
            anchor_uid: uid,
            pointer: pos,
        }],
        (PointerButton::Secondary, true) => {
            if active.is_box() {
                vec![AppCommand::BeginBoxPointScale { uid, pointer: pos }]
            } else {
                vec![AppCommand::BeginScaleAll {
                    anchor_uid: uid,
                    pointer: pos,
                }]
            }
        }
        (PointerButton::Secondary, false) => {
            // Sofort-Löschung: nur innere Punkte, Endpunkte bleiben stehen
            if edit_points::is_interior_point(&state.buffer.points, uid) {
                vec![AppCommand::DeletePoint { uid }]
            } else {
                Vec::new()
            }
        }
        (PointerButton::Middle, false) => Vec::new(),
    }
}

/// Nächster Buffer-Punkt innerhalb des Pick-Radius.
fn hit_test(state: &AppState, pos: Vec2) -> Option<u64> {
    SpatialIndex::from_points(&state.buffer.points)
        .nearest_within(pos, state.options.pick_radius)
        .map(|m| m.uid)
}
