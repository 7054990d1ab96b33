//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::output_scene::{self, OutputScene};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Layer-Verwaltung ===
            AppCommand::SetActiveLayer { name } => handlers::layers::set_active_layer(state, name),
            AppCommand::AddLayer { name, kind } => handlers::layers::add_layer(state, name, kind),
            AppCommand::RemoveLayer { name } => handlers::layers::remove_layer(state, &name),
            AppCommand::SetLayerEnabled { name, on } => {
                handlers::layers::set_enabled(state, &name, on)
            }
            AppCommand::SetLayerInterpolation { name, mode } => {
                handlers::layers::set_interpolation(state, &name, mode)
            }
            AppCommand::SetLayerRepeat { name, repeat } => {
                handlers::layers::set_repeat(state, &name, repeat)
            }
            AppCommand::SetLayerScale { name, scale } => {
                handlers::layers::set_scale(state, &name, scale)
            }
            AppCommand::SetLayerEasing { name, easing } => {
                handlers::layers::set_easing(state, &name, easing)
            }
            AppCommand::SetLayerDriven { name, driven } => {
                handlers::layers::set_driven(state, &name, driven)
            }

            // === Punktliste ===
            AppCommand::SetActivePoints { points } => {
                handlers::layers::set_active_points(state, points)
            }
            AppCommand::CommitActivePoints => handlers::layers::commit_active_points(state),
            AppCommand::AddPointAt { pos } => handlers::layers::add_point(state, pos),
            AppCommand::DeletePoint { uid } => handlers::layers::delete_point(state, uid),
            AppCommand::SetHighlightedPoint { uid } => {
                handlers::layers::set_highlighted(state, uid)
            }

            // === Drag-Sitzungen ===
            AppCommand::BeginPointDrag { uid, pointer } => {
                handlers::pointer::begin_point_drag(state, uid, pointer)
            }
            AppCommand::BeginBoxPointScale { uid, pointer } => {
                handlers::pointer::begin_box_point_scale(state, uid, pointer)
            }
            AppCommand::BeginRotateAll {
                anchor_uid,
                pointer,
            } => handlers::pointer::begin_rotate_all(state, anchor_uid, pointer),
            AppCommand::BeginScaleAll {
                anchor_uid,
                pointer,
            } => handlers::pointer::begin_scale_all(state, anchor_uid, pointer),
            AppCommand::BeginTranslateAll {
                anchor_uid,
                pointer,
            } => handlers::pointer::begin_translate_all(state, anchor_uid, pointer),
            AppCommand::UpdateDrag { pointer } => handlers::pointer::update_drag(state, pointer),
            AppCommand::EndDrag => handlers::pointer::end_drag(state),
            AppCommand::CancelDrag => handlers::pointer::cancel_drag(state),

            // === Keyframes & Timeline ===
            AppCommand::AddBoxKey { layer, frame } => {
                handlers::keyframes::add_key(state, &layer, frame)
            }
            AppCommand::DeleteBoxKey { layer, frame } => {
                handlers::keyframes::delete_key(state, &layer, frame)
            }
            AppCommand::ClearBoxKeys { layer } => handlers::keyframes::clear_keys(state, &layer),
            AppCommand::ApplyBoxFrame { layer, frame } => {
                handlers::keyframes::apply_frame(state, &layer, frame)
            }
            AppCommand::SetBoxPreview { layer, frame } => {
                handlers::keyframes::set_preview(state, &layer, frame)
            }
            AppCommand::ClearBoxPreview { layer } => {
                handlers::keyframes::clear_preview(state, &layer)
            }
            AppCommand::SetMaxFrames { max_frames } => {
                handlers::keyframes::set_max_frames(state, max_frames)
            }

            // === Playback ===
            AppCommand::StartPlayback { layer } => handlers::playback::start(state, &layer),
            AppCommand::StopPlayback { layer } => handlers::playback::stop(state, &layer),
            AppCommand::AdvancePlayback { delta_seconds } => {
                handlers::playback::advance(state, delta_seconds)
            }

            // === Canvas & Optionen ===
            AppCommand::SetCanvasSize { size } => handlers::view::set_canvas_size(state, size),
            AppCommand::SetBackgroundImage { size } => {
                handlers::view::set_background_image(state, size)
            }
            AppCommand::SetImageTransform { scale, offset } => {
                handlers::view::set_image_transform(state, scale, offset)
            }
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, options),
        }

        Ok(())
    }

    /// Baut die serialisierte Ausgabe aller eingeschalteten Layer.
    pub fn build_output_scene(&self, state: &AppState) -> OutputScene {
        output_scene::build(state)
    }
}
