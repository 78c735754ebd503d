//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

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
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        log::debug!("Command: {:?}", command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::FitCameraToMap => handlers::view::fit_to_map(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Objekt-Browser ===
            AppCommand::DeleteRiverPoint {
                river_id,
                point_index,
            } => handlers::objects::delete_river_point(state, river_id, point_index),
            AppCommand::ClearHighlights => handlers::objects::clear_highlights(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }
}
