//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::FileSelected { path } => {
            vec![AppCommand::LoadFile { path }, AppCommand::FitCameraToMap]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::FitToMapRequested => {
            if state.map.is_some() {
                vec![AppCommand::FitCameraToMap]
            } else {
                vec![AppCommand::ResetCamera]
            }
        }
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::RiverPointDeleteRequested {
            river_id,
            point_index,
        } => vec![AppCommand::DeleteRiverPoint {
            river_id,
            point_index,
        }],
        AppIntent::ClearHighlightsRequested => vec![AppCommand::ClearHighlights],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
