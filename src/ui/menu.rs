//! Top-Menü (File, Edit, View).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open map...").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                let has_selection = state.objects.selections.total_selected() > 0;
                if ui
                    .add_enabled(has_selection, egui::Button::new("Clear highlights"))
                    .clicked()
                {
                    events.push(AppIntent::ClearHighlightsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Camera").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(state.map.is_some(), egui::Button::new("Fit to Map"))
                    .clicked()
                {
                    events.push(AppIntent::FitToMapRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
