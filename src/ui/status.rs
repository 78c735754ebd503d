//! Status-Bar am unteren Bildschirmrand.

use crate::app::use_cases::objects::category_counts;
use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(map) = &state.map {
                let counts = category_counts(state)
                    .into_iter()
                    .map(|(category, count)| format!("{}: {}", category.title(), count))
                    .collect::<Vec<_>>()
                    .join(" | ");
                ui.label(format!("Regions: {} | {}", map.region_count(), counts));
            } else {
                ui.label("No map loaded");
            }

            ui.separator();

            ui.label(format!(
                "Highlighted: {} | Shapes: {}",
                state.objects.selections.total_selected(),
                state.overlay_shape_count()
            ));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
