//! Optionen-Dialog für Hervorhebungsfarben, Browser und Kamera.

use crate::app::{AppIntent, AppState};
use crate::shared::{ColorTheme, SelectionKeying};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Hervorhebung ────────────────────────────────
                    ui.collapsing("Hervorhebung", |ui| {
                        changed |= theme_edit(ui, "Cluster:", &mut opts.cluster_highlight);
                        changed |= theme_edit(ui, "Orte:", &mut opts.location_highlight);
                        ui.horizontal(|ui| {
                            ui.label("Umrissbreite:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.overlay_outline_width)
                                        .range(0.0..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                    });

                    // ── Objekt-Browser ──────────────────────────────
                    ui.collapsing("Objekt-Browser", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Einrückung (× Schrift):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.tree_indent_factor)
                                        .range(0.5..=8.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Selektion nach:");
                            changed |= ui
                                .radio_value(
                                    &mut opts.selection_keying,
                                    SelectionKeying::Position,
                                    "Position",
                                )
                                .changed();
                            changed |= ui
                                .radio_value(
                                    &mut opts.selection_keying,
                                    SelectionKeying::Identity,
                                    "Entitäts-ID",
                                )
                                .changed();
                        });
                    });

                    // ── Basiskarte ──────────────────────────────────
                    ui.collapsing("Basiskarte", |ui| {
                        changed |= ui
                            .checkbox(&mut opts.show_region_outlines, "Regionsumrisse zeigen")
                            .changed();
                        changed |= color_edit(ui, "Umrissfarbe:", &mut opts.region_outline_color);
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Menü):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_zoom_step)
                                        .range(1.01..=3.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Scroll):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_scroll_zoom_step)
                                        .range(1.01..=2.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Farbe + Deckkraft eines Hervorhebungs-Farbsatzes bearbeiten.
fn theme_edit(ui: &mut egui::Ui, label: &str, theme: &mut ColorTheme) -> bool {
    let mut rgba = theme.rgba();
    if !color_edit(ui, label, &mut rgba) {
        return false;
    }
    theme.color = [rgba[0], rgba[1], rgba[2]];
    theme.opacity = rgba[3];
    true
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            *color = [
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
                a as f32 / 255.0,
            ];
            changed = true;
        }
    });
    changed
}
