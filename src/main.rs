//! Map Object Inspector.
//!
//! Objekt-Browser für prozedural generierte Karten: listet Mega-Cluster,
//! Staaten, Cluster, Flüsse, Städte und Orte und hebt Selektionen als
//! transluzentes Overlay auf der Karte hervor.

use eframe::egui;
use mapgen_inspector::{render, ui, AppController, AppIntent, AppState, InspectorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Map Inspector v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionaler Snapshot-Pfad als erstes Argument
        let initial_path = std::env::args().nth(1);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Map Inspector"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Map Inspector",
            options,
            Box::new(move |_cc| Ok(Box::new(InspectorApp::new(initial_path)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct InspectorApp {
    state: AppState,
    controller: AppController,
    pending: Vec<AppIntent>,
}

impl InspectorApp {
    fn new(initial_path: Option<String>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = InspectorOptions::config_path();
        let options = InspectorOptions::load_from_file(&config_path);

        let pending = initial_path
            .map(|path| vec![AppIntent::FileSelected { path }])
            .unwrap_or_default();

        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            pending,
        }
    }
}

impl eframe::App for InspectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = std::mem::take(&mut self.pending);
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl InspectorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        // Baut das Overlay dieses Frames neu auf; muss vor dem Viewport laufen
        events.extend(ui::render_objects_panel(ctx, &mut self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(24)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(ui::collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.options,
                ));

                let painter = ui.painter_at(rect);
                if let Some(map) = self.state.map.as_deref() {
                    render::paint_map(
                        &painter,
                        rect,
                        &self.state.view.camera,
                        map,
                        &self.state.objects.overlay,
                        &self.state.options,
                    );
                } else {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "No map loaded. Use File → Open map...",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{:#}", e));
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
