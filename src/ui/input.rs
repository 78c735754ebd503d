//! Viewport-Input-Handling: Maus-Drag, Scroll und Tastatur → AppIntent.

use crate::app::{AppIntent, Camera2D};
use crate::shared::InspectorOptions;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
struct ViewportContext<'a> {
    ui: &'a egui::Ui,
    response: &'a egui::Response,
    viewport_size: [f32; 2],
    camera: &'a Camera2D,
    options: &'a InspectorOptions,
}

/// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
pub fn collect_viewport_events(
    ui: &egui::Ui,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
    options: &InspectorOptions,
) -> Vec<AppIntent> {
    let ctx = ViewportContext {
        ui,
        response,
        viewport_size,
        camera,
        options,
    };

    let mut events = vec![AppIntent::ViewportResized {
        size: viewport_size,
    }];

    handle_keyboard(&ctx, &mut events);
    handle_pan(&ctx, &mut events);
    handle_scroll_zoom(&ctx, &mut events);

    events
}

// ── Tastatur ────────────────────────────────────────────────────────

fn handle_keyboard(ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
    if ctx.ui.ctx().wants_keyboard_input() {
        return;
    }

    let (open, zoom_in, zoom_out, fit, clear) = ctx.ui.input(|i| {
        (
            i.modifiers.command && i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::F),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if open {
        events.push(AppIntent::OpenFileRequested);
    }
    if zoom_in {
        events.push(AppIntent::ZoomInRequested);
    }
    if zoom_out {
        events.push(AppIntent::ZoomOutRequested);
    }
    if fit {
        events.push(AppIntent::FitToMapRequested);
    }
    if clear {
        events.push(AppIntent::ClearHighlightsRequested);
    }
}

// ── Pan ─────────────────────────────────────────────────────────────

fn handle_pan(ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
    let dragging = ctx.response.dragged_by(egui::PointerButton::Primary)
        || ctx.response.dragged_by(egui::PointerButton::Middle)
        || ctx.response.dragged_by(egui::PointerButton::Secondary);
    if !dragging {
        return;
    }

    let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
    if pointer_delta == egui::Vec2::ZERO {
        return;
    }

    let wpp = ctx.camera.world_per_pixel(ctx.viewport_size[1]);
    events.push(AppIntent::CameraPan {
        delta: glam::Vec2::new(-pointer_delta.x * wpp, -pointer_delta.y * wpp),
    });
}

// ── Scroll-Zoom ─────────────────────────────────────────────────────

fn handle_scroll_zoom(ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
    if !ctx.response.hovered() {
        return;
    }

    let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
    if scroll == 0.0 {
        return;
    }

    let step = ctx.options.camera_scroll_zoom_step;
    let factor = if scroll > 0.0 { step } else { 1.0 / step };
    let focus_world = ctx
        .response
        .hover_pos()
        .map(|pos| screen_pos_to_world(pos, ctx.response, ctx.viewport_size, ctx.camera));
    events.push(AppIntent::CameraZoom {
        factor,
        focus_world,
    });
}

fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
