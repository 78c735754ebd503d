//! Zeichnen von Basiskarte und Overlay mit dem egui-Painter.
//!
//! Welt-Koordinaten werden über die [`Camera2D`] in den Viewport-Rect
//! projiziert. Das Overlay wird nach den Regionsumrissen gezeichnet.

use crate::core::{Camera2D, MapModel};
use crate::shared::{InspectorOptions, OverlayList};
use glam::Vec2;

/// Zeichenkontext eines Frames
pub struct MapPainter<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    camera: &'a Camera2D,
}

impl<'a> MapPainter<'a> {
    /// Erstellt den Kontext für einen Viewport-Rect.
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, camera: &'a Camera2D) -> Self {
        Self {
            painter,
            rect,
            camera,
        }
    }

    fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.rect.width(), self.rect.height())
    }

    fn to_screen(&self, world: Vec2) -> egui::Pos2 {
        let local = self.camera.world_to_screen(world, self.viewport_size());
        self.rect.min + egui::vec2(local.x, local.y)
    }

    fn project(&self, points: &[Vec2]) -> Vec<egui::Pos2> {
        points.iter().map(|&p| self.to_screen(p)).collect()
    }

    /// Zeichnet alle Regionsumrisse als dünne, geschlossene Linien.
    pub fn paint_region_outlines(&self, map: &MapModel, color: [f32; 4]) -> usize {
        let stroke = egui::Stroke::new(1.0, to_color32(color));
        let mut painted = 0;

        for region in &map.regions {
            if region.points.len() < 2 {
                continue;
            }
            let points = self.project(&region.points);
            if !self.rect.intersects(egui::Rect::from_points(&points)) {
                continue;
            }
            self.painter
                .add(egui::Shape::closed_line(points, stroke));
            painted += 1;
        }

        painted
    }

    /// Zeichnet alle Overlay-Shapes in Listenreihenfolge.
    ///
    /// Die Umrissbreite ist in Welt-Einheiten angegeben und skaliert mit dem Zoom.
    pub fn paint_overlay(&self, overlay: &OverlayList) -> usize {
        let pixels_per_world = self.camera.pixels_per_world(self.rect.height());
        let mut painted = 0;

        for shape in overlay {
            if shape.points.len() < 3 {
                continue;
            }
            let points = self.project(&shape.points);
            let stroke = egui::Stroke::new(
                shape.outline_width * pixels_per_world,
                to_color32(shape.outline_color),
            );
            self.painter.add(egui::Shape::convex_polygon(
                points,
                to_color32(shape.fill_color),
                stroke,
            ));
            painted += 1;
        }

        painted
    }
}

/// Zeichnet einen Frame: Regionsumrisse (optional), danach das Overlay.
pub fn paint_map(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &Camera2D,
    map: &MapModel,
    overlay: &OverlayList,
    options: &InspectorOptions,
) {
    let map_painter = MapPainter::new(painter, rect, camera);
    if options.show_region_outlines {
        map_painter.paint_region_outlines(map, options.region_outline_color);
    }
    let shapes = map_painter.paint_overlay(overlay);
    log::trace!("{} Overlay-Shapes gezeichnet", shapes);
}

/// Konvertiert eine lineare RGBA-Farbe (0..1) in ein unmultipliziertes `Color32`.
pub fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = to_rgba8(rgba);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Quantisiert eine RGBA-Farbe (0..1) auf 8 Bit pro Kanal.
pub fn to_rgba8(rgba: [f32; 4]) -> [u8; 4] {
    rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::{CLUSTER_HIGHLIGHT, LOCATION_HIGHLIGHT};

    #[test]
    fn test_to_rgba8_matches_highlight_colors() {
        assert_eq!(to_rgba8(CLUSTER_HIGHLIGHT.rgba()), [255, 70, 100, 150]);
        assert_eq!(to_rgba8(LOCATION_HIGHLIGHT.rgba()), [255, 70, 0, 100]);
    }

    #[test]
    fn test_to_color32_clamps_values() {
        assert_eq!(to_rgba8([2.0, -1.0, 0.5, 1.0]), [255, 0, 128, 255]);
        assert_eq!(to_color32([1.0, 0.0, 0.0, 1.0]), egui::Color32::RED);
    }
}
