//! 2D-Kamera für Pan und Zoom im Overlay-Viewport.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom
///
/// Weltkoordinaten des Generators wachsen nach rechts und unten, genau wie
/// Screen-Koordinaten; es gibt daher keinen Y-Flip.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Position der Kamera (Bildmitte) in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f32 = 1024.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb der gegebenen Grenzen.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Screen-Pixel pro Welteinheit bei gegebener Viewport-Höhe.
    pub fn pixels_per_world(&self, viewport_height: f32) -> f32 {
        self.zoom * viewport_height.max(1.0) / (2.0 * Self::BASE_WORLD_EXTENT)
    }

    /// Welteinheiten pro Screen-Pixel (Kehrwert von [`Self::pixels_per_world`]).
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        1.0 / self.pixels_per_world(viewport_height)
    }

    /// Konvertiert Welt-Koordinaten in Viewport-lokale Screen-Koordinaten.
    pub fn world_to_screen(&self, world: Vec2, viewport_size: Vec2) -> Vec2 {
        viewport_size * 0.5 + (world - self.position) * self.pixels_per_world(viewport_size.y)
    }

    /// Konvertiert Viewport-lokale Screen-Koordinaten in Welt-Koordinaten.
    pub fn screen_to_world(&self, screen: Vec2, viewport_size: Vec2) -> Vec2 {
        (screen - viewport_size * 0.5) * self.world_per_pixel(viewport_size.y) + self.position
    }

    /// Richtet die Kamera so aus, dass die Bounding Box vollständig sichtbar ist.
    ///
    /// Der Zoom wird auf `[zoom_min, zoom_max]` begrenzt; eine entartete Box
    /// (Breite und Höhe 0) zentriert nur.
    pub fn fit_bounds(
        &mut self,
        min: Vec2,
        max: Vec2,
        viewport_size: Vec2,
        zoom_min: f32,
        zoom_max: f32,
    ) {
        self.look_at((min + max) * 0.5);

        let extent = max - min;
        if extent.x <= 0.0 && extent.y <= 0.0 {
            return;
        }

        let aspect = viewport_size.x.max(1.0) / viewport_size.y.max(1.0);
        // Benötigte Halbhöhe, damit auch die Breite in den Viewport passt
        let half_height = (extent.y * 0.5).max(extent.x * 0.5 / aspect);
        self.zoom = (Self::BASE_WORLD_EXTENT / half_height).clamp(zoom_min, zoom_max);
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
