use crate::core::Camera2D;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// 2D-Kamera für den Overlay-Viewport
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
        }
    }

    /// Viewport-Größe als Vektor
    pub fn viewport_vec(&self) -> glam::Vec2 {
        glam::Vec2::from(self.viewport_size)
    }
}
