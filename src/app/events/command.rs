use crate::shared::InspectorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// JSON-Snapshot laden
    LoadFile { path: String },
    /// Anwendung beenden
    RequestExit,

    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Kamera auf Karten-Bounds einpassen
    FitCameraToMap,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Delta verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Punkt eines Flusses löschen
    DeleteRiverPoint { river_id: u64, point_index: usize },
    /// Alle Selektionen und das Overlay verwerfen
    ClearHighlights,

    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: InspectorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
