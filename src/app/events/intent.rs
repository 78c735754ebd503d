use crate::shared::InspectorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Snapshot öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Snapshot wurde im Dialog oder per Kommandozeile ausgewählt
    FileSelected { path: String },
    /// Anwendung beenden
    ExitRequested,

    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Kamera auf die Ausdehnung der Karte einpassen
    FitToMapRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Einzelnen Punkt eines Flusses entfernen (Del-Button im Browser)
    RiverPointDeleteRequested { river_id: u64, point_index: usize },
    /// Alle Selektionen im Objekt-Browser aufheben
    ClearHighlightsRequested,

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: InspectorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
