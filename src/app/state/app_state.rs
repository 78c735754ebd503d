use crate::core::{EntityCategory, MapModel};
use crate::shared::InspectorOptions;
use std::sync::Arc;

use super::{ObjectsState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladenes Kartenmodell (None = kein Snapshot geladen)
    pub map: Option<Arc<MapModel>>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Objekt-Browser-State (Selektionen + Overlay)
    pub objects: ObjectsState,
    /// Laufzeit-Optionen (Farben, Einrückung, Kamera)
    pub options: InspectorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(InspectorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen.
    pub fn with_options(options: InspectorOptions) -> Self {
        Self {
            map: None,
            view: ViewState::new(),
            ui: UiState::new(),
            objects: ObjectsState::new(options.selection_keying),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Entitäten einer Kategorie zurück (für UI-Anzeige)
    pub fn entity_count(&self, category: EntityCategory) -> usize {
        self.map.as_ref().map_or(0, |m| m.entity_count(category))
    }

    /// Anzahl der Overlay-Shapes des letzten Frames
    pub fn overlay_shape_count(&self) -> usize {
        self.objects.overlay.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
