use crate::app::selection::CategorySelections;
use crate::shared::{OverlayList, SelectionKeying};

/// Zustand des Objekt-Browsers: Selektionen und Overlay des aktuellen Frames
#[derive(Debug, Clone, Default)]
pub struct ObjectsState {
    /// Eine Selektion pro Entitäts-Kategorie (lebt über Frames hinweg)
    pub selections: CategorySelections,
    /// Overlay-Shapes des aktuellen Frames (wird jeden Frame neu aufgebaut)
    pub overlay: OverlayList,
}

impl ObjectsState {
    /// Erstellt einen leeren Zustand mit der gewünschten Selektions-Schlüsselung.
    pub fn new(keying: SelectionKeying) -> Self {
        Self {
            selections: CategorySelections::new(keying),
            overlay: OverlayList::new(),
        }
    }

    /// Verwirft alle Selektionen und das Overlay.
    ///
    /// Bei geänderter Schlüsselung werden die Selektionen neu angelegt.
    pub fn reset(&mut self, keying: SelectionKeying) {
        if self.selections.keying() == keying {
            self.selections.clear_all();
        } else {
            self.selections = CategorySelections::new(keying);
        }
        self.overlay.clear();
    }
}
