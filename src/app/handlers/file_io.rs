//! Handler für Datei-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::file_io::request_open_file(state);
}

/// Lädt einen Karten-Snapshot aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_selected_file(state, path)
}
