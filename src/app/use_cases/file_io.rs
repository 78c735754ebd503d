//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use anyhow::Context;
use std::sync::Arc;

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Lädt den ausgewählten JSON-Snapshot in den AppState.
///
/// Bestehende Selektionen beziehen sich auf die alte Karte und werden verworfen.
pub fn load_selected_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Snapshot konnte nicht gelesen werden: {}", path))?;
    let map = crate::snapshot::parse_map_snapshot(&content)
        .with_context(|| format!("Ungültiger Karten-Snapshot: {}", path))?;

    log::info!(
        "Loaded map: {} regions, {} clusters, {} rivers, {} cities, {} locations",
        map.region_count(),
        map.clusters.len(),
        map.rivers.len(),
        map.cities.len(),
        map.locations.len()
    );

    state.objects.reset(state.options.selection_keying);
    state.ui.status_message = Some(format!("Geladen: {}", path));
    state.ui.current_file_path = Some(path);
    state.map = Some(Arc::new(map));
    Ok(())
}
