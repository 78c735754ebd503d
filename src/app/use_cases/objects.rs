//! Use-Case-Funktionen für Mutationen aus dem Objekt-Browser.

use crate::app::AppState;
use crate::core::EntityCategory;
use std::sync::Arc;

/// Entfernt den Punkt `point_index` aus dem Fluss `river_id`.
///
/// Ungültige Fluss-IDs oder Indizes werden protokolliert und ignoriert.
/// Andere Flüsse und deren Selektion bleiben unberührt.
pub fn delete_river_point(state: &mut AppState, river_id: u64, point_index: usize) {
    let Some(map_arc) = state.map.as_mut() else {
        log::warn!("Flusspunkt löschen ohne geladene Karte ignoriert");
        return;
    };

    let map = Arc::make_mut(map_arc);
    let Some(river) = map.river_mut(river_id) else {
        log::warn!("Fluss {} nicht gefunden", river_id);
        return;
    };

    match river.remove_point(point_index) {
        Some(point) => {
            log::info!(
                "Punkt {} ({:.1}, {:.1}) aus Fluss {} entfernt, {} verbleibend",
                point_index,
                point.x,
                point.y,
                river_id,
                river.point_count()
            );
        }
        None => {
            log::warn!(
                "Punkt {} existiert nicht in Fluss {} ({} Punkte)",
                point_index,
                river_id,
                river.point_count()
            );
        }
    }
}

/// Hebt alle Selektionen auf und leert das Overlay.
pub fn clear_highlights(state: &mut AppState) {
    let before = state.objects.selections.total_selected();
    state.objects.selections.clear_all();
    state.objects.overlay.clear();
    log::debug!("{} Selektionen aufgehoben", before);
}

/// Anzahl der Einträge pro Kategorie der geladenen Karte.
pub fn category_counts(state: &AppState) -> Vec<(EntityCategory, usize)> {
    EntityCategory::ALL
        .iter()
        .map(|&category| (category, state.entity_count(category)))
        .collect()
}
