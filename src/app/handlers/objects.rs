//! Handler für Mutationen aus dem Objekt-Browser.

use crate::app::use_cases;
use crate::app::AppState;

/// Entfernt einen Punkt aus einem Fluss (wirkt ab dem nächsten Frame).
pub fn delete_river_point(state: &mut AppState, river_id: u64, point_index: usize) {
    use_cases::objects::delete_river_point(state, river_id, point_index);
}

/// Hebt alle Selektionen auf und verwirft das Overlay.
pub fn clear_highlights(state: &mut AppState) {
    use_cases::objects::clear_highlights(state);
}
