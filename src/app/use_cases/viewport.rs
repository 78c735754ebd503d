//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Viewport-Größe.
///
/// Negative oder nicht-endliche Maße werden auf 0 gesetzt.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size.map(|v| if v.is_finite() { v.max(0.0) } else { 0.0 });
}
