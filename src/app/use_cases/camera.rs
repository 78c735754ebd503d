//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;

/// Setzt die Kamera auf Default zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Default::default();
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    let old_zoom = state.view.camera.zoom;
    state.view.camera.zoom_by_clamped(
        factor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );

    if let Some(focus) = focus_world {
        let scale = old_zoom / state.view.camera.zoom;
        state.view.camera.position = focus + (state.view.camera.position - focus) * scale;
    }
}

/// Passt die Kamera an die Bounding Box aller Regionen an.
///
/// Keine Operation ohne geladene Karte oder ohne Regionspunkte.
pub fn fit_to_map(state: &mut AppState) {
    let Some((min, max)) = state.map.as_ref().and_then(|map| map.bounds()) else {
        return;
    };

    let viewport = state.view.viewport_vec();
    state.view.camera.fit_bounds(
        min,
        max,
        viewport,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );

    log::info!(
        "Map bounds: ({:.1}, {:.1}) to ({:.1}, {:.1}), zoom: {:.2}",
        min.x,
        min.y,
        max.x,
        max.y,
        state.view.camera.zoom
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MapModel, Region};
    use glam::Vec2;
    use std::sync::Arc;

    #[test]
    fn reset_camera_sets_default_position_and_zoom() {
        let mut state = AppState::new();
        state.view.camera.look_at(Vec2::new(100.0, 200.0));
        state.view.camera.zoom = 5.0;

        reset_camera(&mut state);

        assert_eq!(state.view.camera.position, Vec2::ZERO);
        assert_eq!(state.view.camera.zoom, 1.0);
    }

    #[test]
    fn zoom_in_then_out_returns_to_original() {
        let mut state = AppState::new();
        let original = state.view.camera.zoom;

        zoom_in(&mut state);
        assert!(state.view.camera.zoom > original);
        zoom_out(&mut state);

        assert!((state.view.camera.zoom - original).abs() < 1e-5);
    }

    #[test]
    fn zoom_towards_point_keeps_focus_stable() {
        let mut state = AppState::new();
        let focus = Vec2::new(100.0, 50.0);

        zoom_towards(&mut state, 2.0, Some(focus));

        assert!((state.view.camera.zoom - 2.0).abs() < 1e-5);
        assert!(state.view.camera.position.x > 0.0);
        assert!(state.view.camera.position.y > 0.0);
    }

    #[test]
    fn fit_to_map_centers_on_regions() {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 800.0];
        let mut map = MapModel::new();
        map.add_region(Region::new(
            1,
            vec![Vec2::new(0.0, 0.0), Vec2::new(200.0, 0.0), Vec2::new(200.0, 100.0)],
        ))
        .unwrap();
        state.map = Some(Arc::new(map));

        fit_to_map(&mut state);

        assert_eq!(state.view.camera.position, Vec2::new(100.0, 50.0));
        assert!(state.view.camera.zoom > 1.0);
    }

    #[test]
    fn fit_to_map_without_map_is_noop() {
        let mut state = AppState::new();
        state.view.camera.look_at(Vec2::new(3.0, 4.0));

        fit_to_map(&mut state);

        assert_eq!(state.view.camera.position, Vec2::new(3.0, 4.0));
    }
}
