use approx::assert_relative_eq;
use glam::Vec2;
use mapgen_inspector::ui::{draw_objects, HeadlessHost};
use mapgen_inspector::{
    AppController, AppIntent, AppState, EntityCategory, InspectorOptions, SelectionKeying,
    SelectionStore,
};
use std::sync::Arc;

fn fixture_path() -> String {
    format!(
        "{}/tests/fixtures/sample_map.json",
        env!("CARGO_MANIFEST_DIR")
    )
}

fn loaded_state(keying: SelectionKeying) -> (AppController, AppState) {
    let options = InspectorOptions {
        selection_keying: keying,
        ..InspectorOptions::default()
    };
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::FileSelected {
                path: fixture_path(),
            },
        )
        .expect("Fixture sollte laden");
    (controller, state)
}

/// Ein Frame: Browser rendern, danach gesammelte Intents anwenden.
fn run_frame(controller: &mut AppController, state: &mut AppState, host: &mut HeadlessHost) {
    let map = state.map.clone().expect("Karte geladen");
    let intents = draw_objects(
        host,
        &map,
        &mut state.objects.selections,
        &mut state.objects.overlay,
        &state.options,
    );
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }
}

#[test]
fn test_cluster_click_highlights_next_frame() {
    let (mut controller, mut state) = loaded_state(SelectionKeying::Position);
    let mut host = HeadlessHost::new();

    host.click_node("Clusters", 0);
    run_frame(&mut controller, &mut state, &mut host);

    let clusters = state
        .objects
        .selections
        .get(EntityCategory::Clusters)
        .as_mask()
        .expect("positionale Selektion");
    assert_eq!(clusters.as_slice(), &[true, false, false]);
    assert!(state.objects.overlay.is_empty());

    run_frame(&mut controller, &mut state, &mut host);

    // Eichenhain: Regionen 1 (4 Ecken) und 3 (3 Ecken)
    let shapes = state.objects.overlay.shapes();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].vertex_count(), 4);
    assert_eq!(shapes[1].vertex_count(), 3);
    let expected = state.options.cluster_highlight.rgba();
    assert_eq!(shapes[0].fill_color, expected);
    assert_eq!(shapes[0].outline_color, expected);
    assert_relative_eq!(shapes[0].outline_width, 1.0);
    assert_relative_eq!(shapes[0].fill_color[3], 150.0 / 255.0, epsilon = 1e-4);
}

#[test]
fn test_selection_persists_across_frames() {
    let (mut controller, mut state) = loaded_state(SelectionKeying::Position);
    let mut host = HeadlessHost::new();

    host.click_node("Rivers", 0);
    run_frame(&mut controller, &mut state, &mut host);
    for _ in 0..3 {
        run_frame(&mut controller, &mut state, &mut host);
        assert_eq!(state.objects.overlay.len(), 2);
    }

    host.click_node("Rivers", 0);
    run_frame(&mut controller, &mut state, &mut host);
    run_frame(&mut controller, &mut state, &mut host);

    assert!(state.objects.overlay.is_empty());
    assert_eq!(state.objects.selections.total_selected(), 0);
}

#[test]
fn test_river_point_delete_visible_next_frame() {
    let (mut controller, mut state) = loaded_state(SelectionKeying::Position);
    let mut host = HeadlessHost::new();
    host.set_node_open("Rivers", 0, true);
    host.press_button("Rivers", 0, 1);

    run_frame(&mut controller, &mut state, &mut host);

    let river = &state.map.as_ref().expect("Karte").rivers[0];
    assert_eq!(river.points, vec![Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0)]);

    host.clear_transcript();
    run_frame(&mut controller, &mut state, &mut host);
    assert!(host
        .transcript()
        .iter()
        .any(|line| line == "node  0 Silberbach [300]: 2 points"));
}

#[test]
fn test_river_point_invalid_index_is_rejected() {
    let (mut controller, mut state) = loaded_state(SelectionKeying::Position);

    controller
        .handle_intent(
            &mut state,
            AppIntent::RiverPointDeleteRequested {
                river_id: 300,
                point_index: 3,
            },
        )
        .expect("Ablehnung ist kein Fehler");

    assert_eq!(state.map.as_ref().expect("Karte").rivers[0].points.len(), 3);
}

#[test]
fn test_city_highlights_neighbor_regions() {
    let (mut controller, mut state) = loaded_state(SelectionKeying::Position);
    let mut host = HeadlessHost::new();

    host.click_node("Cities", 0);
    run_frame(&mut controller, &mut state, &mut host);
    run_frame(&mut controller, &mut state, &mut host);

    // Region 4 hat die Nachbarn 2 und 5; Region 4 selbst wird nicht gezeichnet
    let shapes = state.objects.overlay.shapes();
    assert_eq!(shapes.len(), 2);
    let map = state.map.as_ref().expect("Karte");
    assert_eq!(shapes[0].points, map.region(2).expect("Region 2").points);
    assert_eq!(shapes[1].points, map.region(5).expect("Region 5").points);
    assert_eq!(shapes[0].fill_color, state.options.location_highlight.rgba());
}

#[test]
fn test_empty_and_unknown_regions_yield_no_shapes() {
    let (mut controller, mut state) = loaded_state(SelectionKeying::Position);
    let mut host = HeadlessHost::new();

    host.click_node("Clusters", 2);
    run_frame(&mut controller, &mut state, &mut host);
    run_frame(&mut controller, &mut state, &mut host);

    // Tiefe: Region 5 (gültig), 6 (leer), 99 (unbekannt)
    assert_eq!(state.objects.overlay.len(), 1);
}

#[test]
fn test_clear_highlights_drops_all_selections() {
    let (mut controller, mut state) = loaded_state(SelectionKeying::Position);
    let mut host = HeadlessHost::new();
    host.click_node("MegaClusters", 0);
    host.click_node("Locations", 0);
    run_frame(&mut controller, &mut state, &mut host);
    assert_eq!(state.objects.selections.total_selected(), 2);

    controller
        .handle_intent(&mut state, AppIntent::ClearHighlightsRequested)
        .expect("ClearHighlights");
    run_frame(&mut controller, &mut state, &mut host);

    assert_eq!(state.objects.selections.total_selected(), 0);
    assert!(state.objects.overlay.is_empty());
}

#[test]
fn test_identity_selection_follows_entity_after_reorder() {
    let (mut controller, mut state) = loaded_state(SelectionKeying::Identity);
    let mut host = HeadlessHost::new();

    host.click_node("Clusters", 1);
    run_frame(&mut controller, &mut state, &mut host);

    let map = Arc::make_mut(state.map.as_mut().expect("Karte"));
    map.clusters.swap(0, 1);

    host.clear_transcript();
    run_frame(&mut controller, &mut state, &mut host);

    let selection = state.objects.selections.get(EntityCategory::Clusters);
    assert!(selection.is_selected(0, 201));
    assert!(!selection.is_selected(1, 200));
    assert!(host
        .transcript()
        .iter()
        .any(|line| line == "node *0 Grassland [Weite]"));
    // Weite: Regionen 2 und 4
    assert_eq!(state.objects.overlay.len(), 2);
}

#[test]
fn test_positional_selection_stays_at_position_after_reorder() {
    let (mut controller, mut state) = loaded_state(SelectionKeying::Position);
    let mut host = HeadlessHost::new();

    host.click_node("Clusters", 1);
    run_frame(&mut controller, &mut state, &mut host);

    let map = Arc::make_mut(state.map.as_mut().expect("Karte"));
    map.clusters.swap(0, 1);

    host.clear_transcript();
    run_frame(&mut controller, &mut state, &mut host);

    assert!(host
        .transcript()
        .iter()
        .any(|line| line == "node *1 Forest [Eichenhain]"));
}

#[test]
fn test_reload_resets_selection() {
    let (mut controller, mut state) = loaded_state(SelectionKeying::Position);
    let mut host = HeadlessHost::new();
    host.click_node("Cities", 0);
    run_frame(&mut controller, &mut state, &mut host);
    assert_eq!(state.objects.selections.total_selected(), 1);

    controller
        .handle_intent(
            &mut state,
            AppIntent::FileSelected {
                path: fixture_path(),
            },
        )
        .expect("Fixture sollte erneut laden");

    assert_eq!(state.objects.selections.total_selected(), 0);
    assert!(state.view.camera.zoom > 0.0);
}

#[test]
fn test_inverted_zoom_limits_from_options_file_do_not_break_loading() {
    let text = r#"
        camera_zoom_min = 10.0
        camera_zoom_max = 1.0
        camera_zoom_step = 1.2
        camera_scroll_zoom_step = 1.1

        [cluster_highlight]
        color = [1.0, 0.27, 0.39]
        opacity = 0.59

        [location_highlight]
        color = [1.0, 0.27, 0.0]
        opacity = 0.39
    "#;
    let options = InspectorOptions::from_toml_str(text).expect("Parse");
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::FileSelected {
                path: fixture_path(),
            },
        )
        .expect("Fixture sollte laden");
    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .expect("Zoom");

    let zoom = state.view.camera.zoom;
    assert!((1.0..=10.0).contains(&zoom), "Zoom {zoom} außerhalb der Grenzen");
}
