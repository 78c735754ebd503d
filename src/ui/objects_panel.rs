//! Objekt-Panel: ein Browser-Baum pro Entitäts-Kategorie.

use super::browser::{render_tree, ObjectBrowse};
use super::widgets::WidgetHost;
use crate::app::use_cases::highlight;
use crate::app::{AppIntent, AppState, CategorySelections};
use crate::core::{
    City, Cluster, EntityCategory, Located, Location, MapModel, MegaCluster, RegionOwner, River,
    StateCluster,
};
use crate::shared::{InspectorOptions, OverlayList};

/// Kategorie-Verhalten aller Browser-Bäume eines Frames.
///
/// Hebt selektierte Entitäten im Overlay hervor und sammelt Mutationswünsche
/// aus den Detailansichten als Intents.
pub struct ObjectsView<'a> {
    map: &'a MapModel,
    overlay: &'a mut OverlayList,
    options: &'a InspectorOptions,
    intents: &'a mut Vec<AppIntent>,
}

impl<'a> ObjectsView<'a> {
    /// Erstellt die Sicht für einen Frame.
    pub fn new(
        map: &'a MapModel,
        overlay: &'a mut OverlayList,
        options: &'a InspectorOptions,
        intents: &'a mut Vec<AppIntent>,
    ) -> Self {
        Self {
            map,
            overlay,
            options,
            intents,
        }
    }

    fn highlight_regions<O: RegionOwner>(&mut self, owner: &O) {
        highlight::synthesize_from_regions(
            self.map.regions_by_ids(owner.region_ids()),
            self.options.cluster_highlight,
            self.options.overlay_outline_width,
            self.overlay,
        );
    }

    fn highlight_location<L: Located>(&mut self, location: &L) {
        highlight::synthesize_from_location(
            self.map,
            location,
            self.options.location_highlight,
            self.options.overlay_outline_width,
            self.overlay,
        );
    }

    fn trade_label(&self, region_id: u64) -> String {
        match self.map.region(region_id) {
            Some(region) => format!("Trade: {}", region.traffic),
            None => "Trade: -".to_string(),
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

// ── Cluster-artige Kategorien ───────────────────────────────────────

impl ObjectBrowse<MegaCluster> for ObjectsView<'_> {
    fn title_of(&self, entity: &MegaCluster) -> String {
        entity.name.clone()
    }

    fn on_selected(&mut self, entity: &MegaCluster) {
        self.highlight_regions(entity);
    }

    fn on_expanded<H: WidgetHost>(&mut self, host: &mut H, entity: &MegaCluster) {
        host.text(&format!("Regions: {}", entity.regions.len()));
        host.text(&format!("States: {}", entity.states.len()));
        host.text(&format!("Is land: {}", yes_no(entity.is_land)));
    }
}

impl ObjectBrowse<StateCluster> for ObjectsView<'_> {
    fn title_of(&self, entity: &StateCluster) -> String {
        format!(
            "{} [{}]: {}",
            entity.display_name(),
            entity.id,
            entity.regions.len()
        )
    }

    fn on_selected(&mut self, entity: &StateCluster) {
        self.highlight_regions(entity);
    }

    fn on_expanded<H: WidgetHost>(&mut self, host: &mut H, entity: &StateCluster) {
        host.text(&format!("Regions: {}", entity.regions.len()));
        host.text(&format!("States: {}", entity.states.len()));
    }
}

impl ObjectBrowse<Cluster> for ObjectsView<'_> {
    fn title_of(&self, entity: &Cluster) -> String {
        format!("{} [{}]", entity.biome, entity.name)
    }

    fn on_selected(&mut self, entity: &Cluster) {
        self.highlight_regions(entity);
    }

    fn on_expanded<H: WidgetHost>(&mut self, host: &mut H, entity: &Cluster) {
        if let Some(mega) = entity
            .mega_cluster
            .and_then(|id| self.map.mega_cluster(id))
        {
            host.text(&format!("MegaCluster: {}", mega.name));
        }
        host.text(&format!("Biom: {}", entity.biome));
        host.text(&format!("Regions: {}", entity.regions.len()));
        host.text(&format!("States: {}", entity.states.len()));
        host.text(&format!("Neighbors: {}", entity.neighbors.len()));
        host.text(&format!("Is land: {}", yes_no(entity.is_land)));
        if entity.is_land {
            host.text(&format!("Has river: {}", yes_no(entity.has_river)));
        }
    }
}

impl ObjectBrowse<River> for ObjectsView<'_> {
    fn title_of(&self, entity: &River) -> String {
        format!(
            "{} [{}]: {} points",
            entity.name,
            entity.id,
            entity.point_count()
        )
    }

    fn on_selected(&mut self, entity: &River) {
        self.highlight_regions(entity);
    }

    fn on_expanded<H: WidgetHost>(&mut self, host: &mut H, entity: &River) {
        host.text(&format!("Name: {}", entity.name));

        let grid_id = format!("river_points_{}", entity.id);
        let intents = &mut *self.intents;
        host.grid(&grid_id, 3, |host| {
            host.text("x");
            host.text("y");
            host.text(" ");
            host.next_row();

            for (point_index, point) in entity.points.iter().enumerate() {
                host.text(&format!("{:.1}", point.x));
                host.text(&format!("{:.1}", point.y));
                if host.button("Del") {
                    intents.push(AppIntent::RiverPointDeleteRequested {
                        river_id: entity.id,
                        point_index,
                    });
                }
                host.next_row();
            }
        });
    }
}

// ── Orts-artige Kategorien ──────────────────────────────────────────

impl ObjectBrowse<City> for ObjectsView<'_> {
    fn title_of(&self, entity: &City) -> String {
        format!("{} [{}]", entity.name, entity.type_name)
    }

    fn on_selected(&mut self, entity: &City) {
        self.highlight_location(entity);
    }

    fn on_expanded<H: WidgetHost>(&mut self, host: &mut H, entity: &City) {
        host.text(&format!("Name: {}", entity.name));
        host.text(&format!("Type: {}", entity.type_name));
        host.text(&self.trade_label(entity.region));
        host.text(&format!("Population: {}", entity.population));
        host.text(&format!("Wealth: {:.2}", entity.wealth));
    }
}

impl ObjectBrowse<Location> for ObjectsView<'_> {
    fn title_of(&self, entity: &Location) -> String {
        format!("{} [{}]", entity.name, entity.type_name)
    }

    fn on_selected(&mut self, entity: &Location) {
        self.highlight_location(entity);
    }

    fn on_expanded<H: WidgetHost>(&mut self, host: &mut H, entity: &Location) {
        host.text(&format!("Name: {}", entity.name));
        host.text(&format!("Type: {}", entity.type_name));
        host.text(&self.trade_label(entity.region));
    }
}

// ── Orchestrierung ──────────────────────────────────────────────────

/// Baut das Overlay neu auf und rendert alle Kategorie-Bäume.
///
/// Das Overlay wird zuerst geleert; danach trägt jede selektierte Entität
/// ihre Shapes bei. Mutationen aus den Details (Flusspunkte löschen) werden
/// als Intents zurückgegeben und erst nach dem UI-Durchlauf angewendet.
pub fn draw_objects<H: WidgetHost>(
    host: &mut H,
    map: &MapModel,
    selections: &mut CategorySelections,
    overlay: &mut OverlayList,
    options: &InspectorOptions,
) -> Vec<AppIntent> {
    overlay.clear();
    let mut intents = Vec::new();
    let indent = options.tree_indent_factor;
    let mut view = ObjectsView::new(map, overlay, options, &mut intents);

    for category in EntityCategory::ALL {
        let title = category.title();
        let selection = selections.get_mut(category);
        let outcome = match category {
            EntityCategory::MegaClusters => {
                render_tree(host, title, title, &map.mega_clusters, selection, &mut view, indent)
            }
            EntityCategory::StateClusters => render_tree(
                host,
                title,
                title,
                &map.state_clusters,
                selection,
                &mut view,
                indent,
            ),
            EntityCategory::Clusters => {
                render_tree(host, title, title, &map.clusters, selection, &mut view, indent)
            }
            EntityCategory::Rivers => {
                render_tree(host, title, title, &map.rivers, selection, &mut view, indent)
            }
            EntityCategory::Cities => {
                render_tree(host, title, title, &map.cities, selection, &mut view, indent)
            }
            EntityCategory::Locations => {
                render_tree(host, title, title, &map.locations, selection, &mut view, indent)
            }
        };
        if let Some(index) = outcome.toggled {
            log::debug!("{}: Eintrag {} umgeschaltet", title, index);
        }
    }

    intents
}

/// Rendert das Objekt-Panel rechts und gibt erzeugte Intents zurück.
pub fn render_objects_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("objects_panel")
        .resizable(true)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Objects");
                let has_selection = state.objects.selections.total_selected() > 0;
                if ui
                    .add_enabled(has_selection, egui::Button::new("Clear"))
                    .clicked()
                {
                    events.push(AppIntent::ClearHighlightsRequested);
                }
            });
            ui.separator();

            let Some(map) = state.map.clone() else {
                state.objects.overlay.clear();
                ui.label("Keine Karte geladen");
                return;
            };

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    events.extend(draw_objects(
                        ui,
                        &map,
                        &mut state.objects.selections,
                        &mut state.objects.overlay,
                        &state.options,
                    ));
                });
        });

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SelectionStore;
    use crate::core::Region;
    use crate::shared::SelectionKeying;
    use crate::ui::widgets::HeadlessHost;
    use glam::Vec2;

    fn square(id: u64, offset: f32) -> Region {
        Region::new(
            id,
            vec![
                Vec2::new(offset, 0.0),
                Vec2::new(offset + 1.0, 0.0),
                Vec2::new(offset + 1.0, 1.0),
                Vec2::new(offset, 1.0),
            ],
        )
    }

    fn sample_map() -> MapModel {
        let mut map = MapModel::new();
        for id in 1..=4 {
            map.add_region(square(id, id as f32)).unwrap();
        }
        let mut city_region = square(5, 10.0);
        city_region.neighbors = vec![1, 2];
        city_region.traffic = 42;
        map.add_region(city_region).unwrap();

        map.mega_clusters.push(MegaCluster {
            id: 100,
            name: "Kontinent".to_string(),
            regions: vec![1, 2, 3],
            states: vec!["Nord".to_string()],
            is_land: true,
        });
        map.clusters.push(Cluster {
            id: 200,
            name: "Hain".to_string(),
            biome: "Forest".to_string(),
            regions: vec![1, 2],
            states: Vec::new(),
            neighbors: vec![201],
            is_land: true,
            has_river: false,
            mega_cluster: Some(100),
        });
        map.rivers.push(River::new(
            300,
            "Rhein",
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)],
        ));
        map.cities.push(City {
            id: 400,
            name: "Hafenstadt".to_string(),
            type_name: "port".to_string(),
            region: 5,
            population: 1200,
            wealth: 3.5,
        });
        map
    }

    #[test]
    fn test_draw_objects_clears_overlay_without_selection() {
        let map = sample_map();
        let mut host = HeadlessHost::new();
        let mut selections = CategorySelections::new(SelectionKeying::Position);
        let mut overlay = OverlayList::new();
        overlay.push(crate::shared::OverlayShape {
            points: vec![Vec2::ZERO],
            fill_color: [1.0; 4],
            outline_color: [1.0; 4],
            outline_width: 1.0,
        });
        let options = InspectorOptions::default();

        let intents = draw_objects(&mut host, &map, &mut selections, &mut overlay, &options);

        assert!(intents.is_empty());
        assert!(overlay.is_empty());
        let roots: Vec<_> = host
            .transcript()
            .iter()
            .filter(|line| line.starts_with("root "))
            .cloned()
            .collect();
        assert_eq!(
            roots,
            vec![
                "root MegaClusters (1)",
                "root StateClusters (0)",
                "root Clusters (1)",
                "root Rivers (1)",
                "root Cities (1)",
                "root Locations (0)",
            ]
        );
    }

    #[test]
    fn test_draw_objects_cluster_and_city_colors() {
        let map = sample_map();
        let mut host = HeadlessHost::new();
        let mut selections = CategorySelections::new(SelectionKeying::Position);
        let mut overlay = OverlayList::new();
        let options = InspectorOptions::default();

        selections.get_mut(EntityCategory::Clusters).sync_len(1);
        selections.get_mut(EntityCategory::Clusters).toggle(0, 200);
        selections.get_mut(EntityCategory::Cities).sync_len(1);
        selections.get_mut(EntityCategory::Cities).toggle(0, 400);

        draw_objects(&mut host, &map, &mut selections, &mut overlay, &options);

        // Cluster: 2 eigene Regionen, Stadt: 2 Nachbarregionen
        assert_eq!(overlay.len(), 4);
        let cluster_color = options.cluster_highlight.rgba();
        let location_color = options.location_highlight.rgba();
        assert_eq!(overlay.shapes()[0].fill_color, cluster_color);
        assert_eq!(overlay.shapes()[1].fill_color, cluster_color);
        assert_eq!(overlay.shapes()[2].fill_color, location_color);
        assert_eq!(overlay.shapes()[3].points, square(2, 2.0).points);
    }

    #[test]
    fn test_draw_objects_river_del_button_emits_intent() {
        let map = sample_map();
        let mut host = HeadlessHost::new();
        host.set_node_open("Rivers", 0, true);
        host.press_button("Rivers", 0, 1);
        let mut selections = CategorySelections::new(SelectionKeying::Position);
        let mut overlay = OverlayList::new();
        let options = InspectorOptions::default();

        let intents = draw_objects(&mut host, &map, &mut selections, &mut overlay, &options);

        assert_eq!(intents.len(), 1);
        assert!(matches!(
            intents[0],
            AppIntent::RiverPointDeleteRequested {
                river_id: 300,
                point_index: 1
            }
        ));
        // Modell bleibt im selben Frame unverändert
        assert_eq!(map.rivers[0].point_count(), 2);
    }

    #[test]
    fn test_draw_objects_details_for_cluster_and_city() {
        let map = sample_map();
        let mut host = HeadlessHost::new();
        host.set_node_open("Clusters", 0, true);
        host.set_node_open("Cities", 0, true);
        let mut selections = CategorySelections::new(SelectionKeying::Position);
        let mut overlay = OverlayList::new();
        let options = InspectorOptions::default();

        draw_objects(&mut host, &map, &mut selections, &mut overlay, &options);

        let transcript = host.transcript();
        for expected in [
            "node  0 Forest [Hain]",
            "text MegaCluster: Kontinent",
            "text Biom: Forest",
            "text Neighbors: 1",
            "text Has river: false",
            "node  0 Hafenstadt [port]",
            "text Trade: 42",
            "text Population: 1200",
            "text Wealth: 3.50",
        ] {
            assert!(
                transcript.iter().any(|line| line == expected),
                "fehlt: {expected}"
            );
        }
    }

    #[test]
    fn test_draw_objects_separate_selection_per_category() {
        let map = sample_map();
        let mut host = HeadlessHost::new();
        host.click_node("MegaClusters", 0);
        let mut selections = CategorySelections::new(SelectionKeying::Position);
        let mut overlay = OverlayList::new();
        let options = InspectorOptions::default();

        draw_objects(&mut host, &map, &mut selections, &mut overlay, &options);

        assert_eq!(
            selections
                .get(EntityCategory::MegaClusters)
                .selected_count(),
            1
        );
        assert_eq!(
            selections
                .get(EntityCategory::StateClusters)
                .selected_count(),
            0
        );
    }
}
