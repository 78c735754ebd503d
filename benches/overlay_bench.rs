use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use mapgen_inspector::app::use_cases::highlight::synthesize_from_regions;
use mapgen_inspector::ui::{draw_objects, HeadlessHost};
use mapgen_inspector::{
    CategorySelections, Cluster, EntityCategory, InspectorOptions, MapModel, OverlayList, Region,
    SelectionKeying, SelectionStore,
};
use std::hint::black_box;

/// Gitter aus Sechsecken; jeder Cluster umfasst `regions_per_cluster` Regionen.
fn build_synthetic_map(region_count: usize, regions_per_cluster: usize) -> MapModel {
    let mut map = MapModel::new();

    for index in 0..region_count {
        let id = index as u64 + 1;
        let center = Vec2::new((index % 200) as f32 * 10.0, (index / 200) as f32 * 10.0);
        let points = (0..6)
            .map(|k| {
                let angle = k as f32 * std::f32::consts::TAU / 6.0;
                center + Vec2::new(angle.cos(), angle.sin()) * 5.0
            })
            .collect();
        let region = Region::new(id, points).with_neighbors(vec![id + 1]);
        if let Err(e) = map.add_region(region) {
            panic!("Synthetische Region ungültig: {e}");
        }
    }

    for (cluster_index, chunk) in (1..=region_count as u64)
        .collect::<Vec<_>>()
        .chunks(regions_per_cluster)
        .enumerate()
    {
        map.clusters.push(Cluster {
            id: cluster_index as u64 + 10_000,
            name: format!("Cluster {}", cluster_index),
            biome: "Forest".to_string(),
            regions: chunk.to_vec(),
            states: Vec::new(),
            neighbors: Vec::new(),
            is_land: true,
            has_river: false,
            mega_cluster: None,
        });
    }

    map
}

fn bench_region_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_synthesis");
    let options = InspectorOptions::default();

    for &region_count in &[1_000usize, 10_000usize] {
        let map = build_synthetic_map(region_count, 50);

        group.bench_with_input(
            BenchmarkId::new("all_regions", region_count),
            &map,
            |b, map| {
                let mut overlay = OverlayList::new();
                b.iter(|| {
                    overlay.clear();
                    let appended = synthesize_from_regions(
                        black_box(&map.regions),
                        options.cluster_highlight,
                        options.overlay_outline_width,
                        &mut overlay,
                    );
                    black_box(appended)
                })
            },
        );
    }

    group.finish();
}

fn bench_draw_objects_frame(c: &mut Criterion) {
    let map = build_synthetic_map(10_000, 50);
    let options = InspectorOptions::default();

    let mut selections = CategorySelections::new(SelectionKeying::Position);
    let clusters = selections.get_mut(EntityCategory::Clusters);
    clusters.sync_len(map.clusters.len());
    for (index, cluster) in map.clusters.iter().enumerate().step_by(4) {
        clusters.toggle(index, cluster.id);
    }

    c.bench_function("draw_objects_headless_frame", |b| {
        let mut host = HeadlessHost::new();
        let mut overlay = OverlayList::new();
        b.iter(|| {
            host.clear_transcript();
            let intents = draw_objects(
                &mut host,
                black_box(&map),
                &mut selections,
                &mut overlay,
                &options,
            );
            black_box((intents.len(), overlay.len()))
        })
    });
}

criterion_group!(benches, bench_region_synthesis, bench_draw_objects_frame);
criterion_main!(benches);
