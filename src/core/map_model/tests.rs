use super::*;
use glam::Vec2;

fn square(id: u64, origin: Vec2) -> Region {
    Region::new(
        id,
        vec![
            origin,
            origin + Vec2::new(10.0, 0.0),
            origin + Vec2::new(10.0, 10.0),
            origin + Vec2::new(0.0, 10.0),
        ],
    )
}

#[test]
fn test_add_region_and_lookup() {
    let mut map = MapModel::new();
    map.add_region(square(4, Vec2::ZERO)).expect("Region 4");
    map.add_region(square(9, Vec2::new(10.0, 0.0)))
        .expect("Region 9");

    assert_eq!(map.region_count(), 2);
    assert_eq!(map.region(9).map(|r| r.id), Some(9));
    assert!(map.region(5).is_none());
}

#[test]
fn test_add_region_rejects_duplicate_id() {
    let mut map = MapModel::new();
    map.add_region(square(1, Vec2::ZERO)).expect("Region 1");

    let err = map.add_region(square(1, Vec2::ONE)).unwrap_err();

    assert_eq!(err, MapModelError::DuplicateRegionId(1));
    assert_eq!(map.region_count(), 1);
}

#[test]
fn test_rebuild_region_index_after_direct_access() {
    let mut map = MapModel::new();
    map.regions.push(square(3, Vec2::ZERO));
    map.regions.push(square(8, Vec2::ONE));
    assert!(map.region(3).is_none(), "Index ist vor dem Rebuild leer");

    map.rebuild_region_index().expect("Rebuild");

    assert_eq!(map.region(8).map(|r| r.id), Some(8));
}

#[test]
fn test_regions_by_ids_keeps_order_and_skips_unknown() {
    let mut map = MapModel::new();
    for id in 1..=3 {
        map.add_region(square(id, Vec2::splat(id as f32)))
            .expect("Region");
    }

    let ids = [3, 42, 1, 3];
    let resolved: Vec<u64> = map.regions_by_ids(&ids).map(|r| r.id).collect();

    assert_eq!(resolved, vec![3, 1, 3]);
}

#[test]
fn test_count_dangling_region_refs() {
    let mut map = MapModel::new();
    map.add_region(square(1, Vec2::ZERO).with_neighbors(vec![2, 99]))
        .expect("Region 1");
    map.add_region(square(2, Vec2::ONE)).expect("Region 2");
    map.rivers.push(River {
        id: 1,
        name: "Fluss".into(),
        regions: vec![1, 77],
        points: Vec::new(),
    });
    map.cities.push(City {
        id: 1,
        name: "Stadt".into(),
        type_name: "capital".into(),
        region: 55,
        population: 100,
        wealth: 1.0,
    });

    // 99 (Nachbar), 77 (Fluss), 55 (Stadt)
    assert_eq!(map.count_dangling_region_refs(), 3);
}

#[test]
fn test_bounds() {
    let mut map = MapModel::new();
    assert!(map.bounds().is_none());

    map.add_region(square(1, Vec2::new(-5.0, 2.0)))
        .expect("Region 1");
    map.add_region(square(2, Vec2::new(20.0, 30.0)))
        .expect("Region 2");

    let (min, max) = map.bounds().expect("Bounds erwartet");
    assert_eq!(min, Vec2::new(-5.0, 2.0));
    assert_eq!(max, Vec2::new(30.0, 40.0));
}

#[test]
fn test_river_mut_and_entity_count() {
    let mut map = MapModel::new();
    map.rivers.push(River::new(11, "A", vec![Vec2::ZERO, Vec2::ONE]));
    map.rivers.push(River::new(12, "B", vec![Vec2::ZERO]));

    let river = map.river_mut(12).expect("Fluss 12");
    river.points.push(Vec2::ONE);

    assert_eq!(map.rivers[1].point_count(), 2);
    assert!(map.river_mut(13).is_none());
    assert_eq!(map.entity_count(EntityCategory::Rivers), 2);
    assert_eq!(map.entity_count(EntityCategory::Cities), 0);
}
