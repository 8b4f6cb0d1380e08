//! Behaviour of the nearby-attraction ranking.

use geo::Coord;
use rstest::{fixture, rstest};
use tourguide_core::test_support::{FailingCatalog, FailingRewardPoints, FixedRewardPoints, MemoryCatalog};
use tourguide_core::{Attraction, NearbyError, nearby_attractions};

const ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

#[fixture]
fn catalog() -> MemoryCatalog {
    // Catalog order is deliberately not distance order.
    MemoryCatalog::with_attractions([
        Attraction::new(1, "far", Coord { x: 90.0, y: 0.0 }),
        Attraction::new(2, "near", Coord { x: 1.0, y: 0.0 }),
        Attraction::new(3, "mid", Coord { x: 10.0, y: 0.0 }),
        Attraction::new(4, "antipode", Coord { x: 180.0, y: 0.0 }),
        Attraction::new(5, "here", ORIGIN),
        Attraction::new(6, "also-near", Coord { x: 2.0, y: 0.0 }),
        Attraction::new(7, "beyond", Coord { x: 0.0, y: 89.0 }),
    ])
}

#[rstest]
fn returns_top_n_sorted_by_ascending_distance(catalog: MemoryCatalog) {
    let nearby = nearby_attractions(ORIGIN, 1, &catalog, &FixedRewardPoints(7), 5).unwrap();

    assert_eq!(nearby.len(), 5);
    let names: Vec<&str> = nearby.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["here", "near", "also-near", "mid", "beyond"]);
    assert!(nearby.windows(2).all(|w| w[0].distance_miles <= w[1].distance_miles));
    assert!(nearby.iter().all(|n| n.reward_points == 7));
    assert!(nearby.iter().all(|n| n.user_location == ORIGIN));
}

#[rstest]
fn includes_attractions_at_any_distance(catalog: MemoryCatalog) {
    // No radius filter: with a large enough n even the antipode is reported.
    let nearby = nearby_attractions(ORIGIN, 1, &catalog, &FixedRewardPoints(0), 10).unwrap();
    assert_eq!(nearby.len(), 7);
    assert_eq!(nearby.last().unwrap().name, "antipode");
}

#[rstest]
fn exact_distance_ties_keep_catalog_order() {
    let catalog = MemoryCatalog::with_attractions([
        Attraction::new(1, "east", Coord { x: 1.0, y: 0.0 }),
        Attraction::new(2, "west", Coord { x: -1.0, y: 0.0 }),
    ]);
    let nearby = nearby_attractions(ORIGIN, 1, &catalog, &FixedRewardPoints(0), 2).unwrap();
    assert_eq!(nearby[0].name, "east");
    assert_eq!(nearby[1].name, "west");
}

#[rstest]
fn empty_catalog_yields_empty_ranking() {
    let catalog = MemoryCatalog::default();
    let nearby = nearby_attractions(ORIGIN, 1, &catalog, &FixedRewardPoints(0), 5).unwrap();
    assert!(nearby.is_empty());
}

#[rstest]
fn catalog_failure_propagates() {
    let err = nearby_attractions(ORIGIN, 1, &FailingCatalog, &FixedRewardPoints(0), 5).unwrap_err();
    assert!(matches!(err, NearbyError::Catalog(_)));
}

#[rstest]
fn oracle_failure_propagates(catalog: MemoryCatalog) {
    let err = nearby_attractions(ORIGIN, 1, &catalog, &FailingRewardPoints, 5).unwrap_err();
    assert!(matches!(err, NearbyError::Points(_)));
}

#[cfg(feature = "serde")]
#[rstest]
fn record_serializes_with_the_boundary_field_set(catalog: MemoryCatalog) {
    let nearby = nearby_attractions(ORIGIN, 1, &catalog, &FixedRewardPoints(100), 1).unwrap();
    let json = serde_json::to_value(&nearby[0]).unwrap();
    for field in [
        "name",
        "attraction_location",
        "user_location",
        "distance_miles",
        "reward_points",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }
}
