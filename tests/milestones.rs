//! One test per delivered milestone, plus placeholders for the planned ones.

use overpass_predictor::config::{load_platforms, load_targets};
use overpass_predictor::geodesy::GeoPoint;
use overpass_predictor::intercept;
use overpass_predictor::track::platform;
use overpass_predictor::vector;

#[test]
fn milestone_v01_catalogs_load_and_select() {
    let platforms = load_platforms("data/scenarios/platforms.yaml").expect("platforms yaml");
    let targets = load_targets("data/scenarios/targets.yaml").expect("targets yaml");
    assert!(!platforms.is_empty());
    assert!(!targets.is_empty());

    let selected = platform::select(&platforms, None).expect("default platform");
    assert_eq!(selected.name, platforms[0].name);
}

#[test]
fn milestone_v02_tracked_state_from_the_catalog() {
    let platforms = load_platforms("data/scenarios/platforms.yaml").expect("platforms yaml");
    let mut landsat = platform::select(&platforms, Some("LANDSAT-8")).expect("platform");

    landsat.refresh(0.0);
    let state = landsat.state().expect("state");
    let config = platforms.iter().find(|p| p.name == "LANDSAT-8").unwrap();
    assert!((state.position.lat_deg - config.lat_deg).abs() < 1e-9);
    assert!((state.position.lon_deg - config.lon_deg).abs() < 1e-9);
    let speed = vector::norm(&state.velocity);
    assert!(
        (speed - config.ground_speed_km_h).abs() < 1e-6,
        "speed = {}",
        speed
    );
}

#[test]
fn milestone_v03_overpass_estimates_end_to_end() {
    let platforms = load_platforms("data/scenarios/platforms.yaml").expect("platforms yaml");
    let mut landsat = platform::select(&platforms, Some("LANDSAT-8")).expect("platform");
    landsat.refresh(0.0);
    let state = landsat.state().expect("state");

    // A target on the other side of the planet falls back to the repeat cycle
    let far = intercept::hours_until_overhead(&state, GeoPoint::new(50.0, 50.0)).expect("far");
    assert_eq!(far, 384.0);

    // The point directly below the platform needs no wait at all
    let below = intercept::hours_until_overhead(&state, state.position).expect("below");
    assert_eq!(below, 0.0);
}

#[test]
#[ignore = "Milestone v0.4 pending"]
fn milestone_v04_closest_approach_refinement() {
    // TODO: refine sweep minima with a root-finding pass between grid samples once milestone v0.4 lands.
}

#[test]
#[ignore = "Milestone v0.5 pending"]
fn milestone_v05_swath_width_model() {
    // TODO: replace the fixed 20 km distance gate with a per-platform sensor swath once milestone v0.5 lands.
}
