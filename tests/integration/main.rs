//! Integration tests for Wayfinder
//!
//! These tests verify that the loader, locator, and server layers work
//! together over the sample dataset shipped in `data/`.

use std::path::Path;

use wayfinder_campus::CampusMap;

fn sample_map() -> CampusMap {
    CampusMap::load(
        Path::new("data/campus_buildings.csv"),
        Path::new("data/campus_paths.csv"),
    )
    .expect("sample dataset should load")
}

#[test]
fn sample_dataset_loads() {
    let map = sample_map();
    assert_eq!(map.building_names().len(), 7);
    assert!(map.short_name_exists("LIB"));
    assert_eq!(map.long_name_for("ENG").unwrap(), "Engineering Annex");
}

#[test]
fn routes_take_the_cafeteria_shortcut() {
    let map = sample_map();
    // LIB -> CAF -> SCI (340.0) beats both the direct walkway (360.0) and
    // the quad route through GYM (480.0).
    let path = map.find_shortest_path("LIB", "SCI").unwrap().unwrap();
    assert_eq!(path.cost(), 340.0);
    assert_eq!(path.edges().len(), 2);
}

#[test]
fn routes_are_symmetric_on_the_sample_data() {
    // Every sample segment is listed in both directions, so reversed
    // queries cost the same even though edges are directed.
    let map = sample_map();
    let there = map.find_shortest_path("ART", "ENG").unwrap().unwrap();
    let back = map.find_shortest_path("ENG", "ART").unwrap().unwrap();
    assert_eq!(there.cost(), back.cost());
}

#[test]
fn observatory_is_unreachable() {
    let map = sample_map();
    assert!(map.find_shortest_path("LIB", "OBS").unwrap().is_none());
}

#[tokio::test]
async fn server_constructs_over_sample_data() {
    use wayfinder_server::{ServerConfig, ServerState, WayfinderServer};

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0, // Let OS assign port
    };
    let server = WayfinderServer::new(sample_map(), config);
    let state: std::sync::Arc<ServerState> = server.state();
    assert!(state.map.short_name_exists("GYM"));
}
