//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use wayfinder_lib::{LocationGraph, World};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load a fixture world and build its graph.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> (World, LocationGraph) {
    let world = World::from_path(&fixtures_dir().join(name)).expect("fixture world loads");
    let graph = world.build_graph().expect("fixture graph builds");
    (world, graph)
}

/// The three-location graph used throughout the pathfinding tests:
/// A(1) -> B(2) time 2 danger 1, B -> C(3) time 3 danger 5, A -> C time 10 danger 0.
#[allow(dead_code)]
pub fn detour_graph() -> LocationGraph {
    let mut graph = LocationGraph::new();
    graph.add_edge(1, 2, 2, 1).expect("A -> B");
    graph.add_edge(2, 3, 3, 5).expect("B -> C");
    graph.add_edge(1, 3, 10, 0).expect("A -> C");
    graph
}
