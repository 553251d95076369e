mod common;

use wayfinder_lib::{
    check_connectivity, check_connectivity_sweep, is_reachable, validate_connectivity, Error,
    World,
};

use common::{detour_graph, load_fixture};

#[test]
fn fixture_world_is_connected_from_start() {
    let (world, graph) = load_fixture("world.json");
    let start = world.start.expect("fixture declares a start");

    assert!(validate_connectivity(&graph, start));
    let report = check_connectivity_sweep(&graph, start).unwrap();
    assert!(report.is_connected());
    assert_eq!(report.locations, 7);
}

#[test]
fn disconnected_world_identifies_first_unreachable() {
    let (world, graph) = load_fixture("world_disconnected.json");
    let start = world.start.unwrap();

    assert!(!validate_connectivity(&graph, start));
    let report = check_connectivity(&graph, start);
    assert_eq!(report.first_unreachable(), Some(8));
    assert_eq!(report.unreachable.len(), 1);
    assert_eq!(world.location_name(8), Some("Drowned Isle"));
}

#[test]
fn sweep_reports_every_unreachable_location() {
    let (world, graph) = load_fixture("world_disconnected.json");
    let report = check_connectivity_sweep(&graph, world.start.unwrap()).unwrap();

    assert_eq!(report.unreachable, vec![8, 9]);
}

#[test]
fn verdict_matches_pairwise_reachability() {
    for fixture in ["world.json", "world_disconnected.json"] {
        let (_, graph) = load_fixture(fixture);
        for start in graph.all_locations() {
            let expected = graph
                .all_locations()
                .into_iter()
                .all(|location| is_reachable(&graph, start, location));
            assert_eq!(validate_connectivity(&graph, start), expected);

            let sweep = check_connectivity_sweep(&graph, start).unwrap();
            for location in graph.all_locations() {
                assert_eq!(
                    sweep.unreachable.contains(&location),
                    !is_reachable(&graph, start, location),
                    "start {start}, location {location}"
                );
            }
        }
    }
}

#[test]
fn one_way_graph_is_only_connected_from_its_source() {
    let graph = detour_graph();

    assert!(validate_connectivity(&graph, 1));
    assert!(!validate_connectivity(&graph, 3));
    assert_eq!(check_connectivity(&graph, 2).first_unreachable(), Some(1));
}

const HERMIT_WORLD: &str = r#"{
    "start": 1,
    "locations": [
        { "id": 1, "name": "Forgotten Graveyard" },
        { "id": 2, "name": "Ashbrook Village" },
        { "id": 10, "name": "Hermit Hut" }
    ],
    "connections": [ { "from": 1, "to": 2, "travel_time": 2, "danger": 10 } ]
}"#;

#[test]
fn location_without_connections_is_unreachable_at_world_level() {
    let world = World::from_json_str(HERMIT_WORLD).unwrap();
    let graph = world.build_graph().unwrap();

    // The graph alone never registers the hut.
    assert!(check_connectivity_sweep(&graph, 1).unwrap().is_connected());

    let report = world.check_connectivity(&graph, 1).unwrap();
    assert_eq!(report.locations, 3);
    assert_eq!(report.unreachable, vec![10]);
}

#[test]
fn isolated_start_reaches_nothing_else() {
    let world = World::from_json_str(HERMIT_WORLD).unwrap();
    let graph = world.build_graph().unwrap();

    let report = world.check_connectivity(&graph, 10).unwrap();
    assert_eq!(report.locations, 3);
    assert_eq!(report.unreachable, vec![1, 2]);
}

#[test]
fn fully_placed_world_matches_graph_sweep() {
    let (world, graph) = load_fixture("world_disconnected.json");
    let start = world.start.unwrap();

    assert_eq!(
        world.check_connectivity(&graph, start).unwrap(),
        check_connectivity_sweep(&graph, start).unwrap()
    );
}

#[test]
fn connection_to_undeclared_location_is_rejected() {
    let raw = r#"{
        "locations": [ { "id": 1, "name": "Forgotten Graveyard" }, { "id": 2, "name": "Ashbrook Village" } ],
        "connections": [
            { "from": 1, "to": 2, "travel_time": 2 },
            { "from": 2, "to": 77, "travel_time": 1 }
        ]
    }"#;

    let err = World::from_json_str(raw).unwrap_err();
    assert!(matches!(err, Error::UnknownConnectionEndpoint { index: 1, id: 77 }));
    assert_eq!(
        err.to_string(),
        "connection #1 in world data references undeclared location 77"
    );
}
