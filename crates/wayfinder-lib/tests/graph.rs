use wayfinder_lib::{Error, LocationGraph};

#[test]
fn new_graph_is_empty() {
    let graph = LocationGraph::new();

    assert_eq!(graph.edge_count(), 0);
    assert!(graph.all_locations().is_empty());
    assert!(graph.neighbours(1).is_empty());
}

#[test]
fn bidirectional_edge_registers_both_directions() {
    let mut graph = LocationGraph::new();
    graph.add_bidirectional_edge(1, 2, 2, 30).expect("add");

    assert_eq!(graph.edge_count(), 2);
    assert!(graph.has_edge(1, 2));
    assert!(graph.has_edge(2, 1));
    let back = graph.get_edge(2, 1).expect("reverse edge");
    assert_eq!((back.from, back.to), (2, 1));
    assert_eq!(back.travel_time_hours, 2);
    assert_eq!(back.danger_level, 30);
}

#[test]
fn zero_weight_bidirectional_registers_nothing() {
    let mut graph = LocationGraph::new();

    let err = graph.add_bidirectional_edge(1, 2, 0, 5).unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { from: 1, to: 2 }));
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_empty());
}

#[test]
fn neighbours_are_newest_first_and_keep_duplicates() {
    let mut graph = LocationGraph::new();
    graph.add_edge(1, 2, 1, 0).unwrap();
    graph.add_edge(1, 3, 1, 0).unwrap();
    graph.add_edge(1, 2, 4, 0).unwrap();

    assert_eq!(graph.neighbours(1), vec![2, 3, 2]);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn re_registering_an_edge_returns_latest_weight() {
    let mut graph = LocationGraph::new();
    graph.add_edge(4, 5, 3, 10).unwrap();
    graph.add_edge(4, 5, 7, 12).unwrap();

    let edge = graph.get_edge(4, 5).expect("edge present");
    assert_eq!(edge.travel_time_hours, 7);
    assert_eq!(edge.danger_level, 12);
}

#[test]
fn locations_keep_registration_order_without_duplicates() {
    let mut graph = LocationGraph::new();
    graph.add_edge(10, 3, 1, 0).unwrap();
    graph.add_edge(3, 10, 1, 0).unwrap();
    graph.add_edge(7, 3, 1, 0).unwrap();

    assert_eq!(graph.all_locations(), vec![10, 3, 7]);
    assert_eq!(graph.location_count(), 3);
}

#[test]
fn unlock_requirement_is_recorded_on_edge() {
    let mut graph = LocationGraph::new();
    graph.add_edge(1, 2, 2, 0).unwrap();
    assert!(!graph.get_edge(1, 2).unwrap().requires_unlock());

    graph.set_unlock_requirement(1, 2, "quest_ferryman").unwrap();
    let edge = graph.get_edge(1, 2).unwrap();
    assert!(edge.requires_unlock());
    assert_eq!(edge.unlock_requirement.as_deref(), Some("quest_ferryman"));
}

#[test]
fn unlock_requirement_needs_existing_edge() {
    let mut graph = LocationGraph::new();
    graph.add_edge(1, 2, 2, 0).unwrap();

    let err = graph.set_unlock_requirement(1, 3, "x").unwrap_err();
    assert!(matches!(err, Error::EdgeNotFound { from: 1, to: 3 }));
    assert_eq!(err.to_string(), "no connection from 1 to 3");
}
