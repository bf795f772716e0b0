use navgraph::{distance, extract, Cell, Endpoint, ExtractConfig, Graph, Point, WaypointIds};

fn cfg() -> ExtractConfig {
    ExtractConfig { waypoint_ids: WaypointIds::Derived, ..Default::default() }
}

fn pt(x: f64, y: f64) -> Point {
    Point { x, y }
}

fn edge_between<'a>(g: &'a Graph, a: &str, b: &str) -> Option<&'a navgraph::Edge> {
    g.edges
        .iter()
        .find(|e| (e.source == a && e.target == b) || (e.source == b && e.target == a))
}

#[test]
fn nodes_without_links_give_isolated_vertices() {
    let cells: Vec<Cell> = (0..5)
        .map(|i| {
            Cell::node(format!("n{i}"), i as f64 * 10.0, 0.0, Some(format!("obj{i}").as_str()))
        })
        .collect();
    let g = extract(&cells, &ExtractConfig::default());
    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.edge_count(), 0);
    let v = g.vertex("n3").expect("vertex");
    assert_eq!((v.x, v.y), (30.0, 0.0));
    assert_eq!(v.map_object_id.as_deref(), Some("obj3"));
}

#[test]
fn direct_link_weight_is_distance() {
    let cells = vec![
        Cell::node("a", 1.0, 2.0, Some("A")),
        Cell::node("b", 4.0, 6.0, Some("B")),
        Cell::link("l", Endpoint::cell("a"), Endpoint::cell("b"), vec![]),
    ];
    let g = extract(&cells, &cfg());
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 1);
    let e = &g.edges[0];
    assert_eq!((e.source.as_str(), e.target.as_str()), ("a", "b"));
    assert!((e.weight - distance(1.0, 2.0, 4.0, 6.0)).abs() < 1e-12);
    assert!((e.weight - 5.0).abs() < 1e-12);
    assert!(!e.to_next_floor);
}

#[test]
fn bend_points_become_a_chain_of_waypoints() {
    let bends = vec![pt(0.0, 10.0), pt(10.0, 10.0), pt(10.0, 20.0)];
    let cells = vec![
        Cell::node("a", 0.0, 0.0, Some("A")),
        Cell::node("b", 20.0, 20.0, Some("B")),
        Cell::link("l", Endpoint::cell("a"), Endpoint::cell("b"), bends.clone()),
    ];
    let g = extract(&cells, &ExtractConfig::default());
    assert_eq!(g.vertex_count(), 2 + bends.len());
    assert_eq!(g.edge_count(), bends.len() + 1);

    let waypoints: Vec<_> = g.vertices[2..].iter().collect();
    for (w, p) in waypoints.iter().zip(&bends) {
        assert!(w.map_object_id.is_none());
        assert_eq!(w.point(), *p);
    }
    // Consecutive edges share endpoints and walk from a to b.
    assert_eq!(g.edges[0].source, "a");
    for pair in g.edges.windows(2) {
        assert_eq!(pair[0].target, pair[1].source);
    }
    assert_eq!(g.edges.last().map(|e| e.target.as_str()), Some("b"));
    let total: f64 = g.edges.iter().map(|e| e.weight).sum();
    assert!((total - 40.0).abs() < 1e-9);
}

#[test]
fn random_waypoint_ids_are_unique() {
    let cells = vec![
        Cell::node("a", 0.0, 0.0, Some("A")),
        Cell::node("b", 5.0, 0.0, Some("B")),
        Cell::link(
            "l1",
            Endpoint::cell("a"),
            Endpoint::cell("b"),
            vec![pt(1.0, 1.0), pt(2.0, 1.0)],
        ),
        Cell::link("l2", Endpoint::cell("a"), Endpoint::cell("b"), vec![pt(1.0, -1.0)]),
    ];
    let g = extract(&cells, &ExtractConfig::default());
    let mut ids: Vec<_> = g.vertices.iter().map(|v| v.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn unresolved_links_are_skipped() {
    let cells = vec![
        Cell::node("a", 0.0, 0.0, Some("A")),
        Cell::node("unlabeled", 3.0, 0.0, None),
        Cell::link("l1", Endpoint::cell("a"), Endpoint::cell("ghost"), vec![pt(1.0, 1.0)]),
        Cell::link("l2", Endpoint::cell("a"), Endpoint::cell("unlabeled"), vec![]),
        Cell::link("l3", Endpoint::cell("a"), Endpoint::Point(pt(9.0, 9.0)), vec![]),
        Cell::Other { id: "img".into(), kind: "standard.Image".into() },
    ];
    let g = extract(&cells, &cfg());
    assert_eq!(g.vertex_count(), 1);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn links_of_other_types_do_not_participate() {
    let mut foreign = Cell::link("l", Endpoint::cell("a"), Endpoint::cell("b"), vec![]);
    if let Cell::Link(l) = &mut foreign {
        l.kind = "standard.Link".into();
    }
    let cells = vec![
        Cell::node("a", 0.0, 0.0, Some("A")),
        Cell::node("b", 1.0, 0.0, Some("B")),
        foreign,
    ];
    let g = extract(&cells, &cfg());
    assert_eq!(g.edge_count(), 0);
}

// a ----(50,0)---- b
//         |
//         c
#[test]
fn anchored_link_joins_existing_bend_point() {
    let cells = vec![
        Cell::node("a", 0.0, 0.0, Some("A")),
        Cell::node("b", 100.0, 0.0, Some("B")),
        Cell::node("c", 50.0, 100.0, Some("C")),
        Cell::link("corridor", Endpoint::cell("a"), Endpoint::cell("b"), vec![pt(50.0, 0.0)]),
        Cell::link("branch", Endpoint::cell("c"), Endpoint::anchor("corridor", 0), vec![]),
    ];
    let g = extract(&cells, &cfg());
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 3);
    let e = edge_between(&g, "c", "corridor#0").expect("branch edge");
    assert!((e.weight - 100.0).abs() < 1e-12);
}

#[test]
fn anchor_onto_skipped_link_synthesizes_junction() {
    let cells = vec![
        Cell::node("a", 0.0, 0.0, Some("A")),
        Cell::node("c", 50.0, 100.0, Some("C")),
        Cell::link("dangling", Endpoint::cell("a"), Endpoint::cell("ghost"), vec![pt(50.0, 0.0)]),
        Cell::link("branch", Endpoint::cell("c"), Endpoint::anchor("dangling", 0), vec![]),
    ];
    let g = extract(&cells, &cfg());
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 1);
    let junction = g.vertex("dangling#0").expect("junction");
    assert_eq!(junction.point(), pt(50.0, 0.0));
    assert!(junction.map_object_id.is_none());
}

#[test]
fn skipped_anchored_link_leaves_no_junction() {
    let cells = vec![
        Cell::node("a", 0.0, 0.0, Some("A")),
        Cell::link("dangling", Endpoint::cell("a"), Endpoint::cell("ghost"), vec![pt(50.0, 0.0)]),
        Cell::link("branch", Endpoint::cell("ghost2"), Endpoint::anchor("dangling", 0), vec![]),
        Cell::link("twig", Endpoint::anchor("dangling", 0), Endpoint::cell("ghost3"), vec![]),
    ];
    for config in [cfg(), ExtractConfig { coordinate_fallback: false, ..cfg() }] {
        let g = extract(&cells, &config);
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.vertices[0].id, "a");
        assert_eq!(g.edge_count(), 0);
    }
}

#[test]
fn anchor_falls_back_to_coordinate_match() {
    // The node sits exactly on the bend point of a link that never resolved,
    // so the only way to find it is by coordinate.
    let cells = vec![
        Cell::node("hub", 50.0, 0.0, Some("H")),
        Cell::node("c", 50.0, 100.0, Some("C")),
        Cell::link(
            "dangling",
            Endpoint::cell("ghost"),
            Endpoint::cell("ghost2"),
            vec![pt(50.0, 0.0)],
        ),
        Cell::link("branch", Endpoint::cell("c"), Endpoint::anchor("dangling", 0), vec![]),
    ];
    let g = extract(&cells, &cfg());
    assert_eq!(g.vertex_count(), 2);
    assert!(edge_between(&g, "c", "hub").is_some());

    let strict = ExtractConfig { coordinate_fallback: false, ..cfg() };
    let g = extract(&cells, &strict);
    assert_eq!(g.vertex_count(), 3);
    assert!(edge_between(&g, "c", "dangling#0").is_some());
}

#[test]
fn anchor_with_bad_index_or_unknown_link_is_skipped() {
    let cells = vec![
        Cell::node("a", 0.0, 0.0, Some("A")),
        Cell::node("b", 100.0, 0.0, Some("B")),
        Cell::node("c", 50.0, 100.0, Some("C")),
        Cell::link("corridor", Endpoint::cell("a"), Endpoint::cell("b"), vec![pt(50.0, 0.0)]),
        Cell::link("x", Endpoint::cell("c"), Endpoint::anchor("corridor", 7), vec![]),
        Cell::link("y", Endpoint::cell("c"), Endpoint::anchor("nowhere", 0), vec![]),
    ];
    let g = extract(&cells, &cfg());
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn chained_anchors_share_one_junction_regardless_of_order() {
    // d anchors onto the bend of `branch`, which itself anchors onto `corridor`.
    // `spur` comes first in cell order.
    let cells = vec![
        Cell::node("a", 0.0, 0.0, Some("A")),
        Cell::node("b", 100.0, 0.0, Some("B")),
        Cell::node("c", 50.0, 100.0, Some("C")),
        Cell::node("d", 0.0, 50.0, Some("D")),
        Cell::link("corridor", Endpoint::cell("a"), Endpoint::cell("b"), vec![pt(50.0, 0.0)]),
        Cell::link("spur", Endpoint::cell("d"), Endpoint::anchor("branch", 0), vec![]),
        Cell::link(
            "branch",
            Endpoint::cell("c"),
            Endpoint::anchor("corridor", 0),
            vec![pt(50.0, 50.0)],
        ),
    ];
    let g = extract(&cells, &cfg());
    assert_eq!(g.vertex_count(), 6);
    let at_junction: Vec<_> = g.vertices.iter().filter(|v| v.point() == pt(50.0, 50.0)).collect();
    assert_eq!(at_junction.len(), 1);
    assert_eq!(at_junction[0].id, "branch#0");
    assert!(edge_between(&g, "d", "branch#0").is_some());
    assert!(edge_between(&g, "c", "branch#0").is_some());
    assert!(edge_between(&g, "branch#0", "corridor#0").is_some());
}

#[test]
fn source_side_vertex_anchor_is_resolved() {
    let cells = vec![
        Cell::node("a", 0.0, 0.0, Some("A")),
        Cell::node("b", 100.0, 0.0, Some("B")),
        Cell::node("c", 50.0, 100.0, Some("C")),
        Cell::link("corridor", Endpoint::cell("a"), Endpoint::cell("b"), vec![pt(50.0, 0.0)]),
        Cell::link("branch", Endpoint::anchor("corridor", 0), Endpoint::cell("c"), vec![]),
    ];
    let g = extract(&cells, &cfg());
    let e = edge_between(&g, "corridor#0", "c").expect("edge");
    assert_eq!(e.source, "corridor#0");
}
