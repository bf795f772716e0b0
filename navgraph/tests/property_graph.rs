use navgraph::{
    distance, extract, Cell, Endpoint, ExtractConfig, Graph, MapObject, MapObjectType, Point,
    RouteError, RouteOptions, Router, WaypointIds,
};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct LinkShape {
    a: usize,
    b: usize,
    bends: Vec<(i16, i16)>,
}

#[derive(Clone, Debug)]
struct DiagramShape {
    nodes: Vec<(i16, i16)>,
    links: Vec<LinkShape>,
}

fn diagram_strategy() -> impl Strategy<Value = DiagramShape> {
    prop::collection::vec((any::<i16>(), any::<i16>()), 1..12).prop_flat_map(|nodes| {
        let n = nodes.len();
        let link = (0..n, 0..n, prop::collection::vec((any::<i16>(), any::<i16>()), 0..4))
            .prop_map(|(a, b, bends)| LinkShape { a, b, bends });
        (Just(nodes), prop::collection::vec(link, 0..16))
            .prop_map(|(nodes, links)| DiagramShape { nodes, links })
    })
}

fn build_cells(layout: &DiagramShape) -> Vec<Cell> {
    let mut cells: Vec<Cell> = layout
        .nodes
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            Cell::node(format!("n{i}"), x as f64, y as f64, Some(format!("obj{i}").as_str()))
        })
        .collect();
    for (i, l) in layout.links.iter().enumerate() {
        let bends = l.bends.iter().map(|&(x, y)| Point { x: x as f64, y: y as f64 }).collect();
        cells.push(Cell::link(
            format!("l{i}"),
            Endpoint::cell(format!("n{}", l.a)),
            Endpoint::cell(format!("n{}", l.b)),
            bends,
        ));
    }
    cells
}

fn cfg() -> ExtractConfig {
    ExtractConfig { waypoint_ids: WaypointIds::Derived, ..Default::default() }
}

// All-pairs reference distances over the undirected view of `g`.
fn floyd_warshall(g: &Graph) -> Vec<Vec<f64>> {
    let n = g.vertices.len();
    let idx: HashMap<&str, usize> =
        g.vertices.iter().enumerate().map(|(i, v)| (v.id.as_str(), i)).collect();
    let mut d = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in d.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for e in &g.edges {
        let (s, t) = (idx[e.source.as_str()], idx[e.target.as_str()]);
        d[s][t] = d[s][t].min(e.weight);
        d[t][s] = d[t][s].min(e.weight);
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via = d[i][k] + d[k][j];
                if via < d[i][j] {
                    d[i][j] = via;
                }
            }
        }
    }
    d
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn extraction_counts_and_weights(layout in diagram_strategy()) {
        let g = extract(&build_cells(&layout), &cfg());
        let bends: usize = layout.links.iter().map(|l| l.bends.len()).sum();
        prop_assert_eq!(g.vertex_count(), layout.nodes.len() + bends);
        prop_assert_eq!(g.edge_count(), layout.links.len() + bends);
        prop_assert!(g.vertices[layout.nodes.len()..].iter().all(|v| v.map_object_id.is_none()));
        for e in &g.edges {
            let (a, b) = (g.vertex(&e.source).unwrap(), g.vertex(&e.target).unwrap());
            prop_assert_eq!(e.weight, distance(a.x, a.y, b.x, b.y));
        }
    }

    #[test]
    fn json_roundtrip_is_identity(layout in diagram_strategy()) {
        let g = extract(&build_cells(&layout), &cfg());
        let back = Graph::from_json_value(g.to_json_value()).unwrap();
        prop_assert_eq!(&back, &g);
        let back = Graph::from_json_str(&g.to_json_string().unwrap()).unwrap();
        prop_assert_eq!(back, g);
    }

    #[test]
    fn routes_are_optimal_and_stable(
        layout in diagram_strategy(),
        s in any::<prop::sample::Index>(),
        t in any::<prop::sample::Index>(),
    ) {
        let g = extract(&build_cells(&layout), &cfg());
        let n = layout.nodes.len();
        let (s, t) = (s.index(n), t.index(n));
        let objects: Vec<MapObject> = (0..n)
            .map(|i| MapObject {
                id: format!("obj{i}"),
                kind: MapObjectType::Room,
                name: format!("room {i}"),
                description: None,
            })
            .collect();
        let router = Router::new(&g, RouteOptions::default());
        let first = router.route(&format!("room {s}"), &format!("room {t}"), &objects);
        let again = router.route(&format!("room {s}"), &format!("room {t}"), &objects);
        prop_assert_eq!(&first, &again);

        let reference = floyd_warshall(&g)[s][t];
        match first {
            Ok(r) => {
                prop_assert!((r.distance - reference).abs() <= 1e-6 * (1.0 + reference));
                prop_assert_eq!(r.vertices.first().map(|v| v.id.clone()), Some(format!("n{s}")));
                prop_assert_eq!(r.vertices.last().map(|v| v.id.clone()), Some(format!("n{t}")));
                // Consecutive route vertices are joined by an edge.
                for pair in r.vertices.windows(2) {
                    let joined = g.edges.iter().any(|e| {
                        (e.source == pair[0].id && e.target == pair[1].id)
                            || (e.source == pair[1].id && e.target == pair[0].id)
                    });
                    prop_assert!(joined);
                }
            }
            Err(e) => {
                prop_assert_eq!(e, RouteError::Unreachable);
                prop_assert!(reference.is_infinite());
            }
        }
    }
}
