//! Diagram → routable graph.
//!
//! Extraction runs in three passes over the cell list, always in cell order:
//! vertex discovery from nodes, direct links between two nodes, then links
//! with an end attached to another link's bend point (vertex anchors). Anything
//! that does not resolve is skipped; extraction never fails.

use crate::config::{ExtractConfig, WaypointIds};
use crate::diagram::{Cell, Endpoint, LinkCell};
use crate::geometry::math::{point_distance, same_point};
use crate::model::{Edge, Point, StairsRef, Vertex};
use crate::Graph;
use std::collections::HashMap;

/// Build the graph for one diagram snapshot.
pub fn extract(cells: &[Cell], cfg: &ExtractConfig) -> Graph {
    let mut b = Builder::new(cells, cfg);
    b.discover_vertices(cells);
    let (direct, anchored) = b.partition_links(cells);
    for link in direct {
        b.connect_direct(link);
    }
    for link in anchored {
        b.connect_anchored(link);
    }
    let g = Graph { vertices: b.vertices, edges: b.edges };
    log::debug!(
        "graph extracted with {} vertices and {} edges",
        g.vertices.len(),
        g.edges.len()
    );
    g
}

/// Extraction followed by floor-link augmentation: the full export pipeline.
pub fn generate_graph(cells: &[Cell], stairs: &[StairsRef], cfg: &ExtractConfig) -> Graph {
    crate::algorithms::floors::augment(extract(cells, cfg), stairs)
}

// An anchored end before anything is minted for it.
#[derive(Clone, Copy)]
enum End<'a> {
    Vertex(usize),
    Bend { key: (&'a str, usize), at: Point },
}

struct Builder<'a> {
    cfg: &'a ExtractConfig,
    // Every link on the canvas by id, for anchor lookups.
    links: HashMap<&'a str, &'a LinkCell>,
    vertices: Vec<Vertex>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    // (link id, bend index) -> vertex holding that bend point
    bends: HashMap<(&'a str, usize), usize>,
}

impl<'a> Builder<'a> {
    fn new(cells: &'a [Cell], cfg: &'a ExtractConfig) -> Self {
        let links = cells
            .iter()
            .filter_map(|c| match c {
                Cell::Link(l) => Some((l.id.as_str(), l)),
                _ => None,
            })
            .collect();
        Builder {
            cfg,
            links,
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            bends: HashMap::new(),
        }
    }

    fn push_vertex(&mut self, v: Vertex) -> usize {
        let idx = self.vertices.len();
        self.index.insert(v.id.clone(), idx);
        self.vertices.push(v);
        idx
    }

    fn discover_vertices(&mut self, cells: &'a [Cell]) {
        for cell in cells {
            let Cell::Node(n) = cell else { continue };
            if n.kind != self.cfg.node_type {
                continue;
            }
            let Some(label) = n.label.as_deref().filter(|l| !l.is_empty()) else {
                continue;
            };
            if self.index.contains_key(&n.id) {
                log::debug!("duplicate node id {}, keeping the first", n.id);
                continue;
            }
            self.push_vertex(Vertex {
                id: n.id.clone(),
                x: n.position.x,
                y: n.position.y,
                map_object_id: Some(label.to_string()),
            });
        }
    }

    fn is_vertex_anchor(&self, e: &Endpoint) -> bool {
        matches!(e, Endpoint::Anchor { name, .. } if *name == self.cfg.anchor_name)
    }

    fn partition_links(&self, cells: &'a [Cell]) -> (Vec<&'a LinkCell>, Vec<&'a LinkCell>) {
        let mut direct = Vec::new();
        let mut anchored = Vec::new();
        for cell in cells {
            let Cell::Link(l) = cell else { continue };
            if l.kind != self.cfg.link_type {
                continue;
            }
            if self.is_vertex_anchor(&l.source) || self.is_vertex_anchor(&l.target) {
                anchored.push(l);
            } else {
                direct.push(l);
            }
        }
        (direct, anchored)
    }

    // Plain reference: the endpoint names a vertex id directly. Anchors that are
    // not vertex anchors (node-side anchors) still point at their cell.
    fn resolve_plain(&self, e: &Endpoint) -> Option<usize> {
        e.referenced_id().and_then(|id| self.index.get(id).copied())
    }

    fn connect_direct(&mut self, link: &'a LinkCell) {
        match (self.resolve_plain(&link.source), self.resolve_plain(&link.target)) {
            (Some(s), Some(t)) => self.emit_chain(link, s, t),
            _ => log::trace!("link {} skipped: endpoint not a vertex", link.id),
        }
    }

    fn connect_anchored(&mut self, link: &'a LinkCell) {
        // Resolve both ends before minting anything so a skipped link leaves no vertices behind.
        match (self.resolve_end(&link.source), self.resolve_end(&link.target)) {
            (Some(s), Some(t)) => {
                let s = self.materialize(s);
                let t = self.materialize(t);
                self.emit_chain(link, s, t);
            }
            _ => log::trace!("anchored link {} skipped: endpoint unresolved", link.id),
        }
    }

    fn resolve_end(&self, e: &'a Endpoint) -> Option<End<'a>> {
        match e {
            Endpoint::Anchor { link_id, index, name } if *name == self.cfg.anchor_name => {
                self.resolve_anchor(link_id, *index)
            }
            other => self.resolve_plain(other).map(End::Vertex),
        }
    }

    fn resolve_anchor(&self, link_id: &'a str, index: usize) -> Option<End<'a>> {
        if let Some(&v) = self.bends.get(&(link_id, index)) {
            return Some(End::Vertex(v));
        }
        match self.links.get(link_id).and_then(|l| l.vertices.get(index)) {
            Some(&at) => Some(End::Bend { key: (link_id, index), at }),
            // Unknown link or index past its bend points: fall back to the raw id.
            None => self.index.get(link_id).copied().map(End::Vertex),
        }
    }

    fn materialize(&mut self, end: End<'a>) -> usize {
        let (key, at) = match end {
            End::Vertex(v) => return v,
            End::Bend { key, at } => (key, at),
        };
        if let Some(&v) = self.bends.get(&key) {
            return v;
        }
        let found = if self.cfg.coordinate_fallback {
            self.vertices.iter().position(|v| same_point(v.point(), at))
        } else {
            None
        };
        let v = match found {
            Some(v) => v,
            None => {
                let id = self.mint_id(key.0, key.1);
                log::trace!("synthesized junction at ({}, {}) for {}#{}", at.x, at.y, key.0, key.1);
                self.push_vertex(Vertex::waypoint(id, at))
            }
        };
        self.bends.insert(key, v);
        v
    }

    fn mint_id(&self, link_id: &str, index: usize) -> String {
        if self.cfg.waypoint_ids == WaypointIds::Derived {
            let id = format!("{link_id}#{index}");
            if !self.index.contains_key(&id) {
                return id;
            }
        }
        uuid::Uuid::new_v4().to_string()
    }

    fn waypoint(&mut self, link: &'a LinkCell, i: usize, p: Point) -> usize {
        if let Some(&v) = self.bends.get(&(link.id.as_str(), i)) {
            return v;
        }
        let id = self.mint_id(&link.id, i);
        let v = self.push_vertex(Vertex::waypoint(id, p));
        self.bends.insert((link.id.as_str(), i), v);
        v
    }

    fn emit_chain(&mut self, link: &'a LinkCell, source: usize, target: usize) {
        let mut chain = Vec::with_capacity(link.vertices.len() + 2);
        chain.push(source);
        for (i, p) in link.vertices.iter().enumerate() {
            chain.push(self.waypoint(link, i, *p));
        }
        chain.push(target);
        for pair in chain.windows(2) {
            let (a, b) = (&self.vertices[pair[0]], &self.vertices[pair[1]]);
            let weight = point_distance(a.point(), b.point());
            self.edges.push(Edge::new(a.id.clone(), b.id.clone(), weight));
        }
    }
}
