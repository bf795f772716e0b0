//! Shortest route between two named locations.
//!
//! Dijkstra over a binary heap keyed by `(distance, vertex position)`: among
//! equally distant candidates the vertex listed first in `Graph::vertices` is
//! expanded first, and relaxation only replaces a predecessor on a strictly
//! shorter distance. Together with adjacency lists kept in edge order this
//! makes the chosen path a pure function of the graph.

use crate::config::RouteOptions;
use crate::error::RouteError;
use crate::model::{MapConfig, MapObject, Vertex};
use crate::Graph;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub vertices: Vec<Vertex>,
    /// Sum of edge weights along the route.
    pub distance: f64,
}

impl Route {
    pub fn ids(&self) -> Vec<&str> {
        self.vertices.iter().map(|v| v.id.as_str()).collect()
    }
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    dist: f64,
    idx: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

// Reversed so the max-heap pops the nearest, then the earliest listed vertex.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Precomputed adjacency for one graph; answers any number of queries.
pub struct Router<'g> {
    graph: &'g Graph,
    index: HashMap<&'g str, usize>,
    adj: Vec<Vec<(usize, f64)>>,
}

impl<'g> Router<'g> {
    pub fn new(graph: &'g Graph, opts: RouteOptions) -> Self {
        let mut index = HashMap::with_capacity(graph.vertices.len());
        for (i, v) in graph.vertices.iter().enumerate() {
            index.entry(v.id.as_str()).or_insert(i);
        }
        let mut by_object: HashMap<&str, usize> = HashMap::new();
        if opts.floor_targets_by_map_object {
            for (i, v) in graph.vertices.iter().enumerate() {
                if let Some(m) = v.map_object_id.as_deref() {
                    by_object.entry(m).or_insert(i);
                }
            }
        }
        let resolve = |id: &str, floor: bool| {
            index
                .get(id)
                .or_else(|| if floor { by_object.get(id) } else { None })
                .copied()
        };
        let mut adj = vec![Vec::new(); graph.vertices.len()];
        let mut dead_ends = 0usize;
        for e in &graph.edges {
            let (Some(s), Some(t)) = (
                resolve(&e.source, e.to_next_floor),
                resolve(&e.target, e.to_next_floor),
            ) else {
                // Floor links usually point at another floor that is not loaded.
                dead_ends += 1;
                continue;
            };
            adj[s].push((t, e.weight));
            if !(opts.directed_floor_links && e.to_next_floor) {
                adj[t].push((s, e.weight));
            }
        }
        if dead_ends > 0 {
            log::debug!("{} edges reference vertices outside this graph", dead_ends);
        }
        Router { graph, index, adj }
    }

    // First vertex bound to `object`, reported under the name the caller asked for.
    fn locate(&self, name: &str, object: Option<&MapObject>) -> Result<usize, RouteError> {
        object
            .and_then(|o| {
                self.graph
                    .vertices
                    .iter()
                    .position(|v| v.map_object_id.as_deref() == Some(o.id.as_str()))
            })
            .ok_or_else(|| RouteError::UnknownLocation { name: name.to_string() })
    }

    /// Route between two map objects given by display name.
    pub fn route(
        &self,
        start_name: &str,
        end_name: &str,
        objects: &[MapObject],
    ) -> Result<Route, RouteError> {
        if self.graph.vertices.is_empty() {
            return Err(RouteError::EmptyGraph);
        }
        let named = |name: &str| objects.iter().find(|o| o.name == name);
        let start = self.locate(start_name, named(start_name))?;
        let end = self.locate(end_name, named(end_name))?;
        self.search(start, end)
    }

    /// Same as [`Router::route`], with names looked up in a map configuration.
    pub fn route_in(
        &self,
        start_name: &str,
        end_name: &str,
        config: &MapConfig,
    ) -> Result<Route, RouteError> {
        if self.graph.vertices.is_empty() {
            return Err(RouteError::EmptyGraph);
        }
        let start = self.locate(start_name, config.object_by_name(start_name))?;
        let end = self.locate(end_name, config.object_by_name(end_name))?;
        self.search(start, end)
    }

    /// Route between two vertices given by id.
    pub fn shortest_path(&self, start_id: &str, end_id: &str) -> Result<Route, RouteError> {
        if self.graph.vertices.is_empty() {
            return Err(RouteError::EmptyGraph);
        }
        let lookup = |id: &str| {
            self.index
                .get(id)
                .copied()
                .ok_or_else(|| RouteError::UnknownLocation { name: id.to_string() })
        };
        self.search(lookup(start_id)?, lookup(end_id)?)
    }

    fn search(&self, start: usize, end: usize) -> Result<Route, RouteError> {
        let n = self.graph.vertices.len();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut done = vec![false; n];
        let mut heap = BinaryHeap::new();
        dist[start] = 0.0;
        heap.push(Entry { dist: 0.0, idx: start });

        while let Some(Entry { dist: d, idx: u }) = heap.pop() {
            if done[u] {
                continue;
            }
            done[u] = true;
            if u == end {
                break;
            }
            for &(v, w) in &self.adj[u] {
                let alt = d + w;
                if alt < dist[v] {
                    dist[v] = alt;
                    prev[v] = Some(u);
                    heap.push(Entry { dist: alt, idx: v });
                }
            }
        }

        if !dist[end].is_finite() {
            return Err(RouteError::Unreachable);
        }
        let mut path = vec![end];
        let mut cur = end;
        while let Some(p) = prev[cur] {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Ok(Route {
            vertices: path.into_iter().map(|i| self.graph.vertices[i].clone()).collect(),
            distance: dist[end],
        })
    }
}

/// One-shot query: resolve both names and run Dijkstra over `graph`.
pub fn route(
    graph: &Graph,
    start_name: &str,
    end_name: &str,
    objects: &[MapObject],
    opts: RouteOptions,
) -> Result<Route, RouteError> {
    Router::new(graph, opts).route(start_name, end_name, objects)
}
