//! Routable navigation graphs for indoor maps.
//!
//! A floorplan is annotated on a diagram canvas with way-point nodes and links.
//! This crate turns that diagram into a weighted [`Graph`], stitches floors
//! together from hand-declared stair/elevator references, finds shortest routes
//! between named locations, and reads/writes the JSON documents the authoring
//! tool exchanges.

pub mod config;
pub mod diagram;
pub mod error;
pub mod jointjs;
pub mod json;
pub mod model;
pub mod geometry {
    pub mod limits;
    pub mod math;
}
pub mod algorithms {
    pub mod extract;
    pub mod floors;
    pub mod route;
}

pub use algorithms::extract::{extract, generate_graph};
pub use algorithms::floors::augment;
pub use algorithms::route::{route, Route, Router};
pub use config::{ExtractConfig, RouteOptions, WaypointIds};
pub use diagram::{Cell, Endpoint};
pub use error::{CodecError, RouteError};
pub use geometry::math::distance;
pub use model::{
    Edge, MapComponent, MapConfig, MapObject, MapObjectType, Point, StairsRef, Vertex,
};

/// Vertices and weighted edges of one export. Vertex ids are unique; parallel
/// edges are allowed and edges may name vertices that live on other floors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    /// First vertex standing for map object `id`.
    pub fn vertex_by_map_object(&self, id: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.map_object_id.as_deref() == Some(id))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // JSON
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_value_impl(self)
    }
    pub fn to_json_string(&self) -> Result<String, CodecError> {
        json::to_json_string_impl(self, false)
    }
    pub fn to_json_string_pretty(&self) -> Result<String, CodecError> {
        json::to_json_string_impl(self, true)
    }
    pub fn from_json_value(v: serde_json::Value) -> Result<Graph, CodecError> {
        json::from_json_value_impl(v)
    }
    pub fn from_json_str(s: &str) -> Result<Graph, CodecError> {
        json::from_json_str_impl(s)
    }
}
