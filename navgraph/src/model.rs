use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A routable point. Vertices discovered from diagram nodes carry the id of the
/// map object they stand for; waypoints minted from bend points do not.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vertex {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_object_id: Option<String>,
}

impl Vertex {
    pub fn waypoint(id: impl Into<String>, p: Point) -> Self {
        Vertex { id: id.into(), x: p.x, y: p.y, map_object_id: None }
    }

    #[inline]
    pub fn point(&self) -> Point {
        Point { x: self.x, y: self.y }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Weighted connection between two vertex ids. Traversable both ways unless the
/// router is told to treat floor links as directed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub to_next_floor: bool,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Edge { source: source.into(), target: target.into(), weight, to_next_floor: false }
    }

    pub fn floor_link(source: impl Into<String>, target: impl Into<String>) -> Self {
        Edge { source: source.into(), target: target.into(), weight: 0.0, to_next_floor: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapObjectType {
    Room,
    Toilet,
    Canteen,
    Atm,
    Stairs,
    Lecture,
    Elevator,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapObject {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MapObjectType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapComponent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MapObjectType,
    pub use_inner_text_as_name: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default)]
    pub components: Vec<MapComponent>,
    #[serde(default)]
    pub objects: Vec<MapObject>,
}

impl MapConfig {
    pub fn object_by_name(&self, name: &str) -> Option<&MapObject> {
        self.objects.iter().find(|o| o.name == name)
    }
}

/// Hand-authored floor transition: the map object `from_id` leads to each of
/// `to_ids` (same stair or elevator on other floors).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StairsRef {
    pub from_id: String,
    pub to_ids: Vec<String>,
}
