use serde::{Deserialize, Serialize};

pub const DEFAULT_NODE_TYPE: &str = "devs.Model";
pub const DEFAULT_LINK_TYPE: &str = "devs.Link";
pub const DEFAULT_ANCHOR_NAME: &str = "vertexAnchor";

/// How waypoints minted from bend points are named.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointIds {
    /// Fresh UUID v4 per waypoint.
    #[default]
    Random,
    /// `"{link_id}#{index}"`; reproducible across exports of the same diagram.
    Derived,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractConfig {
    /// Cell type tag that marks a way-point node.
    pub node_type: String,
    /// Cell type tag that marks a connection.
    pub link_type: String,
    /// Anchor name that attaches a link end to another link's bend point.
    pub anchor_name: String,
    /// Resolve anchors by exact coordinate when the `(link, index)` key is unknown.
    pub coordinate_fallback: bool,
    pub waypoint_ids: WaypointIds,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            node_type: DEFAULT_NODE_TYPE.to_string(),
            link_type: DEFAULT_LINK_TYPE.to_string(),
            anchor_name: DEFAULT_ANCHOR_NAME.to_string(),
            coordinate_fallback: true,
            waypoint_ids: WaypointIds::Random,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteOptions {
    /// Only walk floor-transition edges from source to target.
    pub directed_floor_links: bool,
    /// Floor-transition edges name map objects, not vertices. When set, an end
    /// that is not a vertex id is looked up by map object id instead; when
    /// clear (the default) such an end is a dead end.
    pub floor_targets_by_map_object: bool,
}
