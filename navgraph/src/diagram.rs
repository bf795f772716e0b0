//! Widget-independent view of the authoring canvas.
//!
//! The canvas owns its own element and link objects; the boundary adapter
//! ([`crate::jointjs`]) flattens them into [`Cell`] values so that extraction only
//! ever sees plain data.

use crate::model::Point;

/// Where one end of a link is attached.
#[derive(Clone, Debug, PartialEq)]
pub enum Endpoint {
    /// Attached to a cell (normally a node) by id.
    Cell { id: String },
    /// Attached through a named anchor with an index argument. With the vertex
    /// anchor name this is the bend point at `index` of the link `link_id`.
    Anchor { link_id: String, index: usize, name: String },
    /// Dangling end dropped on empty canvas.
    Point(Point),
}

impl Endpoint {
    pub fn cell(id: impl Into<String>) -> Self {
        Endpoint::Cell { id: id.into() }
    }

    /// Vertex anchor onto bend point `index` of `link_id`.
    pub fn anchor(link_id: impl Into<String>, index: usize) -> Self {
        Endpoint::Anchor {
            link_id: link_id.into(),
            index,
            name: crate::config::DEFAULT_ANCHOR_NAME.to_string(),
        }
    }

    /// Id the canvas stores for this end, whether it names a node or a link.
    pub fn referenced_id(&self) -> Option<&str> {
        match self {
            Endpoint::Cell { id } => Some(id),
            Endpoint::Anchor { link_id, .. } => Some(link_id),
            Endpoint::Point(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeCell {
    pub id: String,
    /// Raw type tag, e.g. `devs.Model`.
    pub kind: String,
    pub position: Point,
    /// Text bound to the node's id label: the map object this node stands for.
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkCell {
    pub id: String,
    /// Raw type tag, e.g. `devs.Link`.
    pub kind: String,
    pub source: Endpoint,
    pub target: Endpoint,
    pub vertices: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Node(NodeCell),
    Link(LinkCell),
    /// Anything else on the canvas (images, text, groups).
    Other { id: String, kind: String },
}

impl Cell {
    pub fn node(id: impl Into<String>, x: f64, y: f64, label: Option<&str>) -> Self {
        Cell::Node(NodeCell {
            id: id.into(),
            kind: crate::config::DEFAULT_NODE_TYPE.to_string(),
            position: Point { x, y },
            label: label.map(str::to_string),
        })
    }

    pub fn link(
        id: impl Into<String>,
        source: Endpoint,
        target: Endpoint,
        vertices: Vec<Point>,
    ) -> Self {
        Cell::Link(LinkCell {
            id: id.into(),
            kind: crate::config::DEFAULT_LINK_TYPE.to_string(),
            source,
            target,
            vertices,
        })
    }

    pub fn id(&self) -> &str {
        match self {
            Cell::Node(n) => &n.id,
            Cell::Link(l) => &l.id,
            Cell::Other { id, .. } => id,
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Cell::Node(n) => &n.kind,
            Cell::Link(l) => &l.kind,
            Cell::Other { kind, .. } => kind,
        }
    }
}
