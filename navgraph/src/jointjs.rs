//! Adapter from the canvas's JointJS graph export (`{ "cells": [...] }`) to the
//! plain [`Cell`] model.
//!
//! Only the fields extraction needs are read; everything else on a cell
//! (markup, ports, styling) is ignored. Cells are classified by shape: anything
//! with a `source`/`target` is a link, anything with a `position` is a node.

use crate::diagram::{Cell, Endpoint, LinkCell, NodeCell};
use crate::error::CodecError;
use crate::geometry::limits;
use crate::model::Point;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct RawAnchorArgs {
    index: Option<usize>,
}

#[derive(Deserialize)]
struct RawAnchor {
    name: String,
    args: Option<RawAnchorArgs>,
}

#[derive(Deserialize)]
struct RawEnd {
    id: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    anchor: Option<RawAnchor>,
}

#[derive(Deserialize)]
struct RawCell {
    id: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    position: Option<Point>,
    attrs: Option<Value>,
    source: Option<RawEnd>,
    target: Option<RawEnd>,
    vertices: Option<Vec<Point>>,
}

// `attrs[".id"].text`: the map object id bound to a way-point node.
fn label_of(attrs: Option<&Value>) -> Option<String> {
    match attrs?.get(".id")?.get("text")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn endpoint_of(end: RawEnd) -> Endpoint {
    match (end.id, end.anchor) {
        (Some(id), Some(RawAnchor { name, args: Some(RawAnchorArgs { index: Some(index) }) })) => {
            Endpoint::Anchor { link_id: id, index, name }
        }
        (Some(id), _) => Endpoint::Cell { id },
        (None, _) => Endpoint::Point(Point { x: end.x.unwrap_or(0.0), y: end.y.unwrap_or(0.0) }),
    }
}

fn check_point(p: &Point, what: &str) -> Result<(), CodecError> {
    if limits::in_coord_bounds(p.x) && limits::in_coord_bounds(p.y) {
        Ok(())
    } else {
        Err(CodecError::OutOfBounds(what.to_string()))
    }
}

/// Translate a JointJS graph document into cells. A document without a
/// `cells` array is rejected; individual cells that fail to parse make the
/// whole document malformed.
pub fn cells_from_value(v: Value) -> Result<Vec<Cell>, CodecError> {
    let Value::Object(mut doc) = v else {
        return Err(CodecError::InvalidStructure("diagram document is not an object".into()));
    };
    let cells = match doc.remove("cells") {
        Some(c @ Value::Array(_)) => c,
        _ => return Err(CodecError::InvalidStructure("missing 'cells' array".into())),
    };
    let raw: Vec<RawCell> = serde_json::from_value(cells)?;
    if raw.len() > limits::MAX_CELLS {
        return Err(CodecError::CapsExceeded { what: "cells", limit: limits::MAX_CELLS });
    }
    let mut bends_total = 0usize;
    let mut out = Vec::with_capacity(raw.len());
    for c in raw {
        // Untyped records never participate in extraction.
        let Some(kind) = c.kind else {
            out.push(Cell::Other { id: c.id, kind: String::new() });
            continue;
        };
        let cell = match (c.source, c.target, c.position) {
            (Some(source), Some(target), _) => {
                let vertices = c.vertices.unwrap_or_default();
                if vertices.len() > limits::MAX_BEND_POINTS_PER_LINK {
                    return Err(CodecError::CapsExceeded {
                        what: "bend points per link",
                        limit: limits::MAX_BEND_POINTS_PER_LINK,
                    });
                }
                bends_total += vertices.len();
                if bends_total > limits::MAX_BEND_POINTS_TOTAL {
                    return Err(CodecError::CapsExceeded {
                        what: "bend points",
                        limit: limits::MAX_BEND_POINTS_TOTAL,
                    });
                }
                for p in &vertices {
                    check_point(p, &format!("bend point of link {}", c.id))?;
                }
                Cell::Link(LinkCell {
                    id: c.id,
                    kind,
                    source: endpoint_of(source),
                    target: endpoint_of(target),
                    vertices,
                })
            }
            (_, _, Some(position)) => {
                check_point(&position, &format!("position of node {}", c.id))?;
                Cell::Node(NodeCell {
                    label: label_of(c.attrs.as_ref()),
                    id: c.id,
                    kind,
                    position,
                })
            }
            _ => Cell::Other { id: c.id, kind },
        };
        out.push(cell);
    }
    Ok(out)
}
