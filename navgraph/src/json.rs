use crate::algorithms::extract::generate_graph;
use crate::config::ExtractConfig;
use crate::diagram::Cell;
use crate::error::CodecError;
use crate::geometry::limits;
use crate::model::{Edge, StairsRef, Vertex};
use crate::Graph;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashSet;

#[derive(Serialize)]
struct GraphSer<'a> {
    vertices: &'a [Vertex],
    edges: &'a [Edge],
}

pub fn to_json_value_impl(g: &Graph) -> Value {
    json!({ "vertices": g.vertices, "edges": g.edges })
}

pub fn to_json_string_impl(g: &Graph, pretty: bool) -> Result<String, CodecError> {
    let doc = GraphSer { vertices: &g.vertices, edges: &g.edges };
    let s = if pretty { serde_json::to_string_pretty(&doc)? } else { serde_json::to_string(&doc)? };
    Ok(s)
}

/// Strict decode of a graph document: every rejection carries a reason.
pub fn from_json_value_impl(v: Value) -> Result<Graph, CodecError> {
    #[derive(Deserialize)]
    struct GraphDe {
        vertices: Vec<Vertex>,
        edges: Vec<Edge>,
    }
    let doc: GraphDe = serde_json::from_value(v)?;
    if doc.vertices.len() > limits::MAX_VERTICES {
        return Err(CodecError::CapsExceeded { what: "vertices", limit: limits::MAX_VERTICES });
    }
    if doc.edges.len() > limits::MAX_EDGES {
        return Err(CodecError::CapsExceeded { what: "edges", limit: limits::MAX_EDGES });
    }
    let mut seen = HashSet::with_capacity(doc.vertices.len());
    for v in &doc.vertices {
        if !limits::in_coord_bounds(v.x) || !limits::in_coord_bounds(v.y) {
            return Err(CodecError::OutOfBounds(format!("coordinate of vertex {}", v.id)));
        }
        if !seen.insert(v.id.as_str()) {
            return Err(CodecError::InvalidStructure(format!("duplicate vertex id {}", v.id)));
        }
    }
    for e in &doc.edges {
        if !limits::is_valid_weight(e.weight) {
            return Err(CodecError::OutOfBounds(format!(
                "weight of edge {} -> {}",
                e.source, e.target
            )));
        }
    }
    Ok(Graph { vertices: doc.vertices, edges: doc.edges })
}

pub fn from_json_str_impl(s: &str) -> Result<Graph, CodecError> {
    from_json_value_impl(serde_json::from_str(s)?)
}

// Stairs document: { "stairsRefs": [ { "fromId", "toIds" } ] }

pub fn stairs_to_json_value(refs: &[StairsRef]) -> Value {
    json!({ "stairsRefs": refs })
}

pub fn stairs_from_json_value(v: Value) -> Result<Vec<StairsRef>, CodecError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct StairsDe {
        stairs_refs: Vec<StairsRef>,
    }
    let doc: StairsDe = serde_json::from_value(v)?;
    if doc.stairs_refs.len() > limits::MAX_STAIRS_REFS {
        return Err(CodecError::CapsExceeded {
            what: "stairs refs",
            limit: limits::MAX_STAIRS_REFS,
        });
    }
    Ok(doc.stairs_refs)
}

// Diagram export of the canvas, see `crate::jointjs`.

pub fn diagram_from_json_value(v: Value) -> Result<Vec<Cell>, CodecError> {
    crate::jointjs::cells_from_value(v)
}

/// Parse a canvas export and run the full extraction pipeline on it.
pub fn import_graph(
    diagram: Value,
    stairs: &[StairsRef],
    cfg: &ExtractConfig,
) -> Result<Graph, CodecError> {
    let cells = diagram_from_json_value(diagram)?;
    Ok(generate_graph(&cells, stairs, cfg))
}

pub fn import_graph_str(
    diagram: &str,
    stairs: &[StairsRef],
    cfg: &ExtractConfig,
) -> Result<Graph, CodecError> {
    import_graph(serde_json::from_str(diagram)?, stairs, cfg)
}
