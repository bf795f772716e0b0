use crate::model::{Edge, StairsRef};
use crate::Graph;

/// Append one zero-weight `toNextFloor` edge per `(from, to)` pair of every
/// declaration whose `from_id` names a map object present in `g`. Targets are
/// map object ids on other floors and are not required to exist here.
pub fn augment(mut g: Graph, stairs: &[StairsRef]) -> Graph {
    let mut added = 0usize;
    for s in stairs {
        let Some(from) = g.vertex_by_map_object(&s.from_id).map(|v| v.id.clone()) else {
            log::trace!("floor link from {} skipped: not on this floor", s.from_id);
            continue;
        };
        for to in &s.to_ids {
            g.edges.push(Edge::floor_link(from.clone(), to.clone()));
            added += 1;
        }
    }
    log::debug!("added {} floor transition edges", added);
    g
}

/// Set the targets of `from_id`, appending a declaration if none exists yet.
pub fn upsert(refs: &mut Vec<StairsRef>, from_id: &str, to_ids: Vec<String>) {
    match refs.iter_mut().find(|r| r.from_id == from_id) {
        Some(r) => r.to_ids = to_ids,
        None => refs.push(StairsRef { from_id: from_id.to_string(), to_ids }),
    }
}

pub fn targets_of<'a>(refs: &'a [StairsRef], from_id: &str) -> &'a [String] {
    refs.iter()
        .find(|r| r.from_id == from_id)
        .map(|r| r.to_ids.as_slice())
        .unwrap_or(&[])
}
