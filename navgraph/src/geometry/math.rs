use crate::model::Point;

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`. This is the weight of
/// every edge drawn directly on the canvas.
#[inline]
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

#[inline]
pub fn point_distance(a: Point, b: Point) -> f64 {
    distance(a.x, a.y, b.x, b.y)
}

/// Exact coordinate match, no epsilon. Anchors recovered by coordinate rely on
/// the canvas handing back bit-identical bend points.
#[inline]
pub fn same_point(a: Point, b: Point) -> bool {
    a.x == b.x && a.y == b.y
}
