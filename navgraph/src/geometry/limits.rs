// Centralized ingestion limits to harden against untrusted input (graph/diagram/stairs JSON)

// Document size caps
pub const MAX_CELLS: usize = 200_000;
pub const MAX_VERTICES: usize = 500_000;
pub const MAX_EDGES: usize = 1_000_000;
pub const MAX_STAIRS_REFS: usize = 50_000;

// Links
pub const MAX_BEND_POINTS_PER_LINK: usize = 8_000;
pub const MAX_BEND_POINTS_TOTAL: usize = 2_000_000;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 = 10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && (COORD_MIN..=COORD_MAX).contains(&x) }

#[inline]
pub fn is_valid_weight(w: f64) -> bool { w.is_finite() && w >= 0.0 }
