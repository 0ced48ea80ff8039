use skirmish_core::Point;

/// Cost of one horizontal or vertical step.
pub const ORTHOGONAL_COST: i32 = 10;

/// Cost of one diagonal step (≈ 10·√2).
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance between two tiles in integer step-cost units.
///
/// This is the exact cost of an unobstructed 8-way walk from `a` to `b`, so
/// it doubles as a consistent A* heuristic.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    DIAGONAL_COST * lo + ORTHOGONAL_COST * (hi - lo)
}
