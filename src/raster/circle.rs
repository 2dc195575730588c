//! Midpoint circle rasterization.

use crate::geometry::Point;

/// Produce the outline points of the circle centered at `(cx, cy)` with the
/// given radius, using the midpoint algorithm with 8-way symmetry.
///
/// Exact integer arithmetic: `x` starts at `radius`, `y` at 0, and the
/// error term decides whether each step advances `y` or retreats `x`,
/// stopping once `x < y`. Each step emits all eight reflections of `(x, y)`
/// about the axes and the diagonal; duplicates on the axes are emitted as-is
/// and collapse in the pixel buffer. A radius of 0 therefore yields (copies
/// of) the single center point; a negative radius yields nothing.
#[must_use]
pub fn circle_points(cx: i64, cy: i64, radius: i64) -> Vec<Point> {
    let mut points = Vec::new();
    let mut x = radius;
    let mut y = 0i64;
    let mut error = 0i64;

    while x >= y {
        for (px, py) in octant_reflections(x, y) {
            points.push(Point::new((cx + px) as f64, (cy + py) as f64));
        }
        if error <= 0 {
            y += 1;
            error += 2 * y + 1;
        } else {
            x -= 1;
            error -= 2 * x + 1;
        }
    }
    points
}

/// The eight symmetric reflections of `(x, y)` about both axes and the
/// diagonal.
fn octant_reflections(x: i64, y: i64) -> [(i64, i64); 8] {
    [
        (x, y),
        (-x, y),
        (x, -y),
        (-x, -y),
        (y, -x),
        (y, x),
        (-y, x),
        (-y, -x),
    ]
}
