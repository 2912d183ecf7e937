//! Polygon triangulation and rounded-rectangle outlines.

use dieline_types::{Point2, Rect};

/// Points per quarter-circle corner arc.
const ARC_STEPS: usize = 4;

/// Geometric tolerance for the ear tests.
const EPSILON: f64 = 1e-9;

/// Triangulate a simple polygon by ear clipping.
///
/// Returns index triples into `points`, wound counter-clockwise with
/// respect to the polygon plane regardless of the input orientation.
/// Fewer than three points yields no triangles.
pub(crate) fn triangulate(points: &[Point2<f64>]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..n).collect();
    if signed_area(points) < 0.0 {
        order.reverse();
    }

    let mut triangles = Vec::with_capacity(n - 2);
    while order.len() > 3 {
        let mut clipped = false;
        for i in 0..order.len() {
            let prev = order[(i + order.len() - 1) % order.len()];
            let curr = order[i];
            let next = order[(i + 1) % order.len()];
            if is_ear(points, &order, prev, curr, next) {
                triangles.push([prev, curr, next]);
                order.remove(i);
                clipped = true;
                break;
            }
        }
        if !clipped {
            // Collinear or degenerate remainder; fan-fill what's left
            // rather than spin.
            for i in 1..order.len() - 1 {
                triangles.push([order[0], order[i], order[i + 1]]);
            }
            return triangles;
        }
    }
    triangles.push([order[0], order[1], order[2]]);
    triangles
}

/// An ear is a convex corner whose triangle contains no other vertex.
fn is_ear(points: &[Point2<f64>], order: &[usize], prev: usize, curr: usize, next: usize) -> bool {
    let a = points[prev];
    let b = points[curr];
    let c = points[next];
    if cross(a, b, c) <= EPSILON {
        return false;
    }
    order
        .iter()
        .filter(|&&i| i != prev && i != curr && i != next)
        .all(|&i| !point_in_triangle(points[i], a, b, c))
}

fn point_in_triangle(p: Point2<f64>, a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> bool {
    let d0 = cross(a, b, p);
    let d1 = cross(b, c, p);
    let d2 = cross(c, a, p);
    let has_neg = d0 < -EPSILON || d1 < -EPSILON || d2 < -EPSILON;
    let has_pos = d0 > EPSILON || d1 > EPSILON || d2 > EPSILON;
    !(has_neg && has_pos)
}

/// Z component of `(b - a) x (c - b)`.
#[inline]
fn cross(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x)
}

/// Twice the signed polygon area (shoelace), positive for
/// counter-clockwise vertex order.
fn signed_area(points: &[Point2<f64>]) -> f64 {
    let mut area = 0.0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        area += p.x * q.y - q.x * p.y;
    }
    area
}

/// Rounded-rectangle outline of `bounds`, in layout coordinates.
///
/// The radius is clamped to half the shorter side; each corner becomes
/// a quarter-circle arc of [`ARC_STEPS`] segments.
pub(crate) fn rounded_rect(bounds: &Rect, radius: f64) -> Vec<Point2<f64>> {
    let r = radius.min(bounds.width * 0.5).min(bounds.height * 0.5);
    let right = bounds.right();
    let bottom = bounds.bottom();

    // (arc center, start angle); each arc sweeps a quarter turn.
    let corners = [
        (Point2::new(right - r, bounds.y + r), -std::f64::consts::FRAC_PI_2),
        (Point2::new(right - r, bottom - r), 0.0),
        (Point2::new(bounds.x + r, bottom - r), std::f64::consts::FRAC_PI_2),
        (Point2::new(bounds.x + r, bounds.y + r), std::f64::consts::PI),
    ];

    let mut points: Vec<Point2<f64>> = Vec::with_capacity(4 * (ARC_STEPS + 1));
    for (center, start) in corners {
        for step in 0..=ARC_STEPS {
            #[allow(clippy::cast_precision_loss)]
            let angle = start + std::f64::consts::FRAC_PI_2 * (step as f64 / ARC_STEPS as f64);
            let p = Point2::new(center.x + r * angle.cos(), center.y + r * angle.sin());
            if points.last().is_none_or(|last| (p - last).norm() > EPSILON) {
                points.push(p);
            }
        }
    }
    // Arc endpoints can meet when the radius saturates a side.
    if points.len() > 1 && (points[0] - points[points.len() - 1]).norm() <= EPSILON {
        points.pop();
    }
    points
}
