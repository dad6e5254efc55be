//! Barycentric coordinates of the origin projected on the affine hull of a
//! simplex.

use crate::math::{Point, Real, DEFAULT_EPSILON};

/// Computes the barycentric coordinates `[u, v]` of the point closest to the
/// origin on the infinite line through `a` and `b`.
///
/// The closest point itself is `u * a + v * b`. Returns `false` if `a` and `b`
/// do not define a line (they coincide); the coordinates then select whichever
/// input point is closest to the origin.
pub fn origin_barycentric_coords_on_line(a: &Point<Real>, b: &Point<Real>) -> ([Real; 2], bool) {
    let ab = b - a;
    let denom = ab.norm_squared();

    if denom < DEFAULT_EPSILON * DEFAULT_EPSILON {
        // Degenerate segment, fall back to the closest endpoint.
        if a.coords.norm_squared() < b.coords.norm_squared() {
            return ([1.0, 0.0], false);
        } else {
            return ([0.0, 1.0], false);
        }
    }

    let v = -a.coords.dot(&ab) / denom;
    ([1.0 - v, v], true)
}

/// Computes the barycentric coordinates `[u, v, w]` of the point closest to
/// the origin on the plane through `a`, `b` and `c`.
///
/// The closest point itself is `u * a + v * b + w * c`. No bound check is
/// performed: the coordinates may be negative or larger than one if the
/// projection of the origin lies outside of the triangle `a, b, c`.
///
/// Returns `false` if `a`, `b`, `c` do not define a plane (they are collinear
/// or coincide); the coordinates then locate the closest point on the longest
/// edge of the flat triangle.
pub fn origin_barycentric_coords_on_plane(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> ([Real; 3], bool) {
    // Cramer's rule on the 2x2 Gram system, with the edge pair chosen so that
    // the shortest edge of the triangle always participates. Products of the
    // form x * y - z * w stay small that way, which preserves accuracy when
    // one edge is much shorter than the others.
    let ab = b - a;
    let ac = c - a;
    let bc = c - b;

    let d00 = ab.norm_squared();
    let d11 = ac.norm_squared();
    let d22 = bc.norm_squared();

    if d00 <= d22 {
        // Solve with the edge pair (ab, ac).
        let d01 = ab.dot(&ac);
        let denom = d00 * d11 - d01 * d01;

        if denom < 1.0e-12 {
            log::debug!("Degenerate triangle in plane projection, falling back to an edge.");

            // Flat triangle, return coordinates along its longest edge.
            if d00 > d11 {
                let ([u, v], _) = origin_barycentric_coords_on_line(a, b);
                return ([u, v, 0.0], false);
            } else {
                let ([u, w], _) = origin_barycentric_coords_on_line(a, c);
                return ([u, 0.0, w], false);
            }
        }

        let a0 = a.coords.dot(&ab);
        let a1 = a.coords.dot(&ac);
        let v = (d01 * a1 - d11 * a0) / denom;
        let w = (d01 * a0 - d00 * a1) / denom;
        ([1.0 - v - w, v, w], true)
    } else {
        // Solve with the edge pair (ac, bc).
        let d12 = ac.dot(&bc);
        let denom = d11 * d22 - d12 * d12;

        if denom < 1.0e-12 {
            log::debug!("Degenerate triangle in plane projection, falling back to an edge.");

            if d11 > d22 {
                let ([u, w], _) = origin_barycentric_coords_on_line(a, c);
                return ([u, 0.0, w], false);
            } else {
                let ([v, w], _) = origin_barycentric_coords_on_line(b, c);
                return ([0.0, v, w], false);
            }
        }

        let c1 = c.coords.dot(&ac);
        let c2 = c.coords.dot(&bc);
        let v = (d22 * c1 - d12 * c2) / denom;
        let w = (d11 * c2 - d12 * c1) / denom;
        ([1.0 - v - w, v, w], true)
    }
}
