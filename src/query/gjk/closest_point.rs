//! Closest point to the origin on a bounded simplex, with classification of
//! the supporting feature.

use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::query::gjk::barycentric::origin_barycentric_coords_on_line;
use crate::query::gjk::ClosestFeature;
use num::Bounded;

/// Computes the closest point to the origin on the segment `(a, b)`.
///
/// The returned feature identifies whether the closest point is the vertex
/// `a`, the vertex `b`, or lies strictly between them.
pub fn closest_point_on_segment(a: &Point<Real>, b: &Point<Real>) -> (Point<Real>, ClosestFeature) {
    let ([u, v], _) = origin_barycentric_coords_on_line(a, b);

    if v <= 0.0 {
        (*a, ClosestFeature::Vertex(0))
    } else if u <= 0.0 {
        (*b, ClosestFeature::Vertex(1))
    } else {
        let point = Point::from(a.coords * u + b.coords * v);
        (point, ClosestFeature::Edge(0, 1))
    }
}

/// Computes the closest point to the origin on the triangle `(a, b, c)`.
///
/// The returned feature identifies the vertex, edge or face supporting the
/// closest point, with indices relative to the argument order.
///
/// When `must_include_c` is `true`, the caller guarantees that `c` is part of
/// the closest feature (typically because `c` is the support point added to a
/// growing simplex this iteration, so no strict subset excluding it can be
/// closer). The degenerate-triangle fallback then skips the features that
/// exclude `c`. Passing `true` without that guarantee returns wrong results,
/// not merely slower ones.
pub fn closest_point_on_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    must_include_c: bool,
) -> (Point<Real>, ClosestFeature) {
    // The plane normal is most accurate when it involves the shortest edges.
    // The difference matters when one edge is much shorter than the other two,
    // so it is enough to compare ac against bc and swap `a` and `c` so that
    // `a` always sits on the shorter of the two. Features computed on the
    // swapped triangle are remapped back before returning.
    let swap_ac = (c - b).norm_squared() < (c - a).norm_squared();
    let (pa, pc) = if swap_ac { (c, a) } else { (a, c) };
    let pb = b;

    let unswap = |feature: ClosestFeature| {
        if swap_ac {
            feature.remap([2, 1, 0])
        } else {
            feature
        }
    };

    let ab = pb - pa;
    let ac = pc - pa;
    let n = ab.cross(&ac);
    let normal_len_sqr = n.norm_squared();

    // An epsilon-squared threshold here is too small in practice and lets
    // near-flat triangles through with a garbage normal.
    if normal_len_sqr < 1.0e-10 {
        return closest_point_on_flat_triangle(a, b, c, must_include_c);
    }

    // Voronoi region of `pa`.
    let ap = -pa.coords;
    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return (*pa, unswap(ClosestFeature::Vertex(0)));
    }

    // Voronoi region of `pb`.
    let bp = -pb.coords;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return (*pb, unswap(ClosestFeature::Vertex(1)));
    }

    // Voronoi region of the edge `pa pb`.
    if d1 * d4 <= d3 * d2 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return (pa + ab * v, unswap(ClosestFeature::Edge(0, 1)));
    }

    // Voronoi region of `pc`.
    let cp = -pc.coords;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return (*pc, unswap(ClosestFeature::Vertex(2)));
    }

    // Voronoi region of the edge `pa pc`.
    if d5 * d2 <= d1 * d6 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return (pa + ac * w, unswap(ClosestFeature::Edge(0, 2)));
    }

    // Voronoi region of the edge `pb pc`.
    let d4_d3 = d4 - d3;
    let d5_d6 = d5 - d6;
    if d3 * d6 <= d5 * d4 && d4_d3 >= 0.0 && d5_d6 >= 0.0 {
        let w = d4_d3 / (d4_d3 + d5_d6);
        return (pb + (pc - pb) * w, unswap(ClosestFeature::Edge(1, 2)));
    }

    // The origin projects inside the face. Projecting the centroid onto the
    // plane normal is noticeably more accurate than interpolating the point
    // from barycentric coordinates.
    let sum = pa.coords + pb.coords + pc.coords;
    let point = Point::from(n * (sum.dot(&n) / (3.0 * normal_len_sqr)));
    (point, ClosestFeature::Face(0, 1, 2))
}

/// Vertex/edge scan for triangles whose normal vanished.
fn closest_point_on_flat_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    must_include_c: bool,
) -> (Point<Real>, ClosestFeature) {
    log::debug!("Degenerate triangle in closest-point query: scanning vertices and edges.");

    // Clamped projection of the origin on an edge, skipping zero-length edges.
    fn project_on_edge(p1: &Point<Real>, p2: &Point<Real>) -> Option<(Point<Real>, Real)> {
        let dir = p2 - p1;
        let len_sqr = dir.norm_squared();

        if len_sqr > DEFAULT_EPSILON * DEFAULT_EPSILON {
            let t = (-p1.coords.dot(&dir) / len_sqr).clamp(0.0, 1.0);
            let point = p1 + dir * t;
            let dist_sqr = point.coords.norm_squared();
            Some((point, dist_sqr))
        } else {
            None
        }
    }

    // Vertex C is always an eligible feature.
    let mut best_point = *c;
    let mut best_feature = ClosestFeature::Vertex(2);
    let mut best_dist_sqr = c.coords.norm_squared();

    if !must_include_c {
        let dist_sqr = a.coords.norm_squared();
        if dist_sqr < best_dist_sqr {
            best_point = *a;
            best_feature = ClosestFeature::Vertex(0);
            best_dist_sqr = dist_sqr;
        }

        let dist_sqr = b.coords.norm_squared();
        if dist_sqr < best_dist_sqr {
            best_point = *b;
            best_feature = ClosestFeature::Vertex(1);
            best_dist_sqr = dist_sqr;
        }
    }

    // Edge AC.
    if let Some((point, dist_sqr)) = project_on_edge(a, c) {
        if dist_sqr < best_dist_sqr {
            best_point = point;
            best_feature = ClosestFeature::Edge(0, 2);
            best_dist_sqr = dist_sqr;
        }
    }

    // Edge BC.
    if let Some((point, dist_sqr)) = project_on_edge(b, c) {
        if dist_sqr < best_dist_sqr {
            best_point = point;
            best_feature = ClosestFeature::Edge(1, 2);
            best_dist_sqr = dist_sqr;
        }
    }

    // Edge AB, unless the feature must include C.
    if !must_include_c {
        if let Some((point, dist_sqr)) = project_on_edge(a, b) {
            if dist_sqr < best_dist_sqr {
                best_point = point;
                best_feature = ClosestFeature::Edge(0, 1);
            }
        }
    }

    (best_point, best_feature)
}

/// Determines for each face of the tetrahedron `(a, b, c, d)` whether the
/// origin is outside of its supporting plane, in face order ABC, ACD, ADB,
/// BDC.
///
/// The side of each plane that counts as outside is taken from the fourth
/// vertex. For a well-formed tetrahedron the four reference signs agree; if
/// they do not (near-coplanar vertices), the origin is reported outside of
/// every face so the caller re-examines all of them instead of silently
/// discarding one that might hold the answer.
pub fn origin_outside_tetrahedron_planes(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> [bool; 4] {
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    let bd = d - b;
    let bc = c - b;

    let ab_x_ac = ab.cross(&ac);
    let ac_x_ad = ac.cross(&ad);
    let ad_x_ab = ad.cross(&ab);
    let bd_x_bc = bd.cross(&bc);

    // Side of each plane the origin is on.
    let sign_p = [
        a.coords.dot(&ab_x_ac), // ABC
        a.coords.dot(&ac_x_ad), // ACD
        a.coords.dot(&ad_x_ab), // ADB
        b.coords.dot(&bd_x_bc), // BDC
    ];

    // Side of each plane its opposite vertex is on.
    let sign_d = [
        ad.dot(&ab_x_ac),  // D
        ab.dot(&ac_x_ad),  // B
        ac.dot(&ad_x_ab),  // C
        -ab.dot(&bd_x_bc), // A
    ];

    let all_pos = sign_d.iter().all(|s| !s.is_sign_negative());
    let all_neg = sign_d.iter().all(|s| s.is_sign_negative());

    if all_pos {
        sign_p.map(|s| s >= -DEFAULT_EPSILON)
    } else if all_neg {
        sign_p.map(|s| s <= DEFAULT_EPSILON)
    } else {
        log::debug!("Degenerate tetrahedron in closest-point query: examining every face.");
        [true; 4]
    }
}

/// Computes the closest point to the origin on the tetrahedron `(a, b, c, d)`.
///
/// The returned feature identifies the vertex, edge or face supporting the
/// closest point, with indices relative to the argument order;
/// [`ClosestFeature::Interior`] means the origin is enclosed by the
/// tetrahedron and the returned point is the origin itself.
///
/// `must_include_d` carries the same contract as `must_include_c` of
/// [`closest_point_on_triangle`]: it may only be `true` when `d` is known to
/// be part of the closest feature.
pub fn closest_point_on_tetrahedron(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
    must_include_d: bool,
) -> (Point<Real>, ClosestFeature) {
    // Start out assuming the origin is inside all four half-spaces, so closest
    // to itself.
    let mut best_point = Point::origin();
    let mut best_feature = ClosestFeature::Interior;
    let mut best_dist_sqr: Real = Bounded::max_value();

    let outside = origin_outside_tetrahedron_planes(a, b, c, d);

    // Face ABC.
    if outside[0] {
        if must_include_d {
            // D must be part of the closest feature, so neither ABC nor an
            // interior point can be closest. Fall back to the vertex A and let
            // the remaining faces compete on distance.
            best_point = *a;
            best_feature = ClosestFeature::Vertex(0);
        } else {
            let (point, feature) = closest_point_on_triangle(a, b, c, false);
            best_point = point;
            best_feature = feature;
        }

        best_dist_sqr = best_point.coords.norm_squared();
    }

    // Face ACD.
    if outside[1] {
        let (point, feature) = closest_point_on_triangle(a, c, d, must_include_d);
        let dist_sqr = point.coords.norm_squared();

        if dist_sqr < best_dist_sqr {
            best_point = point;
            best_feature = feature.remap([0, 2, 3]);
            best_dist_sqr = dist_sqr;
        }
    }

    // Face ADB, tested with the vertex order (a, b, d): the newest simplex
    // vertex must stay in the `c` slot of the triangle test for
    // `must_include_d` to keep its meaning, and whether the triangle faces
    // inward or outward does not matter for a closest-point query.
    if outside[2] {
        let (point, feature) = closest_point_on_triangle(a, b, d, must_include_d);
        let dist_sqr = point.coords.norm_squared();

        if dist_sqr < best_dist_sqr {
            best_point = point;
            best_feature = feature.remap([0, 1, 3]);
            best_dist_sqr = dist_sqr;
        }
    }

    // Face BDC, tested with the vertex order (b, c, d).
    if outside[3] {
        let (point, feature) = closest_point_on_triangle(b, c, d, must_include_d);
        let dist_sqr = point.coords.norm_squared();

        if dist_sqr < best_dist_sqr {
            best_point = point;
            best_feature = feature.remap([1, 2, 3]);
        }
    }

    (best_point, best_feature)
}
