use crate::math::{Point, Real};
use crate::query::gjk::barycentric::{
    origin_barycentric_coords_on_line, origin_barycentric_coords_on_plane,
};
use crate::query::gjk::closest_point::{
    closest_point_on_segment, closest_point_on_tetrahedron, closest_point_on_triangle,
};
use crate::query::gjk::{ClosestFeature, CsoPoint, VertexSet};

/// There is no pair of separating witness points to reconstruct.
///
/// Returned when the committed simplex encloses the origin (the shapes
/// overlap) or is empty. This is a defined outcome the caller branches on,
/// not a programming error.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("no separating witness points: the shapes overlap or the simplex is empty")]
pub struct NoSeparatingWitness;

/// The point set a GJK query iterates on: up to four support points of the
/// Minkowski difference together with the witness points they came from.
///
/// The three arrays are index-aligned: `y[i] == p[i] - q[i]` for every slot
/// below `len` (up to rounding), where `p[i]` lies on the first shape and
/// `q[i]` on the second. An instance belongs to a single in-progress query:
/// the outer loop pushes one support point per iteration, asks for the
/// closest point on the current simplex, and compacts the arrays with the
/// returned feature before the next iteration.
#[derive(Clone, Debug)]
pub struct Simplex {
    y: [Point<Real>; 4],
    p: [Point<Real>; 4],
    q: [Point<Real>; 4],
    len: usize,
}

/// Compacts `arr` in place, keeping the slots flagged in `keep` in ascending
/// slot order. Returns the number of slots kept.
fn compact<T: Copy>(arr: &mut [T; 4], len: usize, keep: VertexSet) -> usize {
    let mut new_len = 0;

    for i in 0..len {
        if keep.contains(VertexSet::vertex(i)) {
            arr[new_len] = arr[i];
            new_len += 1;
        }
    }

    new_len
}

impl Simplex {
    /// Creates a new empty simplex.
    pub fn new() -> Simplex {
        Simplex {
            y: [Point::origin(); 4],
            p: [Point::origin(); 4],
            q: [Point::origin(); 4],
            len: 0,
        }
    }

    /// The number of points currently in the simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Does the simplex contain no point at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a support point to the simplex.
    ///
    /// Panics when the simplex already holds four points: a tetrahedron is
    /// the maximal simplex in three dimensions, and pushing past it means the
    /// caller skipped a reduction step.
    pub fn push(&mut self, pt: CsoPoint) {
        assert!(self.len < 4, "The simplex cannot hold more than 4 points.");
        self.y[self.len] = pt.point;
        self.p[self.len] = pt.orig1;
        self.q[self.len] = pt.orig2;
        self.len += 1;
    }

    /// The `i`-th support point of the simplex, in difference space.
    #[inline]
    pub fn point(&self, i: usize) -> &Point<Real> {
        assert!(i < self.len, "Index out of bounds.");
        &self.y[i]
    }

    /// The witness point on the first shape backing the `i`-th support point.
    #[inline]
    pub fn witness_a(&self, i: usize) -> &Point<Real> {
        assert!(i < self.len, "Index out of bounds.");
        &self.p[i]
    }

    /// The witness point on the second shape backing the `i`-th support point.
    #[inline]
    pub fn witness_b(&self, i: usize) -> &Point<Real> {
        assert!(i < self.len, "Index out of bounds.");
        &self.q[i]
    }

    /// The `i`-th support point with its two witness points reassembled.
    #[inline]
    pub fn cso_point(&self, i: usize) -> CsoPoint {
        assert!(i < self.len, "Index out of bounds.");
        CsoPoint::new_with_point(self.y[i], self.p[i], self.q[i])
    }

    /// The maximum squared length of the support points of this simplex.
    ///
    /// Outer loops use this to scale their no-progress tolerances relative to
    /// the size of the simplex.
    pub fn max_point_len_sqr(&self) -> Real {
        let mut max_sq_len = 0.0;

        for i in 0..self.len {
            let norm = self.y[i].coords.norm_squared();

            if norm > max_sq_len {
                max_sq_len = norm
            }
        }

        max_sq_len
    }

    fn validate_kept_set(&self, keep: VertexSet) {
        assert!(
            (keep.bits() >> self.len) == 0,
            "The kept vertex set references points past the end of the simplex."
        );
    }

    /// Removes the points not in `keep`, updating only the difference-space
    /// array.
    ///
    /// The witness arrays are left stale; this is the variant used to test a
    /// candidate simplex before committing to it. Panics if `keep` references
    /// a point past the current length.
    pub fn retain_y(&mut self, keep: VertexSet) {
        self.validate_kept_set(keep);
        self.len = compact(&mut self.y, self.len, keep);
    }

    /// Removes the points not in `keep`, updating only the witness array of
    /// the first shape.
    ///
    /// Used when the difference-space points are recomputed from scratch every
    /// iteration and only one shape's witnesses matter. Panics if `keep`
    /// references a point past the current length.
    pub fn retain_p(&mut self, keep: VertexSet) {
        self.validate_kept_set(keep);
        self.len = compact(&mut self.p, self.len, keep);
    }

    /// Removes the points not in `keep`, updating both witness arrays.
    ///
    /// Panics if `keep` references a point past the current length.
    pub fn retain_pq(&mut self, keep: VertexSet) {
        self.validate_kept_set(keep);
        let new_len = compact(&mut self.p, self.len, keep);
        let _ = compact(&mut self.q, self.len, keep);
        self.len = new_len;
    }

    /// Removes the points not in `keep`, updating all three arrays.
    ///
    /// This is the full commit once a closest feature has been chosen. Panics
    /// if `keep` references a point past the current length.
    pub fn retain_ypq(&mut self, keep: VertexSet) {
        self.validate_kept_set(keep);
        let new_len = compact(&mut self.y, self.len, keep);
        let _ = compact(&mut self.p, self.len, keep);
        let _ = compact(&mut self.q, self.len, keep);
        self.len = new_len;
    }

    /// Computes the point of the current simplex closest to the origin and
    /// the feature supporting it.
    ///
    /// `last_is_closest_feature` forwards the `must_include_*` contract of
    /// the triangle and tetrahedron classifiers: pass `true` only when the
    /// point pushed last is known to be part of the closest feature, which is
    /// the standard situation right after adding a fresh support point to a
    /// reduced simplex. Passing `true` without that guarantee returns wrong
    /// results, not merely slower ones.
    ///
    /// Panics if the simplex is empty.
    pub fn closest_point(&self, last_is_closest_feature: bool) -> (Point<Real>, ClosestFeature) {
        match self.len {
            1 => (self.y[0], ClosestFeature::Vertex(0)),
            2 => closest_point_on_segment(&self.y[0], &self.y[1]),
            3 => closest_point_on_triangle(
                &self.y[0],
                &self.y[1],
                &self.y[2],
                last_is_closest_feature,
            ),
            4 => closest_point_on_tetrahedron(
                &self.y[0],
                &self.y[1],
                &self.y[2],
                &self.y[3],
                last_is_closest_feature,
            ),
            _ => panic!("The simplex must contain 1 to 4 points."),
        }
    }

    /// Reconstructs the closest points on the two original shapes from the
    /// committed simplex.
    ///
    /// The barycentric weights of the origin's projection on the simplex are
    /// recomputed here and applied to both witness arrays. A 4-point simplex
    /// encloses the origin, so the shapes overlap and no separating pair
    /// exists; this (and the empty simplex) is reported as
    /// [`NoSeparatingWitness`].
    pub fn witness_points(&self) -> Result<(Point<Real>, Point<Real>), NoSeparatingWitness> {
        match self.len {
            1 => Ok((self.p[0], self.q[0])),
            2 => {
                let ([u, v], _) = origin_barycentric_coords_on_line(&self.y[0], &self.y[1]);
                let pa = self.p[0].coords * u + self.p[1].coords * v;
                let pb = self.q[0].coords * u + self.q[1].coords * v;
                Ok((Point::from(pa), Point::from(pb)))
            }
            3 => {
                let ([u, v, w], _) =
                    origin_barycentric_coords_on_plane(&self.y[0], &self.y[1], &self.y[2]);
                let pa = self.p[0].coords * u + self.p[1].coords * v + self.p[2].coords * w;
                let pb = self.q[0].coords * u + self.q[1].coords * v + self.q[2].coords * w;
                Ok((Point::from(pa), Point::from(pb)))
            }
            _ => Err(NoSeparatingWitness),
        }
    }
}

impl Default for Simplex {
    fn default() -> Self {
        Self::new()
    }
}
