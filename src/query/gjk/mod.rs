//! The simplex closest-point core of the GJK distance algorithm.
//!
//! Everything here operates in Minkowski-difference space: the "origin" is
//! the query point, and the points of a simplex are support points of the
//! difference of two convex shapes. An outer GJK loop is expected to push one
//! support point per iteration into a [`Simplex`], ask it for the closest
//! point and supporting feature, and compact the simplex with the feature's
//! vertex set before the next iteration.

pub use self::barycentric::{
    origin_barycentric_coords_on_line, origin_barycentric_coords_on_plane,
};
pub use self::closest_point::{
    closest_point_on_segment, closest_point_on_tetrahedron, closest_point_on_triangle,
    origin_outside_tetrahedron_planes,
};
pub use self::cso_point::CsoPoint;
pub use self::feature::{ClosestFeature, VertexSet};
pub use self::simplex::{NoSeparatingWitness, Simplex};

mod barycentric;
mod closest_point;
mod cso_point;
mod feature;
mod simplex;
