/*!
gjk3d
========

**gjk3d** is the simplex closest-point core of the Gilbert-Johnson-Keerthi
(GJK) distance algorithm, written with the rust programming language.

It provides the numerically robust routines that, given the 1-4 points of a
simplex in Minkowski-difference space, determine the point on that simplex
closest to the origin, classify which sub-feature (vertex, edge or face) is
responsible, and reduce the simplex accordingly. An outer GJK iteration (not
part of this crate) feeds one support point per iteration into a
[`query::gjk::Simplex`] and uses the returned closest point and feature to
drive convergence.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate core as std;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod query;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use na::Point3 as Point;

    /// The vector type.
    pub use na::Vector3 as Vector;

    /// The unit vector type.
    pub use na::UnitVector3 as UnitVector;
}
